use std::io::Write;
use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::GenerationError;
use crate::generator::generate_order;
use crate::output::NdjsonWriter;

/// Number of orders produced when the caller does not ask for a count.
pub const DEFAULT_COUNT: u64 = 10;
/// Progress is reported on every multiple of this ordinal.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100;

/// Options for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOptions {
    /// Number of orders to write.
    pub count: u64,
    /// Emit a progress line every `progress_interval` orders. Must be at least 1.
    pub progress_interval: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub orders_written: u64,
    pub bytes_written: u64,
    pub progress_reports: u64,
}

/// Stream `options.count` orders to `out`, reading the wall clock per order.
///
/// See [`run_with_clock`].
pub fn run<R, O, D>(
    options: &RunOptions,
    rng: &mut R,
    out: O,
    diagnostics: D,
) -> Result<RunSummary, GenerationError>
where
    R: Rng + ?Sized,
    O: Write,
    D: Write,
{
    run_with_clock(options, rng, Utc::now, out, diagnostics)
}

/// Stream `options.count` orders to `out` as newline-delimited JSON.
///
/// Ordinals start at 1. Progress lines go to `diagnostics` only, never to
/// `out`. The primary writer is flushed before returning.
pub fn run_with_clock<R, C, O, D>(
    options: &RunOptions,
    rng: &mut R,
    mut clock: C,
    out: O,
    mut diagnostics: D,
) -> Result<RunSummary, GenerationError>
where
    R: Rng + ?Sized,
    C: FnMut() -> DateTime<Utc>,
    O: Write,
    D: Write,
{
    if options.progress_interval == 0 {
        return Err(GenerationError::InvalidOptions(
            "progress interval must be at least 1".to_string(),
        ));
    }

    let started = Instant::now();
    let mut writer = NdjsonWriter::new(out);
    let mut progress_reports = 0_u64;

    info!(
        event = "run_started",
        count = options.count,
        progress_interval = options.progress_interval
    );

    for ordinal in 1..=options.count {
        let order = generate_order(ordinal, clock(), rng);
        debug!(
            ordinal,
            order_id = %order.external_order_id,
            lines = order.order_lines.len(),
            "order generated"
        );
        writer.write_record(&order)?;

        if ordinal % options.progress_interval == 0 {
            writeln!(
                diagnostics,
                "  Generated {ordinal}/{} orders...",
                options.count
            )?;
            progress_reports += 1;
        }
    }

    writer.flush()?;
    diagnostics.flush()?;

    let summary = RunSummary {
        orders_written: writer.records_written(),
        bytes_written: writer.bytes_written(),
        progress_reports,
    };

    info!(
        event = "run_finished",
        status = "success",
        orders = summary.orders_written,
        bytes = summary.bytes_written,
        progress_reports = summary.progress_reports,
        duration_ms = started.elapsed().as_millis() as u64
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let mut inner = self
                .0
                .lock()
                .map_err(|_| io::Error::other("failed to lock log buffer"))?;
            inner.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn logs_one_start_and_one_finish_event() {
        let logs = SharedBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let options = RunOptions {
            count: 3,
            progress_interval: 100,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut out = Vec::new();
        let mut diag = Vec::new();
        tracing::subscriber::with_default(subscriber, || {
            run(&options, &mut rng, &mut out, &mut diag).expect("run generation");
        });

        let text = String::from_utf8(logs.0.lock().expect("lock logs").clone()).expect("utf8");
        assert_eq!(text.matches("event=\"run_started\"").count(), 1, "{text}");
        assert_eq!(text.matches("event=\"run_finished\"").count(), 1, "{text}");
        assert!(!text.contains("order generated"));
    }

    #[test]
    fn rejects_zero_progress_interval_before_writing() {
        let options = RunOptions {
            count: 5,
            progress_interval: 0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut out = Vec::new();
        let mut diag = Vec::new();

        let result = run(&options, &mut rng, &mut out, &mut diag);
        assert!(matches!(result, Err(GenerationError::InvalidOptions(_))));
        assert!(out.is_empty());
        assert!(diag.is_empty());
    }

    #[test]
    fn default_options_match_cli_defaults() {
        let options = RunOptions::default();
        assert_eq!(options.count, 10);
        assert_eq!(options.progress_interval, 100);
    }
}
