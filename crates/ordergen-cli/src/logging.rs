use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::util::SubscriberInitExt;

use crate::CliError;

/// Default filter when `RUST_LOG` is unset. Keeps stderr down to progress lines.
const DEFAULT_FILTER: &str = "warn";

pub fn init_logging() -> Result<(), CliError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    subscriber(filter, io::stderr, io::stderr().is_terminal())
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

/// Colors only when `ansi` is set, so redirected stderr stays plain text.
fn subscriber<W>(
    filter: EnvFilter,
    writer: W,
    ansi: bool,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(writer)
        .with_ansi(ansi)
        .finish()
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

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

    fn capture(ansi: bool) -> String {
        let logs = SharedBuffer::default();
        let writer = logs.clone();
        let subscriber = subscriber(EnvFilter::new("info"), move || writer.clone(), ansi);
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(event = "sample", "plain text check");
        });
        let bytes = logs.0.lock().expect("lock logs").clone();
        String::from_utf8(bytes).expect("utf8 logs")
    }

    #[test]
    fn redirected_output_has_no_escape_codes() {
        let text = capture(false);
        assert!(text.contains("plain text check"), "{text}");
        assert!(!text.contains('\u{1b}'), "{text:?}");
    }

    #[test]
    fn terminal_output_is_colored() {
        assert!(capture(true).contains('\u{1b}'));
    }

    #[test]
    fn default_filter_hides_info_and_debug_events() {
        let logs = SharedBuffer::default();
        let writer = logs.clone();
        let subscriber = subscriber(EnvFilter::new(DEFAULT_FILTER), move || writer.clone(), false);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(event = "run_started");
            tracing::debug!(event = "negative_count", requested = -3);
        });
        assert!(logs.0.lock().expect("lock logs").is_empty());
    }
}
