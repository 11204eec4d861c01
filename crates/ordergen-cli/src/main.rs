mod logging;

use std::io::{self, BufWriter};

use clap::Parser;
use ordergen_generate::{
    DEFAULT_COUNT, DEFAULT_PROGRESS_INTERVAL, GenerationError, RunOptions, run,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "ordergen",
    version,
    about = "Generate synthetic order events as newline-delimited JSON"
)]
struct Cli {
    /// Number of orders to generate. Zero or negative produces no output.
    #[arg(
        value_name = "COUNT",
        default_value_t = DEFAULT_COUNT as i64,
        allow_negative_numbers = true
    )]
    count: i64,
    /// Seed the random source for a reproducible stream.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Report progress on stderr every N orders.
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_PROGRESS_INTERVAL,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    progress_interval: u64,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    logging::init_logging()?;

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let options = cli.run_options();

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    let diagnostics = io::stderr().lock();

    run(&options, &mut rng, out, diagnostics)?;

    Ok(())
}

impl Cli {
    /// Negative counts generate nothing.
    fn run_options(&self) -> RunOptions {
        let count = u64::try_from(self.count).unwrap_or(0);
        if self.count < 0 {
            tracing::debug!(
                event = "negative_count",
                requested = self.count,
                "nothing to generate"
            );
        }
        RunOptions {
            count,
            progress_interval: self.progress_interval,
        }
    }
}
