//! Synthetic order generation for ordergen.
//!
//! Draws order records from the fixed reference tables in `ordergen-core`
//! using a caller-supplied RNG, and streams them as newline-delimited JSON.

pub mod driver;
pub mod errors;
pub mod generator;
pub mod output;

pub use driver::{
    DEFAULT_COUNT, DEFAULT_PROGRESS_INTERVAL, RunOptions, RunSummary, run, run_with_clock,
};
pub use errors::GenerationError;
pub use generator::generate_order;
