use thiserror::Error;

/// Core error type shared across ordergen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// An order violates a record invariant.
    #[error("invalid order: {0}")]
    InvalidOrder(String),
    /// An address is malformed or inconsistent with its order.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Convenience alias for results returned by ordergen crates.
pub type Result<T> = std::result::Result<T, Error>;
