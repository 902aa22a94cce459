//! Crate-level error type and `Result` alias.
//! Covers the fatal paths only; recoverable command-line problems are
//! reported as `cli::errors::ParseWarning` values instead.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected exactly one non-option argument, found {found}")]
    Usage { found: usize },

    #[error("malformed version banner: {banner:?}")]
    MalformedBanner { banner: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to install interrupt handler: {0}")]
    Interrupt(#[source] std::io::Error),
}
