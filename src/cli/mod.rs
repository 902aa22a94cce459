//! Command Line Interface (CLI) layer.
//!
//! This module defines the long-option table and scanner (`args`), the
//! recoverable diagnostics it produces (`errors`), and the orchestration
//! logic (`runner`) that resolves the configuration and hands it to an
//! [`Engine`](crate::engine::Engine).
pub mod args;
pub mod errors;
pub mod runner;

pub use args::{OptionParser, ParseOutcome, parse_args};
pub use errors::ParseWarning;
pub use runner::{init_logging, run};
