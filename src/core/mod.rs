//! Core configuration building blocks: the run configuration, list token
//! splitting, source-special decoding, comment truncation, format path
//! resolution, and banner parsing. These are pure and consumed by the `cli`
//! layer.
pub mod banner;
pub mod comment;
pub mod format;
pub mod params;
pub mod src_specials;
pub mod tokens;
