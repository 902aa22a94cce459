//! Format (dump) file name resolution.

/// Format used when no `--fmt` is given.
pub const DEFAULT_FORMAT_NAME: &str = "xelatex";

pub const FORMAT_SUFFIX: &str = ".fmt";

/// Resolve the format file path from an optional base name. A name that
/// already ends in `.fmt` (any case) is used as-is; otherwise the suffix is
/// appended. A bare `.fmt` is not a name and gets the suffix too.
pub fn resolve_format_path(name: Option<&str>) -> String {
    let name = name.unwrap_or(DEFAULT_FORMAT_NAME);
    let bytes = name.as_bytes();
    let suffix = FORMAT_SUFFIX.as_bytes();

    if bytes.len() > suffix.len() && bytes[bytes.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
    {
        name.to_string()
    } else {
        format!("{}{}", name, FORMAT_SUFFIX)
    }
}
