use thiserror::Error;

/// Recoverable command-line problems. Parsing carries on past each of these;
/// the runner reports them on standard error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    #[error("unrecognized option `{arg}'")]
    UnrecognizedOption { arg: String },

    #[error("ignoring option `{arg}': not valid Unicode")]
    NonUnicodeOption { arg: String },

    #[error("ignoring value of `--{option}': not valid Unicode")]
    NonUnicodeValue { option: &'static str },

    #[error("option `{arg}' is ambiguous; possibilities: --{}", .candidates.join(" --"))]
    AmbiguousOption {
        arg: String,
        candidates: Vec<&'static str>,
    },

    #[error("option `--{option}' requires an argument")]
    MissingValue { option: &'static str },

    #[error("option `--{option}' doesn't allow an argument")]
    UnexpectedValue { option: &'static str },

    #[error("Ignoring unknown argument `{value}' to --interaction")]
    UnknownInteraction { value: String },

    #[error("Ignoring unknown argument `{token}' to --src-specials")]
    UnknownSrcSpecial { token: String },

    #[error("Comment truncated to 255 characters from {len}. ({comment})")]
    CommentTruncated { len: usize, comment: String },

    #[error("-mltex only works with -ini")]
    MltexWithoutIni,
}
