//! Long-option table and argument scanner.
//!
//! Options are matched the way `getopt_long_only` does it: one or two leading
//! dashes, `--name=value` or `--name value` for required values, unique
//! prefixes accepted, and scanning stops at the first non-option argument.
//! Problems with individual options never abort the scan; they are collected
//! as [`ParseWarning`]s.
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::core::comment::{OUTPUT_COMMENT_LIMIT, truncate_bytes};
use crate::core::params::RunConfiguration;
use crate::error::{Error, Result};
use crate::types::InteractionMode;

use super::errors::ParseWarning;

pub const HELP_LINES: &[&str] = &[
    "Usage: tectonic-compat [OPTION]... [TEXNAME[.tex]]",
    "  Process TEXNAME, usually creating TEXNAME.pdf.",
    "",
    "-etex                   enable e-TeX extensions",
    "-file-line-error        enable file:line:error style messages",
    "-fmt=FMTNAME            use FMTNAME instead of program name or a %& line",
    "-halt-on-error          stop processing at the first error",
    "-ini                    be xeinitex, for dumping formats; this is implicitly",
    "                          true if the program name is `xeinitex'",
    "-interaction=STRING     set interaction mode (STRING=batchmode/nonstopmode/",
    "                          scrollmode/errorstopmode)",
    "-mltex                  enable MLTeX extensions such as \\charsubdef",
    "-output-comment=STRING  use STRING for XDV file comment instead of date",
    "-output-driver=CMD      use CMD as the XDV-to-PDF driver instead of xdvipdfmx",
    "-no-pdf                 generate XDV (extended DVI) output rather than PDF",
    "-papersize=STRING       set PDF media size to STRING",
    "-src-specials           insert source specials into the XDV file",
    "-src-specials=WHERE     insert source specials in certain places of",
    "                          the XDV file. WHERE is a comma-separated value",
    "                          list: cr display hbox math par parend vbox",
    "-synctex=NUMBER         generate SyncTeX data for previewers if nonzero",
    "-8bit                   make all characters printable, don't use ^^X sequences",
    "-help                   display this help and exit",
    "-version                output version information and exit",
];

const DEFAULT_BUG_EMAIL: &str = "tex-k@tug.org";

/// Print the help table followed by the bug report line.
pub fn write_usage_help<W: Write>(out: &mut W, lines: &[&str], bug_email: Option<&str>) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    writeln!(out, "Email bug reports to {}.", bug_email.unwrap_or(DEFAULT_BUG_EMAIL))?;
    Ok(())
}

type Warnings = Vec<ParseWarning>;

/// What an option does when it is seen.
#[derive(Clone, Copy)]
pub enum OptionKind {
    /// No value; sets a flag.
    Flag(fn(&mut RunConfiguration)),
    /// Takes exactly one value.
    Required(fn(&mut RunConfiguration, &str, &mut Warnings)),
    /// Takes a value only through `--name=value`.
    Optional(fn(&mut RunConfiguration, Option<&str>, &mut Warnings)),
    Help,
    Version,
}

impl OptionKind {
    fn takes_value(&self) -> bool {
        matches!(self, OptionKind::Required(_) | OptionKind::Optional(_))
    }
}

pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
}

const fn flag(name: &'static str, set: fn(&mut RunConfiguration)) -> OptionSpec {
    OptionSpec {
        name,
        kind: OptionKind::Flag(set),
    }
}

const fn required(
    name: &'static str,
    apply: fn(&mut RunConfiguration, &str, &mut Warnings),
) -> OptionSpec {
    OptionSpec {
        name,
        kind: OptionKind::Required(apply),
    }
}

pub static OPTIONS: &[OptionSpec] = &[
    required("fmt", |c, v, _| c.format_name = Some(v.to_string())),
    OptionSpec {
        name: "help",
        kind: OptionKind::Help,
    },
    flag("ini", |c| c.ini = true),
    required("interaction", apply_interaction),
    flag("halt-on-error", |c| c.halt_on_error = true),
    OptionSpec {
        name: "version",
        kind: OptionKind::Version,
    },
    flag("mltex", |c| c.mltex = true),
    flag("etex", |c| c.etex = true),
    required("output-comment", apply_output_comment),
    flag("debug-format", |c| c.debug_format = true),
    OptionSpec {
        name: "src-specials",
        kind: OptionKind::Optional(apply_src_specials),
    },
    required("synctex", |c, v, _| c.synctex = Some(parse_c_int(v))),
    flag("file-line-error", |c| c.file_line_error = Some(true)),
    flag("8bit", |c| c.eight_bit = true),
    flag("no-pdf", |c| c.no_pdf = true),
    required("output-driver", |c, v, _| c.output_driver = Some(v.to_string())),
    required("papersize", |c, v, _| c.papersize = Some(v.to_string())),
];

fn apply_interaction(config: &mut RunConfiguration, value: &str, warnings: &mut Warnings) {
    match <InteractionMode as ValueEnum>::from_str(value, false) {
        Ok(mode) => config.interaction = Some(mode),
        Err(_) => warnings.push(ParseWarning::UnknownInteraction {
            value: value.to_string(),
        }),
    }
}

fn apply_output_comment(config: &mut RunConfiguration, value: &str, warnings: &mut Warnings) {
    let (kept, truncated) = truncate_bytes(value.as_bytes(), OUTPUT_COMMENT_LIMIT);
    if truncated {
        warnings.push(ParseWarning::CommentTruncated {
            len: value.len(),
            comment: value.to_string(),
        });
    }
    config.output_comment = Some(kept.to_vec());
}

fn apply_src_specials(config: &mut RunConfiguration, value: Option<&str>, warnings: &mut Warnings) {
    match value {
        None => config.src_specials.enable_auto(),
        Some(list) => {
            for token in config.src_specials.decode(list) {
                warnings.push(ParseWarning::UnknownSrcSpecial {
                    token: token.to_string(),
                });
            }
        }
    }
}

/// Integer decoding with C `strtol(s, NULL, 0)` rules, narrowed to `i32`:
/// leading whitespace and sign, `0x` for hex, a leading `0` for octal, and
/// the longest valid digit prefix. No digits at all gives 0.
fn parse_c_int(text: &str) -> i32 {
    let s = text.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let hex_digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_hexdigit()));
    let (radix, digits) = match hex_digits {
        Some(rest) => (16, rest),
        None if s.starts_with('0') => (8, s),
        None => (10, s),
    };

    // Accumulate with the sign applied so overflow clamps to i64::MIN/MAX
    // like LONG_MIN/LONG_MAX.
    let mut value: i64 = 0;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        let digit = i64::from(digit);
        value = value.saturating_mul(i64::from(radix));
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    value as i32
}

/// Result of a completed scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Run(RunConfiguration),
    Help,
    Version,
}

enum Lookup {
    Found(&'static OptionSpec),
    Unknown,
    Ambiguous(Vec<&'static str>),
}

fn lookup(name: &str) -> Lookup {
    if let Some(spec) = OPTIONS.iter().find(|spec| spec.name == name) {
        return Lookup::Found(spec);
    }
    let candidates: Vec<&'static OptionSpec> =
        OPTIONS.iter().filter(|spec| spec.name.starts_with(name)).collect();
    match candidates.as_slice() {
        [] => Lookup::Unknown,
        [spec] => Lookup::Found(*spec),
        many => Lookup::Ambiguous(many.iter().map(|spec| spec.name).collect()),
    }
}

/// Command-line scanner. Starts from a default configuration or from a
/// preset given to [`OptionParser::with_base`].
#[derive(Default)]
pub struct OptionParser {
    config: RunConfiguration,
    warnings: Warnings,
}

impl OptionParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(config: RunConfiguration) -> Self {
        Self {
            config,
            warnings: Vec::new(),
        }
    }

    /// Warnings collected so far, in the order they were found.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Scan `argv` (including the program name in position 0). Fails only if
    /// the scan leaves anything but exactly one positional argument.
    ///
    /// Option names and values must be valid Unicode; anything else is
    /// skipped with a warning. The positional argument is kept byte for byte.
    pub fn parse<I, S>(&mut self, argv: I) -> Result<ParseOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = argv.into_iter().skip(1).map(Into::into).collect();
        let mut config = std::mem::take(&mut self.config);
        let mut idx = 0;

        while idx < args.len() {
            let raw = args[idx].as_encoded_bytes();
            if raw == b"--" {
                idx += 1;
                break;
            }
            if raw == b"-" || !raw.starts_with(b"-") {
                break;
            }
            idx += 1;

            let Some(arg) = args[idx - 1].to_str() else {
                self.warnings.push(ParseWarning::NonUnicodeOption {
                    arg: args[idx - 1].to_string_lossy().into_owned(),
                });
                continue;
            };

            let body = arg.strip_prefix("--").unwrap_or(&arg[1..]);
            let (name, inline_value) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (body, None),
            };

            let spec = match lookup(name) {
                Lookup::Found(spec) => spec,
                Lookup::Unknown => {
                    self.warnings.push(ParseWarning::UnrecognizedOption {
                        arg: arg.to_string(),
                    });
                    continue;
                }
                Lookup::Ambiguous(candidates) => {
                    self.warnings.push(ParseWarning::AmbiguousOption {
                        arg: arg.to_string(),
                        candidates,
                    });
                    continue;
                }
            };

            if inline_value.is_some() && !spec.kind.takes_value() {
                self.warnings
                    .push(ParseWarning::UnexpectedValue { option: spec.name });
                continue;
            }

            match spec.kind {
                OptionKind::Flag(set) => set(&mut config),
                OptionKind::Required(apply) => {
                    let value = match inline_value {
                        Some(value) => value,
                        None if idx < args.len() => {
                            idx += 1;
                            match args[idx - 1].to_str() {
                                Some(value) => value,
                                None => {
                                    self.warnings
                                        .push(ParseWarning::NonUnicodeValue { option: spec.name });
                                    continue;
                                }
                            }
                        }
                        None => {
                            self.warnings
                                .push(ParseWarning::MissingValue { option: spec.name });
                            continue;
                        }
                    };
                    apply(&mut config, value, &mut self.warnings);
                }
                OptionKind::Optional(apply) => apply(&mut config, inline_value, &mut self.warnings),
                OptionKind::Help => return Ok(ParseOutcome::Help),
                OptionKind::Version => return Ok(ParseOutcome::Version),
            }
        }

        if config.file_line_error.is_none() {
            config.file_line_error = Some(false);
        }

        match &args[idx..] {
            [input] => {
                config.input_file = PathBuf::from(input);
                Ok(ParseOutcome::Run(config))
            }
            rest => Err(Error::Usage { found: rest.len() }),
        }
    }
}

/// Parse `argv` from a default configuration, returning the outcome together
/// with every warning raised on the way.
pub fn parse_args<I, S>(argv: I) -> (Result<ParseOutcome>, Vec<ParseWarning>)
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut parser = OptionParser::new();
    let outcome = parser.parse(argv);
    (outcome, parser.warnings)
}
