#![doc = r#"
texlaunch — the command-line front-end of a typesetting engine run.

This crate turns an argument vector into a validated, fully resolved
[`RunConfiguration`]: interaction mode, format (dump) file path, output comment,
SyncTeX toggle, source-special insertion points and the single input file. It
then arms a cooperative SIGINT flag and hands everything to an [`Engine`].

Quick start
-----------
```rust
use texlaunch::{ParseOutcome, parse_args};

let (outcome, warnings) = parse_args(["tectonic-compat", "--fmt=plain", "--src-specials=par,cr", "doc.tex"]);
assert!(warnings.is_empty());

let ParseOutcome::Run(mut config) = outcome.unwrap() else { unreachable!() };
config.resolve_format();
assert_eq!(config.format_path, "plain.fmt");
assert!(config.src_specials.every_cr);
assert_eq!(config.input_file, std::path::Path::new("doc.tex"));
```

Presets
-------
`RunConfiguration` is serde-(de)serializable. Seed [`OptionParser::with_base`]
with a preset and command-line flags are applied on top of it.

Error handling
--------------
Fatal problems are [`Error`] values (wrong positional count, I/O, handler
installation). Problems with single options are [`ParseWarning`]s; parsing
continues past them.

Useful modules
--------------
- [`cli`] — option table, scanner and run orchestration.
- [`core`](crate::core) — pure configuration pieces (source specials, format path, banner).
- [`engine`] — the engine hand-off trait.
- [`interrupt`] — the SIGINT flag.
"#]

pub mod cli;
pub mod core;
pub mod engine;
pub mod error;
pub mod interrupt;
pub mod types;

pub use cli::{OptionParser, ParseOutcome, ParseWarning, parse_args};
pub use crate::core::params::RunConfiguration;
pub use crate::core::src_specials::SourceSpecials;
pub use engine::{Engine, ReportEngine};
pub use error::{Error, Result};
pub use interrupt::InterruptFlag;
pub use types::{InteractionMode, SrcSpecial};
