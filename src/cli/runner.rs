use std::ffi::OsString;
use std::io::{IsTerminal, Write};

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::core::banner::{BUG_ADDRESS, VersionNotice, component_versions};
use crate::core::params::RunConfiguration;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::interrupt::InterruptFlag;

use super::args::{HELP_LINES, OptionParser, ParseOutcome, write_usage_help};
use super::errors::ParseWarning;

/// Install the stderr subscriber. Warnings are always shown; `RUST_LOG` can
/// raise the level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .try_init();
}

fn report(warnings: &[ParseWarning]) {
    for warning in warnings {
        warn!("{}", warning);
    }
}

fn print_help() -> Result<()> {
    let mut out = std::io::stdout().lock();
    write_usage_help(&mut out, HELP_LINES, Some(BUG_ADDRESS))?;
    out.flush()?;
    Ok(())
}

fn print_version() -> Result<()> {
    let versions = component_versions();
    let mut out = std::io::stdout().lock();
    VersionNotice::tectonic(&versions).write_to(&mut out)?;
    out.flush()?;
    Ok(())
}

fn start(mut config: RunConfiguration, engine: &mut dyn Engine) -> Result<i32> {
    if config.mltex_without_ini() {
        report(&[ParseWarning::MltexWithoutIni]);
    }
    config.resolve_format();

    let interrupt = InterruptFlag::process()?;

    match serde_json::to_string(&config) {
        Ok(json) => debug!("Resolved configuration: {}", json),
        Err(e) => debug!("Resolved configuration not serializable: {}", e),
    }
    info!(
        "Starting engine on {:?} with format {:?}",
        config.input_file, config.format_path
    );

    Ok(engine.run(&config, &config.input_file, &interrupt))
}

/// Parse `argv`, resolve the configuration, arm the interrupt flag, and run
/// `engine` on the input file. Returns the process exit status.
pub fn run<I, S>(argv: I, engine: &mut dyn Engine) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut parser = OptionParser::new();
    let outcome = parser.parse(argv);
    report(parser.warnings());

    let result = outcome.and_then(|outcome| match outcome {
        ParseOutcome::Help => print_help().map(|()| 0),
        ParseOutcome::Version => print_version().map(|()| 0),
        ParseOutcome::Run(config) => start(config, engine),
    });

    match result {
        Ok(status) => status,
        Err(Error::Usage { .. }) => {
            eprintln!("error: expected exactly one non-option argument");
            1
        }
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    #[derive(Default)]
    struct RecordingEngine {
        seen: Option<(RunConfiguration, PathBuf)>,
        calls: usize,
        status: i32,
    }

    impl Engine for RecordingEngine {
        fn run(&mut self, config: &RunConfiguration, input: &Path, interrupt: &InterruptFlag) -> i32 {
            assert!(interrupt.is_installed());
            self.calls += 1;
            self.seen = Some((config.clone(), input.to_path_buf()));
            self.status
        }
    }

    #[test]
    fn engine_status_is_propagated() {
        let mut engine = RecordingEngine {
            status: 3,
            ..RecordingEngine::default()
        };
        let status = run(
            ["tectonic-compat", "--fmt=myfmt", "--mltex", "paper.tex"],
            &mut engine,
        );
        assert_eq!(status, 3);

        let (config, input) = engine.seen.unwrap();
        assert_eq!(input, Path::new("paper.tex"));
        assert_eq!(config.format_path, "myfmt.fmt");
        assert_eq!(config.format_path_len(), 9);
        assert!(config.mltex && !config.ini);
    }

    #[test]
    fn usage_error_skips_engine() {
        let mut engine = RecordingEngine::default();
        assert_eq!(run(["tectonic-compat", "a.tex", "b.tex"], &mut engine), 1);
        assert_eq!(run(["tectonic-compat"], &mut engine), 1);
        assert!(engine.seen.is_none());
    }

    #[test]
    fn repeated_runs_share_one_interrupt_flag() {
        let mut engine = RecordingEngine::default();
        assert_eq!(run(["tectonic-compat", "a.tex"], &mut engine), 0);
        assert_eq!(run(["tectonic-compat", "b.tex"], &mut engine), 0);
        assert_eq!(engine.calls, 2);

        assert!(InterruptFlag::process().unwrap().is_installed());
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_input_reaches_engine_unchanged() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let mut engine = RecordingEngine::default();
        let argv = [
            OsString::from("tectonic-compat"),
            OsString::from_vec(b"r\xe9sum\xe9.tex".to_vec()),
        ];
        assert_eq!(run(argv, &mut engine), 0);

        let (config, input) = engine.seen.unwrap();
        assert_eq!(input.as_os_str().as_bytes(), b"r\xe9sum\xe9.tex");
        assert_eq!(config.input_file, input);
    }
}
