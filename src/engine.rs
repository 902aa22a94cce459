//! Hand-off point to the typesetting engine.
use std::io::Write;
use std::path::Path;

use tracing::warn;

use crate::core::params::RunConfiguration;
use crate::interrupt::InterruptFlag;

/// Something that typesets `input` under `config` and returns a process exit
/// status. Implementations are expected to poll `interrupt` cooperatively.
pub trait Engine {
    fn run(&mut self, config: &RunConfiguration, input: &Path, interrupt: &InterruptFlag) -> i32;
}

/// Engine stand-in that writes the resolved configuration as JSON. Used by the
/// binary, which links no typesetting engine.
pub struct ReportEngine<W: Write> {
    out: W,
}

impl<W: Write> ReportEngine<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ReportEngine<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Engine for ReportEngine<W> {
    fn run(&mut self, config: &RunConfiguration, _input: &Path, interrupt: &InterruptFlag) -> i32 {
        if interrupt.is_set() {
            return 1;
        }
        let written = serde_json::to_writer_pretty(&mut self.out, config)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(self.out));
        match written {
            Ok(()) => 0,
            Err(e) => {
                warn!("Failed to write configuration report: {}", e);
                1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_json() {
        let mut config = RunConfiguration {
            input_file: "doc.tex".into(),
            ..RunConfiguration::default()
        };
        config.resolve_format();

        let mut engine = ReportEngine::new(Vec::new());
        let status = engine.run(&config, Path::new("doc.tex"), &InterruptFlag::new());
        assert_eq!(status, 0);

        let parsed: RunConfiguration = serde_json::from_slice(&engine.into_inner()).unwrap();
        assert_eq!(parsed, config);
    }
}
