//! `tectonic-compat` entrypoint.
//!
//! Thin wrapper over `texlaunch::cli`: set up logging, run the option
//! pipeline against the reporting engine, and exit with its status.

use texlaunch::ReportEngine;
use texlaunch::cli;

fn main() {
    cli::init_logging();
    let mut engine = ReportEngine::stdout();
    std::process::exit(cli::run(std::env::args_os(), &mut engine));
}
