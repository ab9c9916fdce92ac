//! `citystats` entry point.
//!
//! # Responsibility
//! - Load the configured city file and print the five reports to stdout.
//! - Keep the process exit code at success; bad input only degrades output.

use citystats_core::logging::default_log_dir;
use citystats_core::{
    core_version, default_log_level, init_logging, write_all_reports, CityRepository,
    ReportConfig,
};
use log::{error, info};
use std::io::{self, BufWriter, Write};

fn main() {
    if let Err(err) = init_logging(default_log_level(), &default_log_dir()) {
        eprintln!("citystats: logging disabled: {err}");
    }
    info!("event=cli_start module=cli status=ok version={}", core_version());

    let config = ReportConfig::default();
    let repo = CityRepository::load(&config.source_path);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(err) = run(&repo, &config, &mut out) {
        error!("event=cli_write module=cli status=error error={}", err);
        eprintln!("citystats: failed to write report: {err}");
        return;
    }
    info!(
        "event=cli_done module=cli status=ok cities={} diagnostics={}",
        repo.len(),
        repo.diagnostics().len()
    );
}

fn run(repo: &CityRepository, config: &ReportConfig, out: &mut impl Write) -> io::Result<()> {
    for diagnostic in repo.diagnostics() {
        writeln!(out, "{diagnostic}")?;
    }
    write_all_reports(repo, config, out)?;
    out.flush()
}
