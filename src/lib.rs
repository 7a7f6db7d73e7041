pub mod args;
pub mod cfg;
pub mod geo_2d;
pub mod io;
pub mod report;
mod crate_errors;

use log::{debug, info};

pub use crate_errors::{
    HeronError,
    HeronResult,
    EXIT_ARGUMENT,
    EXIT_NUMERIC,
    EXIT_OTHER,
};

/// Area target struct.
/// The triangle to measure and how to report it.
#[derive(Debug)]
pub struct AreaTarget {
    pub triangle: geo_2d::Triangle,
    pub cfg: cfg::RunCfg,
}

/// [Stage 1.]
/// Turn the parsed command line into a target.
/// Checks the coordinate count, parses the coordinates, and resolves the run config.
/// Returns a `HeronResult` with the `AreaTarget` or an `Err`.
pub fn build_target(cli_args: args::HeronCli) -> HeronResult<AreaTarget> {
    let triangle = args::parse_triangle(&cli_args.coords)?;
    let cfg = cfg::RunCfg::from_options(&cli_args.options)?;
    Ok(AreaTarget{triangle, cfg})
}

/// [Stage 2.]
/// Compute the sides and area of the target triangle.
pub fn compute_report(target: &AreaTarget) -> HeronResult<report::AreaReport> {
    let area_report = report::AreaReport::new(&target.triangle, target.cfg.degenerate)?;
    info!("Area: {}", area_report.area);
    Ok(area_report)
}

/// [Stage 3.]
/// Compute the report and write it to stdout in the configured format.
/// Returns a `HeronResult` with `()` or an `Err`.
pub fn run_process(target: AreaTarget) -> HeronResult<()> {
    let area_report = compute_report(&target)?;
    let writer = report::WriterChoice::from_cfg(&target.cfg);
    debug!("Writing report as {}", report::ReportWriter::get_writer_name(&writer));
    report::emit(&writer, &area_report)?;
    Ok(())
}
