//! Wiring from input location through scanning to the rendered chart.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use midichart_ingest::{default_input_path, scan_header};
use midichart_report::render;

/// Runs the generator against an explicit header path and returns the
/// rendered Markdown table.
pub fn run_chart_at(path: &Path) -> Result<String> {
    let chart = scan_header(path)?;
    Ok(render(&chart))
}

/// Runs the whole generator: locate `ConstantValues.h` next to the
/// running executable, scan it, and render the table.
pub fn run_chart() -> Result<String> {
    let path = default_input_path()?;
    debug!(path = %path.display(), "resolved input header");
    run_chart_at(&path)
}
