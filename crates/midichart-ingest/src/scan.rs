//! Line scanning for `PARAM_MC_` control-change constants.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use midichart_model::{Chart, ChartError, Mapping, Result};

/// Matches `const uint8_t PARAM_MC_<PARAM>{<CC>}` at the start of a
/// whitespace-trimmed line. Case-sensitive; both captures stay raw text.
static MC_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^const uint8_t PARAM_MC_([^{]+)\{([^}]+)\}").unwrap());

/// Scans a header file and accumulates every matching mapping in input order.
///
/// Lines that do not match the pattern are skipped without comment. The
/// file is decoded leniently, so a stray non-UTF-8 byte in an unrelated
/// comment cannot abort the scan.
pub fn scan_header(path: &Path) -> Result<Chart> {
    let bytes = fs::read(path).map_err(|source| ChartError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let chart = scan_lines(text.lines());
    info!(
        path = %path.display(),
        mappings = chart.len(),
        "scanned header"
    );
    Ok(chart)
}

/// Scans already-split lines. Extracted so tests and in-memory callers
/// skip the filesystem.
pub fn scan_lines<'a, I>(lines: I) -> Chart
where
    I: IntoIterator<Item = &'a str>,
{
    let mut chart = Chart::new();
    for line in lines {
        let line = line.trim();
        let Some(captures) = MC_PARAM.captures(line) else {
            continue;
        };
        let mapping = Mapping::new(&captures[1], &captures[2]);
        debug!(param = %mapping.param, cc = %mapping.cc, "matched mapping");
        chart.push(mapping);
    }
    chart
}
