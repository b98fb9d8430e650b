//! Markdown table layout: width measurement and row formatting.

use std::fmt::Write as _;

use midichart_model::Chart;

/// Header label for the parameter column.
pub const PARAM_HEADER: &str = "Parameter";
/// Header label for the control-change column.
pub const CC_HEADER: &str = "CC";

/// Final column widths for a chart.
///
/// A column is never narrower than its header label or any cell printed
/// in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub param: usize,
    pub cc: usize,
}

impl ColumnWidths {
    /// Measures a chart: header label lengths, widened by every mapping
    /// field.
    pub fn measure(chart: &Chart) -> Self {
        let mut widths = Self {
            param: PARAM_HEADER.len(),
            cc: CC_HEADER.len(),
        };
        for mapping in &chart.mappings {
            widths.param = widths.param.max(mapping.param.len());
            widths.cc = widths.cc.max(mapping.cc.len());
        }
        widths
    }
}

/// Renders a chart as a Markdown table.
///
/// The parameter column is left-aligned and the CC column right-aligned,
/// with one row per mapping in input order. A chart with no mappings
/// renders as just the header and separator rows. Every line ends with a
/// newline.
pub fn render(chart: &Chart) -> String {
    let widths = ColumnWidths::measure(chart);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "| {:<param$} | {:>cc$} |",
        PARAM_HEADER,
        CC_HEADER,
        param = widths.param,
        cc = widths.cc
    );
    let _ = writeln!(
        out,
        "| :{} | {}: |",
        "-".repeat(widths.param - 1),
        "-".repeat(widths.cc - 1)
    );
    for mapping in &chart.mappings {
        let _ = writeln!(
            out,
            "| {:<param$} | {:>cc$} |",
            mapping.param,
            mapping.cc,
            param = widths.param,
            cc = widths.cc
        );
    }
    out
}
