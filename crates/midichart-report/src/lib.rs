//! Markdown rendering of parameter/CC charts.

pub mod markdown;

pub use markdown::{CC_HEADER, ColumnWidths, PARAM_HEADER, render};
