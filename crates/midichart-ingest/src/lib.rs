//! Input location and header scanning.

pub mod locate;
pub mod scan;

pub use locate::{INPUT_FILE_NAME, default_input_path, input_path_beside};
pub use scan::{scan_header, scan_lines};
