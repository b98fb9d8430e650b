//! Resolving the fixed input file relative to the running executable.

use std::path::{Path, PathBuf};

use midichart_model::{ChartError, Result};

/// Fixed name of the header file holding the `PARAM_MC_` constants.
pub const INPUT_FILE_NAME: &str = "ConstantValues.h";

/// Joins a directory with the fixed input file name.
pub fn input_path_beside(dir: &Path) -> PathBuf {
    dir.join(INPUT_FILE_NAME)
}

/// Resolves the input file next to the running executable.
///
/// The lookup is a pure path computation, so the tool behaves identically
/// regardless of the process working directory.
pub fn default_input_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|source| ChartError::ExeLocation { source })?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(input_path_beside(dir))
}
