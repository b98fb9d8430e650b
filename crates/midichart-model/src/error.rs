use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to locate the running executable: {source}")]
    ExeLocation { source: std::io::Error },
    #[error("failed to read input file {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ChartError>;
