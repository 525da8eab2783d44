use fw_core::FwError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest parse error: {0}")]
    Parse(String),

    #[error("invalid manifest entry: {0}")]
    Entry(#[from] FwError),

    #[error("duplicate vehicle id {0}")]
    DuplicateId(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ManifestResult<T> = Result<T, ManifestError>;
