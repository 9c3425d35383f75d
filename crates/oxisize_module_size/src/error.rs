use oxisize_core::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SizeError {
    #[error("source-dir is missing")]
    MissingSourceDir,

    #[error(transparent)]
    Parse(#[from] ParseError),
}
