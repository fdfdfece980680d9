pub mod reporting;
use crate::compiler::frontend;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    FrontendError(#[from] frontend::error::Error),
}
