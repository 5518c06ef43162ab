use monthpick_core::error::CoreError;
use monthpick_format::FormatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Invalid picker settings: {0}")]
    Settings(#[from] CoreError),

    #[error("Month header could not be formatted: {0}")]
    Format(#[from] FormatError),
}

pub type ViewResult<T> = std::result::Result<T, ViewError>;
