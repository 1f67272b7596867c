use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("CDP error: {0}")]
    Cdp(String),

    #[error("Element {selector:?} did not appear within {waited:?}")]
    ElementNotFound { selector: String, waited: Duration },

    #[error("Add-to-cart confirmation did not appear within {waited:?}")]
    ConfirmationMissing { waited: Duration },

    #[error(transparent)]
    Domain(#[from] cartwright_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
