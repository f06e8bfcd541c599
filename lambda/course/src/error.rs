use crate::storage::StorageError;

pub const MISSING_PATH_OR_QUERY: &str = "Missing path or query string params";
pub const MISSING_PATH: &str = "Missing path params";
pub const MISSING_YEAR: &str = "Year query parameter is missing";

/// Every way a course request can fail, each with its own status code.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("{0}")]
    MissingParams(&'static str),
    #[error("Unsupported HTTP method")]
    UnsupportedMethod,
    #[error("{0}")]
    InvalidParameter(String),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Item not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl HandlerError {
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::MissingParams(_)
            | HandlerError::UnsupportedMethod
            | HandlerError::InvalidParameter(_)
            | HandlerError::InvalidBody(_) => 400,
            HandlerError::NotFound => 404,
            HandlerError::Storage(_) => 500,
        }
    }
}
