// errors.rs
use crate::domain::ValidationError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input, etc.) or downstream layers (remote predictor).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) | ServerError::Validation(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}
