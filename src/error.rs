use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type for KKT check operations
pub type Result<T> = std::result::Result<T, KktError>;

/// Errors that can occur while building, solving or checking a problem
#[derive(Error, Debug)]
pub enum KktError {
    /// GLPK could not allocate a problem object
    #[error("GLPK failed to allocate a problem")]
    Allocation,

    /// The request does not describe a valid problem
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The blocking worker pool dropped the job
    #[error("Worker failed: {0}")]
    Blocking(String),
}

impl ResponseError for KktError {
    fn status_code(&self) -> StatusCode {
        match self {
            KktError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            KktError::Allocation | KktError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
