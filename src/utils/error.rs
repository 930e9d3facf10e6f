use lambda_http::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{operation} failed: {message}")]
    Sdk {
        operation: &'static str,
        message: String,
    },

    #[error("Invalid item: {message}")]
    InvalidItem { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller's fault, answered with a 4xx.
    Client,
    /// Ours, logged and answered with a generic 500.
    Server,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Malformed request body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    #[error("Missing path parameter: {0}")]
    MissingPathParameter(&'static str),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Person not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Response error: {0}")]
    Response(#[from] lambda_http::http::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidRequest(_) | ApiError::MissingPathParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Serialization(_) | ApiError::Response(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        if self.status().is_server_error() {
            ErrorCategory::Server
        } else {
            ErrorCategory::Client
        }
    }

    /// The text shown to callers: the status reason phrase, never the error chain.
    pub fn user_message(&self) -> &'static str {
        self.status().canonical_reason().unwrap_or("Unknown Error")
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

pub type Result<T> = std::result::Result<T, ApiError>;
