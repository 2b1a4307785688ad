use astra::Response;
use std::fmt;

/// Errors originating from the routing layer: unknown paths, malformed
/// form input, or a poisoned state lock.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    LockPoisoned,
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::LockPoisoned => write!(f, "State lock poisoned"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
