use thiserror::Error;

/// Closed set of failure kinds a lecture service may report.
///
/// The message is shown to the client as-is, so implementations must not put
/// driver errors or other internals in it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}
