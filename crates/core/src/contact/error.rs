use thiserror::Error;

/// Errors caused by a request the caller can fix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: firstName, lastName, or phoneNumber")]
    MissingFields,
    #[error("Missing required query parameter: phone_number")]
    MissingPhoneNumber,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// Carries the rejected tag for logging; the message stays fixed.
    #[error("Unsupported HTTP method")]
    UnsupportedMethod(String),
}
