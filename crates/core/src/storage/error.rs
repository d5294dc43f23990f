use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Each variant carries the message reported by the underlying store and
/// displays it unchanged, so callers can surface it verbatim. The variant
/// only classifies the failure for logging and matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{0}")]
    ConnectionFailed(String),
    #[error("{0}")]
    TableNotFound(String),
    #[error("{0}")]
    Throttled(String),
    #[error("{0}")]
    QueryFailed(String),
    #[error("{0}")]
    Serialization(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_underlying_message() {
        let cases = [
            RepositoryError::ConnectionFailed("timeout after 30s".to_string()),
            RepositoryError::TableNotFound("Requested resource not found".to_string()),
            RepositoryError::Throttled("rate of requests exceeds".to_string()),
            RepositoryError::QueryFailed("invalid partition key".to_string()),
            RepositoryError::Serialization("missing attribute: lastName".to_string()),
        ];
        let expected = [
            "timeout after 30s",
            "Requested resource not found",
            "rate of requests exceeds",
            "invalid partition key",
            "missing attribute: lastName",
        ];

        for (error, message) in cases.iter().zip(expected) {
            assert_eq!(error.to_string(), message);
        }
    }
}
