use std::fmt;

/// Failure surfaced by a repository operation.
///
/// Every failure propagates to the caller as-is: this layer performs no
/// retries, no suppression, and no fallback. Which concrete condition maps
/// to which variant is the provider's call; the variants only fix the
/// taxonomy callers can match on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No backing record matched the identifier or item named.
    NotFound(String),
    /// A create collided with an existing identity.
    Conflict(String),
    /// The underlying storage provider failed, transiently or permanently.
    Provider(String),
    /// The operation observed its cancellation signal before starting.
    /// Cancellation is advisory: an operation that already ran to
    /// completion returns its result even if the signal fired meanwhile.
    Cancelled(&'static str),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::NotFound(what) => write!(f, "not found: {}", what),
            RepositoryError::Conflict(what) => write!(f, "conflict: {}", what),
            RepositoryError::Provider(message) => write!(f, "provider failure: {}", message),
            RepositoryError::Cancelled(operation) => {
                write!(f, "operation cancelled: {}", operation)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_condition() {
        assert_eq!(
            RepositoryError::NotFound("todo 42".into()).to_string(),
            "not found: todo 42"
        );
        assert_eq!(
            RepositoryError::Cancelled("create").to_string(),
            "operation cancelled: create"
        );
    }
}
