use thiserror::Error;

/// Errors reported by a remote event source.
///
/// The display text is what end users see; details useful for diagnosis are
/// kept in the variant fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The service could not be reached.
    #[error("Couldn't reach server. Check your internet connection.")]
    Connection(String),
    /// The service answered with a non-success HTTP status.
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },
    /// The service answered with a GraphQL error payload.
    #[error("{0}")]
    GraphQl(String),
    /// The service answered without the requested data.
    #[error("No events found from remote.")]
    MissingData,
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl SourceError {
    /// Returns true for connectivity failures.
    pub fn is_connection(&self) -> bool {
        matches!(self, SourceError::Connection(_))
    }
}

/// Result type for remote source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_hides_detail() {
        let error = SourceError::Connection("tcp connect error: refused".to_string());
        assert_eq!(
            error.to_string(),
            "Couldn't reach server. Check your internet connection."
        );
        assert!(error.is_connection());
    }

    #[test]
    fn test_server_display() {
        let error = SourceError::Server {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(error.to_string(), "Server returned 502: Bad Gateway");
        assert!(!error.is_connection());
    }

    #[test]
    fn test_graphql_display_is_server_message() {
        let error = SourceError::GraphQl("Field 'allEvents' is not defined".to_string());
        assert_eq!(error.to_string(), "Field 'allEvents' is not defined");
    }

    #[test]
    fn test_missing_data_display() {
        assert_eq!(
            SourceError::MissingData.to_string(),
            "No events found from remote."
        );
    }

    #[test]
    fn test_unexpected_display() {
        let error = SourceError::Unexpected("expected value at line 1".to_string());
        assert_eq!(
            error.to_string(),
            "An unexpected error occurred: expected value at line 1"
        );
    }
}
