//! Client error types.

use eventful_core::source::SourceError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Fallback text for a GraphQL error without a message.
pub const UNKNOWN_GRAPHQL_ERROR: &str = "An unknown GraphQL error occurred";

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Response contained no data")]
    MissingData,

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for SourceError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) if e.is_decode() => SourceError::Unexpected(e.to_string()),
            ClientError::Request(e) => SourceError::Connection(e.to_string()),
            ClientError::ServerError { status, message } => SourceError::Server { status, message },
            ClientError::GraphQl(message) => SourceError::GraphQl(message),
            ClientError::MissingData => SourceError::MissingData,
            ClientError::InvalidEndpoint(e) => SourceError::Unexpected(e.to_string()),
            ClientError::Json(e) => SourceError::Unexpected(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_maps_to_server() {
        let err = ClientError::ServerError {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(
            SourceError::from(err),
            SourceError::Server {
                status: 503,
                message: "maintenance".to_string()
            }
        );
    }

    #[test]
    fn test_graphql_error_keeps_server_message() {
        let err = ClientError::GraphQl("Invalid offset".to_string());
        assert_eq!(
            SourceError::from(err),
            SourceError::GraphQl("Invalid offset".to_string())
        );
    }

    #[test]
    fn test_missing_data_maps_to_missing_data() {
        assert_eq!(
            SourceError::from(ClientError::MissingData),
            SourceError::MissingData
        );
    }

    #[test]
    fn test_json_error_maps_to_unexpected() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let source = SourceError::from(ClientError::Json(json_err));
        assert!(matches!(source, SourceError::Unexpected(_)));
    }

    #[test]
    fn test_invalid_endpoint_maps_to_unexpected() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let source = SourceError::from(ClientError::InvalidEndpoint(parse_err));
        assert!(matches!(source, SourceError::Unexpected(_)));
    }
}
