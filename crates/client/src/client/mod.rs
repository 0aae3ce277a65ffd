//! HTTP client for the eventful GraphQL endpoint.

pub mod events;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{ClientError, Result, UNKNOWN_GRAPHQL_ERROR};
use crate::wire::{GraphQlRequest, GraphQlResponse};

/// Default GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/graphql";

/// GraphQL-over-HTTP client for the events service.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl GraphQlClient {
    /// Create a new client for the given endpoint.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Run a GraphQL operation and return its `data`.
    async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let envelope: GraphQlResponse<T> = serde_json::from_slice(&body)?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            let message = errors
                .into_iter()
                .next()
                .and_then(|e| e.message)
                .unwrap_or_else(|| UNKNOWN_GRAPHQL_ERROR.to_string());
            return Err(ClientError::GraphQl(message));
        }

        envelope.data.ok_or(ClientError::MissingData)
    }
}
