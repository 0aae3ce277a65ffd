//! eventful_client - GraphQL client for the eventful events service.

pub mod client;
pub mod error;
pub mod wire;

pub use client::GraphQlClient;
pub use error::{ClientError, Result};
