//! Progress and outcome of an asynchronous data operation.

use serde::{Deserialize, Serialize};

/// State emitted by repository operations.
///
/// `Loading` and `Error` may carry a best-effort value (usually cached data)
/// so a caller can keep rendering something while work is in flight or after
/// it failed. Only `Success` and `Error` are terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resource<T> {
    Loading { data: Option<T> },
    Success { data: T },
    Error { message: String, data: Option<T> },
}

impl<T> Resource<T> {
    /// `Loading` with nothing to show yet.
    pub fn loading() -> Self {
        Resource::Loading { data: None }
    }

    /// `Loading` carrying a best-effort value.
    pub fn loading_with(data: T) -> Self {
        Resource::Loading { data: Some(data) }
    }

    pub fn success(data: T) -> Self {
        Resource::Success { data }
    }

    pub fn error(message: impl Into<String>, data: Option<T>) -> Self {
        Resource::Error {
            message: message.into(),
            data,
        }
    }

    /// The value carried by this state, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Loading { data } | Resource::Error { data, .. } => data.as_ref(),
            Resource::Success { data } => Some(data),
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Resource::Loading { data } | Resource::Error { data, .. } => data,
            Resource::Success { data } => Some(data),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Resource::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading { .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Resource::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Resource::Error { .. })
    }

    /// Returns true for `Success` and `Error`.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// Maps the carried value, keeping the state.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Resource::Loading { data } => Resource::Loading { data: data.map(f) },
            Resource::Success { data } => Resource::Success { data: f(data) },
            Resource::Error { message, data } => Resource::Error {
                message,
                data: data.map(f),
            },
        }
    }
}
