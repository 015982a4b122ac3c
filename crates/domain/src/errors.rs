//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::UNKNOWN_STATUS;

/// Main error type for PeopleSync
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PeopleSyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure of the provider authentication probe.
///
/// Carries the probed endpoint together with the HTTP status and reason
/// phrase. Failures that never produced a response (DNS, connect, timeout)
/// report `status == -1` and an empty `status_text`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("Provider authentication failed at {endpoint}: {status} {status_text} ({cause})")]
pub struct AuthenticationError {
    pub cause: String,
    pub endpoint: String,
    pub status: i32,
    pub status_text: String,
}

impl AuthenticationError {
    /// Authentication rejected with an HTTP status.
    pub fn from_status(
        endpoint: impl Into<String>,
        status: u16,
        status_text: impl Into<String>,
    ) -> Self {
        let status_text = status_text.into();
        Self {
            cause: format!("unexpected status {status} {status_text}").trim_end().to_string(),
            endpoint: endpoint.into(),
            status: i32::from(status),
            status_text,
        }
    }

    /// Authentication probe that failed before any response arrived.
    pub fn from_transport(endpoint: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
            endpoint: endpoint.into(),
            status: UNKNOWN_STATUS,
            status_text: String::new(),
        }
    }
}

/// Result type alias for PeopleSync operations
pub type Result<T> = std::result::Result<T, PeopleSyncError>;
