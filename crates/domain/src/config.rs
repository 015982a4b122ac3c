//! Client configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{PeopleSyncError, Result};

/// Credentials handed to the client by the invoking collaborator.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// Raw namespace: a bare subdomain, a hostname or a full URL.
    pub client_namespace: String,
    #[serde(skip_serializing)]
    pub client_access_token: String,
}

impl ClientConfig {
    pub fn new(namespace: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self { client_namespace: namespace.into(), client_access_token: access_token.into() }
    }

    /// Check that both values are present.
    ///
    /// Only presence is checked here; the namespace shape is validated when
    /// the client is constructed.
    ///
    /// # Errors
    /// Returns `PeopleSyncError::Config` if either value is blank.
    pub fn validate(&self) -> Result<()> {
        if self.client_namespace.trim().is_empty() || self.client_access_token.trim().is_empty() {
            return Err(PeopleSyncError::Config(
                "Config requires all of {clientNamespace, clientAccessToken}".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_namespace", &self.client_namespace)
            .field("client_access_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_token() {
        let config = ClientConfig::new("acme", "  ");
        assert!(matches!(config.validate(), Err(PeopleSyncError::Config(_))));
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(ClientConfig::new("acme", "secret").validate().is_ok());
    }

    #[test]
    fn debug_output_hides_token() {
        let rendered = format!("{:?}", ClientConfig::new("acme", "super-secret"));
        assert!(rendered.contains("acme"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn deserializes_camel_case_keys_and_never_serializes_token() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"clientNamespace": "acme", "clientAccessToken": "secret"}"#,
        )
        .unwrap();
        assert_eq!(config, ClientConfig::new("acme", "secret"));

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
