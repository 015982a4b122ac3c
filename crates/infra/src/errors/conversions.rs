//! Conversions from external infrastructure errors into domain errors.

use peoplesync_domain::PeopleSyncError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PeopleSyncError);

impl From<InfraError> for PeopleSyncError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PeopleSyncError> for InfraError {
    fn from(value: PeopleSyncError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoPeopleSyncError {
    fn into_peoplesync(self) -> PeopleSyncError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PeopleSyncError */
/* -------------------------------------------------------------------------- */

impl IntoPeopleSyncError for HttpError {
    fn into_peoplesync(self) -> PeopleSyncError {
        // Strip the URL: it embeds the tenant namespace and is logged separately.
        let err = self.without_url();

        if err.is_decode() {
            return PeopleSyncError::Decode(format!("invalid response body: {err}"));
        }

        if err.is_builder() {
            return PeopleSyncError::Internal(format!("invalid HTTP request: {err}"));
        }

        if err.is_timeout() {
            return PeopleSyncError::Network("HTTP request timed out".into());
        }

        if err.is_connect() {
            return PeopleSyncError::Network(format!("HTTP connection failure: {err}"));
        }

        if let Some(status) = err.status() {
            return PeopleSyncError::Network(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        PeopleSyncError::Network(err.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_peoplesync())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
