//! BambooHR authentication helpers
//!
//! BambooHR uses HTTP Basic auth with the API token as the username and a
//! literal `x` as the password.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use peoplesync_domain::constants::BASIC_AUTH_PASSWORD;
use peoplesync_domain::{PeopleSyncError, Result};
use reqwest::header::HeaderValue;
use reqwest::StatusCode;

/// Build the `Authorization` header value for an access token.
///
/// The value is flagged sensitive so it never shows up in header debug output.
///
/// # Errors
/// Returns `PeopleSyncError::Config` if the encoded value is not a valid
/// header (cannot happen for base64 output, kept for the fallible API).
pub fn basic_authorization(access_token: &str) -> Result<HeaderValue> {
    let credentials = STANDARD.encode(format!("{access_token}:{BASIC_AUTH_PASSWORD}"));
    let mut value = HeaderValue::from_str(&format!("Basic {credentials}"))
        .map_err(|e| PeopleSyncError::Config(format!("Invalid authorization header: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Whether the auth probe status proves the credentials were accepted.
///
/// The probe asks for employee `0`: 200 means it exists, 404 means it does
/// not, and both can only be answered to an authenticated caller.
pub fn is_authenticated_status(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::NOT_FOUND
}
