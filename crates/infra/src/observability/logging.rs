use peoplesync_domain::{PeopleSyncError, Result};
use tracing_subscriber::EnvFilter;

/// Directive used when neither `RUST_LOG` nor the caller provides one.
pub const DEFAULT_DIRECTIVE: &str = "info,peoplesync_infra=info";

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_directive` (or [`DEFAULT_DIRECTIVE`]) when
/// `RUST_LOG` is unset or invalid.
///
/// # Errors
/// Returns `PeopleSyncError::Internal` if a global subscriber is already set.
pub fn init_tracing(default_directive: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive.unwrap_or(DEFAULT_DIRECTIVE)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| PeopleSyncError::Internal(format!("Failed to initialize tracing: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialization_reports_error_instead_of_panicking() {
        // Another test may already have installed a subscriber; either way the
        // last call must fail cleanly.
        let _ = init_tracing(Some("debug"));
        let err = init_tracing(None).unwrap_err();
        assert!(matches!(err, PeopleSyncError::Internal(_)));
    }
}
