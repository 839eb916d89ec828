use cz_api::{ACCESS_DENIED, ApiError};

/// Turn a backend failure into the error the user sees.
///
/// A 403 shows the backend's reason on its own. Anything else shows
/// `fallback`, with the underlying cause attached for `{:#}` output.
pub fn backend_failure(error: ApiError, fallback: &str) -> anyhow::Error {
    backend_failure_or(error, ACCESS_DENIED, fallback)
}

/// Like [`backend_failure`] with a custom text for a 403 without a message.
pub fn backend_failure_or(error: ApiError, denied: &str, fallback: &str) -> anyhow::Error {
    tracing::debug!(%error, status = ?error.status(), "backend call failed");
    match error {
        ApiError::Forbidden { .. } => anyhow::anyhow!(error.notification_or(denied, fallback)),
        other => anyhow::Error::new(other).context(fallback.to_string()),
    }
}

/// Super-admin style failure: `"{prefix}: {backend reason}"`.
pub fn detailed_failure(error: &ApiError, prefix: &str) -> anyhow::Error {
    tracing::debug!(%error, status = ?error.status(), "backend call failed");
    anyhow::anyhow!(error.detail(prefix))
}
