//! Login and logout flows.

use cz_api::ApiClient;
use cz_core::requests::Credentials;

use crate::error::AuthError;
use crate::guard::{View, landing_view};
use crate::session::Session;
use crate::store::SessionStore;

/// Shown when a rejected login carries no message.
pub const LOGIN_FAILED: &str = "Login failed";

/// What a successful login produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub session: Session,
    pub landing: View,
    pub welcome: String,
}

/// Authenticate against the backend and persist the session.
///
/// # Errors
///
/// Returns `AuthError::Api` when the backend rejects the credentials and
/// `AuthError::SessionStore` when the session cannot be written.
pub async fn login(
    client: &ApiClient,
    store: &SessionStore,
    credentials: &Credentials,
) -> Result<LoginOutcome, AuthError> {
    let response = client.login(credentials).await?;
    let session = store.begin(&response)?;
    let landing = landing_view(session.role());
    tracing::info!(username = %response.username, role = %response.role, %landing, "logged in");
    Ok(LoginOutcome {
        welcome: format!("Welcome back, {}!", response.username),
        landing,
        session,
    })
}

/// User-facing text for a failed login: the backend's reason if it gave one.
#[must_use]
pub fn login_failure_message(error: &AuthError) -> String {
    match error {
        AuthError::Api(api) => api.backend_message().unwrap_or(LOGIN_FAILED).to_string(),
        other => other.to_string(),
    }
}

/// Clear the stored credentials, keeping the event selection.
///
/// # Errors
///
/// Returns `AuthError::SessionStore` if the session cannot be written.
pub fn logout(store: &SessionStore) -> Result<Session, AuthError> {
    let session = store.end()?;
    tracing::info!("logged out");
    Ok(session)
}
