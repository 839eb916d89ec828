use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use cz_api::ApiClient;
use cz_auth::{AuthError, Session, SessionStore};
use cz_config::CzConfig;
use cz_core::enums::Role;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: CzConfig,
    pub store: SessionStore,
    pub session: Session,
    pub client: ApiClient,
}

impl AppContext {
    /// Load the stored session and build a backend client carrying its token.
    pub fn init(config: CzConfig) -> anyhow::Result<Self> {
        let store = SessionStore::from_config(&config.session)
            .context("failed to locate the session directory")?;
        let session = store.load().context("failed to read the stored session")?;
        Self::with_store(config, store, session)
    }

    pub fn with_store(
        config: CzConfig,
        store: SessionStore,
        session: Session,
    ) -> anyhow::Result<Self> {
        let client = ApiClient::new(
            config.api.base_url_trimmed(),
            Duration::from_secs(config.api.timeout_secs),
        )
        .context("failed to initialize the backend client")?
        .with_token(session.token.clone());

        tracing::debug!(
            base_url = client.base_url(),
            authenticated = session.is_authenticated(),
            event = session.event_id().unwrap_or("-"),
            "application context ready"
        );

        Ok(Self {
            config,
            store,
            session,
            client,
        })
    }

    /// The event to work on: `explicit`, else the selected one.
    pub fn event_id(&self, explicit: Option<&str>) -> anyhow::Result<String> {
        explicit
            .map(str::trim)
            .filter(|id| cz_auth::session::is_real_event_id(id))
            .or_else(|| self.session.event_id())
            .map(ToString::to_string)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "no event selected. Run `cz event select <id>` or pass --event"
                )
            })
    }

    /// Like [`Self::event_id`], with the message shown before adding an entry.
    pub fn event_id_for_entry(&self, explicit: Option<&str>, message: &str) -> anyhow::Result<String> {
        self.event_id(explicit)
            .map_err(|_| anyhow::anyhow!("{message}"))
    }

    /// Collection and deduction mutations need an admin or superadmin session.
    pub fn require_manager(&self) -> Result<Role, AuthError> {
        cz_auth::require_role(&self.session, &[Role::Admin, Role::SuperAdmin])
    }

    /// The super-admin console.
    pub fn require_superadmin(&self) -> Result<(), AuthError> {
        cz_auth::require_role(&self.session, &[Role::SuperAdmin]).map(|_| ())
    }

    #[must_use]
    pub fn currency(&self) -> &str {
        &self.config.general.currency_symbol
    }

    #[must_use]
    pub fn reports_dir(&self) -> PathBuf {
        let dir = self.config.general.reports_dir.trim();
        if dir.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(dir)
        }
    }

    /// Replace the in-memory session after the store wrote a new one.
    pub fn set_session(&mut self, session: Session) {
        self.client = self.client.clone().with_token(session.token.clone());
        self.session = session;
    }
}

#[cfg(test)]
mod tests {
    use cz_auth::{Session, SessionStore};
    use cz_config::CzConfig;
    use pretty_assertions::assert_eq;

    use super::AppContext;

    fn context(session: Session) -> (tempfile::TempDir, AppContext) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::new(dir.path());
        let ctx = AppContext::with_store(CzConfig::default(), store, session).expect("context");
        (dir, ctx)
    }

    fn session(role: &str, event: Option<&str>) -> Session {
        Session {
            token: Some("tok".into()),
            role: Some(role.into()),
            username: Some("asha".into()),
            event_id: event.map(ToString::to_string),
        }
    }

    #[test]
    fn explicit_event_wins_over_selection() {
        let (_dir, ctx) = context(session("admin", Some("evt-stored")));
        assert_eq!(ctx.event_id(Some("evt-flag")).expect("event"), "evt-flag");
        assert_eq!(ctx.event_id(None).expect("event"), "evt-stored");
    }

    #[test]
    fn placeholder_selection_counts_as_none() {
        let (_dir, ctx) = context(session("admin", Some("undefined")));
        let err = ctx.event_id(None).expect_err("no event");
        assert!(err.to_string().contains("cz event select"));
        assert!(ctx.event_id(Some("null")).is_err());
    }

    #[test]
    fn entry_message_replaces_generic_error() {
        let (_dir, ctx) = context(Session::default());
        let err = ctx
            .event_id_for_entry(None, "Please select an event before adding a record.")
            .expect_err("no event");
        assert_eq!(err.to_string(), "Please select an event before adding a record.");
    }

    #[test]
    fn role_checks_follow_session() {
        let (_dir, admin) = context(session("admin", None));
        assert!(admin.require_manager().is_ok());
        assert!(admin.require_superadmin().is_err());

        let (_dir, root) = context(session("superadmin", None));
        assert!(root.require_superadmin().is_ok());

        let (_dir, anonymous) = context(Session::default());
        assert!(anonymous.require_manager().is_err());
        assert!(!anonymous.client.has_token());
    }

    #[test]
    fn set_session_updates_client_token() {
        let (_dir, mut ctx) = context(Session::default());
        ctx.set_session(session("admin", Some("evt-1")));
        assert!(ctx.client.has_token());
        assert_eq!(ctx.event_id(None).expect("event"), "evt-1");
    }
}
