//! File-backed session storage.
//!
//! The session lives at `<dir>/session.json` (`~/.challengerz` by default).
//! On Unix the directory is 0700 and the file 0600. A non-empty
//! `CHALLENGERZ_AUTH__TOKEN` overrides the stored token without touching the
//! file, for CI and scripted use.

use std::fs;
use std::path::{Path, PathBuf};

use cz_config::SessionConfig;
use cz_core::requests::LoginResponse;

use crate::error::AuthError;
use crate::session::{Session, is_real_event_id};

pub const SESSION_FILE_NAME: &str = "session.json";
pub const TOKEN_ENV_VAR: &str = "CHALLENGERZ_AUTH__TOKEN";

/// Where the effective token came from (for status display).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
    env_token: Option<String>,
}

impl SessionStore {
    /// A store rooted at `dir` that ignores the environment.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            env_token: None,
        }
    }

    /// A store for the configured directory, honoring `CHALLENGERZ_AUTH__TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` when no directory is configured and
    /// the home directory cannot be found.
    pub fn from_config(config: &SessionConfig) -> Result<Self, AuthError> {
        let dir = config.resolved_dir().ok_or_else(|| {
            AuthError::SessionStore("home directory not found; set session.dir".into())
        })?;
        Ok(Self::new(dir).with_env_token(std::env::var(TOKEN_ENV_VAR).ok()))
    }

    /// Override the stored token with `token` when it is non-empty.
    #[must_use]
    pub fn with_env_token(mut self, token: Option<String>) -> Self {
        self.env_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE_NAME)
    }

    /// The effective session: the stored one with the env token applied.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the file exists but cannot be read.
    pub fn load(&self) -> Result<Session, AuthError> {
        let mut session = self.load_stored()?;
        if let Some(token) = &self.env_token {
            session.token = Some(token.clone());
        }
        Ok(session)
    }

    /// The session as written on disk. A missing file is an empty session; a
    /// corrupt one is logged and treated as empty.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the file exists but cannot be read.
    pub fn load_stored(&self) -> Result<Session, AuthError> {
        let path = self.path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Session::default());
            }
            Err(error) => {
                return Err(AuthError::SessionStore(format!(
                    "read {}: {error}",
                    path.display()
                )));
            }
        };
        if raw.trim().is_empty() {
            return Ok(Session::default());
        }
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Ok(session.sanitized()),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring corrupt session file");
                Ok(Session::default())
            }
        }
    }

    #[must_use]
    pub fn token_source(&self) -> Option<TokenSource> {
        if self.env_token.is_some() {
            return Some(TokenSource::Env);
        }
        self.load_stored()
            .ok()
            .filter(Session::is_authenticated)
            .map(|_| TokenSource::File)
    }

    /// Write `session` to disk.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the directory or file cannot be
    /// created, or the file permissions cannot be restricted.
    pub fn save(&self, session: &Session) -> Result<(), AuthError> {
        ensure_private_dir(&self.dir)?;
        let path = self.path();
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AuthError::SessionStore(format!("encode session: {e}")))?;
        fs::write(&path, json)
            .map_err(|e| AuthError::SessionStore(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::SessionStore(format!("chmod {}: {e}", path.display())))?;
        }

        tracing::debug!(path = %path.display(), "session saved");
        Ok(())
    }

    /// Record a successful login. The response's event replaces the stored
    /// selection, and a response without one clears it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the session cannot be written.
    pub fn begin(&self, response: &LoginResponse) -> Result<Session, AuthError> {
        let session = Session {
            token: Some(response.token.clone()),
            role: Some(response.role.clone()),
            username: Some(response.username.clone()),
            event_id: response.event_id.clone(),
        }
        .sanitized();
        self.save(&session)?;
        Ok(session)
    }

    /// Log out: clear token, role, and username, keeping the event selection.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the session cannot be written.
    pub fn end(&self) -> Result<Session, AuthError> {
        let mut session = self.load_stored()?;
        session.clear_credentials();
        self.save(&session)?;
        Ok(session)
    }

    /// Select `event_id` as the working event.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` for a placeholder id or a write failure.
    pub fn select_event(&self, event_id: &str) -> Result<Session, AuthError> {
        let event_id = event_id.trim();
        if !is_real_event_id(event_id) {
            return Err(AuthError::SessionStore(format!(
                "'{event_id}' is not an event id"
            )));
        }
        let mut session = self.load_stored()?;
        session.event_id = Some(event_id.to_string());
        self.save(&session)?;
        Ok(session)
    }

    /// Forget the working event.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the session cannot be written.
    pub fn clear_event(&self) -> Result<Session, AuthError> {
        let mut session = self.load_stored()?;
        if session.event_id.is_none() {
            return Ok(session);
        }
        session.event_id = None;
        self.save(&session)?;
        Ok(session)
    }
}

fn ensure_private_dir(dir: &Path) -> Result<(), AuthError> {
    fs::create_dir_all(dir)
        .map_err(|e| AuthError::SessionStore(format!("mkdir {}: {e}", dir.display())))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(dir, fs::Permissions::from_mode(0o700)) {
            tracing::warn!("failed to chmod 0700 {}: {e}", dir.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn store() -> (tempfile::TempDir, SessionStore) {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::new(tmp.path().join("cz"));
        (tmp, store)
    }

    fn response(event_id: Option<&str>) -> LoginResponse {
        LoginResponse {
            token: "tok-1".into(),
            role: "admin".into(),
            username: "asha".into(),
            event_id: event_id.map(ToString::to_string),
        }
    }

    #[test]
    fn missing_file_is_an_empty_session() {
        let (_tmp, store) = store();
        assert_eq!(store.load().expect("load"), Session::default());
        assert_eq!(store.token_source(), None);
    }

    #[test]
    fn begin_writes_private_file() {
        let (_tmp, store) = store();
        let session = store.begin(&response(Some("evt-1"))).expect("begin");
        assert_eq!(session.event_id(), Some("evt-1"));
        assert_eq!(store.load().expect("load"), session);
        assert_eq!(store.token_source(), Some(TokenSource::File));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(store.path()).expect("metadata").permissions().mode() & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }
    }

    #[test]
    fn login_without_event_clears_previous_selection() {
        let (_tmp, store) = store();
        store.select_event("evt-old").expect("select");
        let session = store.begin(&response(None)).expect("begin");
        assert_eq!(session.event_id, None);
    }

    #[test]
    fn end_keeps_event_selection() {
        let (_tmp, store) = store();
        store.begin(&response(Some("evt-1"))).expect("begin");
        let session = store.end().expect("end");
        assert!(!session.is_authenticated());
        assert_eq!(session.event_id(), Some("evt-1"));
        assert_eq!(store.load().expect("load"), session);
    }

    #[test]
    fn env_token_overrides_without_writing() {
        let (_tmp, store) = store();
        store.begin(&response(Some("evt-1"))).expect("begin");
        let store = store.with_env_token(Some("ci-token".into()));
        assert_eq!(store.load().expect("load").token.as_deref(), Some("ci-token"));
        assert_eq!(store.load_stored().expect("stored").token.as_deref(), Some("tok-1"));
        assert_eq!(store.token_source(), Some(TokenSource::Env));
    }

    #[test]
    fn blank_env_token_is_ignored() {
        let (_tmp, store) = store();
        let store = store.with_env_token(Some(String::new()));
        assert_eq!(store.token_source(), None);
    }

    #[test]
    fn placeholder_ids_on_disk_are_dropped() {
        let (_tmp, store) = store();
        fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
        fs::write(store.path(), r#"{"token":"t","event_id":"undefined"}"#).expect("write");
        assert_eq!(store.load().expect("load").event_id, None);
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let (_tmp, store) = store();
        fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
        fs::write(store.path(), "{not json").expect("write");
        assert_eq!(store.load().expect("load"), Session::default());
    }

    #[test]
    fn select_rejects_placeholders_and_clear_forgets() {
        let (_tmp, store) = store();
        assert!(store.select_event("undefined").is_err());
        store.select_event(" evt-2 ").expect("select");
        assert_eq!(store.load().expect("load").event_id(), Some("evt-2"));
        let session = store.clear_event().expect("clear");
        assert_eq!(session.event_id, None);
    }
}
