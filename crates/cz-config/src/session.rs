//! Where the login session is persisted.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory holding `session.json`. Empty means `~/.challengerz`.
    #[serde(default)]
    pub dir: String,
}

impl SessionConfig {
    /// Resolve the session directory, falling back to the home directory.
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        let dir = self.dir.trim();
        if dir.is_empty() {
            dirs::home_dir().map(|home| home.join(".challengerz"))
        } else {
            Some(PathBuf::from(dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = SessionConfig {
            dir: "/tmp/cz-session".into(),
        };
        assert_eq!(config.resolved_dir(), Some(PathBuf::from("/tmp/cz-session")));
    }

    #[test]
    fn empty_dir_uses_home() {
        let resolved = SessionConfig::default().resolved_dir();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolved, Some(home.join(".challengerz")));
        }
    }
}
