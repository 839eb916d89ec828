//! Role-based routing and permission checks.

use std::fmt;

use cz_core::enums::Role;

use crate::error::AuthError;
use crate::session::Session;

/// The console's top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    /// Public event dashboard.
    Home,
    Collection,
    Deductions,
    SuperAdmin,
}

impl View {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
            Self::Collection => "/collection",
            Self::Deductions => "/deduction",
            Self::SuperAdmin => "/superadmin",
        }
    }

    /// The CLI command that opens this screen.
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::Login => "cz auth login",
            Self::Home => "cz dashboard",
            Self::Collection => "cz collection list",
            Self::Deductions => "cz deduction list",
            Self::SuperAdmin => "cz admin admins list",
        }
    }

    /// Roles allowed in; `None` means open to everyone.
    #[must_use]
    pub const fn allowed_roles(self) -> Option<&'static [Role]> {
        match self {
            Self::SuperAdmin => Some(&[Role::SuperAdmin]),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Login => "login",
            Self::Home => "home",
            Self::Collection => "collection",
            Self::Deductions => "deductions",
            Self::SuperAdmin => "super-admin console",
        };
        f.write_str(name)
    }
}

/// Where a freshly logged-in user lands.
#[must_use]
pub const fn landing_view(role: Option<Role>) -> View {
    match role {
        Some(Role::SuperAdmin) => View::SuperAdmin,
        Some(Role::Admin) => View::Collection,
        None => View::Home,
    }
}

/// Resolve a navigation request: protected screens send a logged-out user to
/// login and an unauthorized one home.
#[must_use]
pub fn route(session: &Session, requested: View) -> View {
    let Some(allowed) = requested.allowed_roles() else {
        return requested;
    };
    if !session.is_authenticated() {
        return View::Login;
    }
    match session.role() {
        Some(role) if allowed.contains(&role) => requested,
        _ => View::Home,
    }
}

/// The session token, or `NotAuthenticated`.
///
/// # Errors
///
/// Returns `AuthError::NotAuthenticated` when no token is present.
pub fn require_token(session: &Session) -> Result<&str, AuthError> {
    session
        .token
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or(AuthError::NotAuthenticated)
}

/// The caller's role, if it is one of `allowed`.
///
/// # Errors
///
/// Returns `NotAuthenticated` without a token and `Forbidden` for any other role.
pub fn require_role(session: &Session, allowed: &[Role]) -> Result<Role, AuthError> {
    require_token(session)?;
    match session.role() {
        Some(role) if allowed.contains(&role) => Ok(role),
        _ => Err(AuthError::Forbidden {
            required: allowed
                .iter()
                .map(|r| r.as_str())
                .collect::<Vec<_>>()
                .join(" or "),
        }),
    }
}

/// Whether management actions (add, edit, delete) are available.
#[must_use]
pub fn can_manage(session: &Session) -> bool {
    require_role(session, &[Role::Admin, Role::SuperAdmin]).is_ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn session(token: Option<&str>, role: Option<&str>) -> Session {
        Session {
            token: token.map(ToString::to_string),
            role: role.map(ToString::to_string),
            ..Session::default()
        }
    }

    #[test]
    fn landing_depends_on_role() {
        assert_eq!(landing_view(Some(Role::SuperAdmin)), View::SuperAdmin);
        assert_eq!(landing_view(Some(Role::Admin)), View::Collection);
        assert_eq!(landing_view(None), View::Home);
        assert_eq!(landing_view(Role::parse("auditor")), View::Home);
    }

    #[test]
    fn superadmin_console_is_protected() {
        assert_eq!(route(&session(None, None), View::SuperAdmin), View::Login);
        assert_eq!(
            route(&session(Some("t"), Some("admin")), View::SuperAdmin),
            View::Home
        );
        assert_eq!(
            route(&session(Some("t"), Some("superadmin")), View::SuperAdmin),
            View::SuperAdmin
        );
        assert_eq!(route(&session(None, None), View::Collection), View::Collection);
    }

    #[test]
    fn require_token_rejects_blank() {
        assert!(matches!(
            require_token(&session(Some(" "), Some("admin"))),
            Err(AuthError::NotAuthenticated)
        ));
        assert_eq!(require_token(&session(Some("t"), None)).expect("token"), "t");
    }

    #[test]
    fn require_role_names_what_is_missing() {
        let err = require_role(&session(Some("t"), Some("admin")), &[Role::SuperAdmin])
            .expect_err("admin is not superadmin");
        assert_eq!(err.to_string(), "this action requires the superadmin role");
        assert!(matches!(
            require_role(&session(None, Some("superadmin")), &[Role::SuperAdmin]),
            Err(AuthError::NotAuthenticated)
        ));
    }

    #[test]
    fn management_needs_token_and_known_role() {
        assert!(can_manage(&session(Some("t"), Some("admin"))));
        assert!(can_manage(&session(Some("t"), Some("superadmin"))));
        assert!(!can_manage(&session(Some("t"), Some("viewer"))));
        assert!(!can_manage(&session(None, Some("admin"))));
    }
}
