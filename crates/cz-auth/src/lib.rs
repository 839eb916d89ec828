//! # cz-auth
//!
//! Session handling for the CHALLENGERZ console.
//!
//! - [`Session`]: token, role, username, and selected event
//! - [`SessionStore`]: JSON file under `~/.challengerz` with an env-var
//!   token override for CI
//! - [`login`] / [`logout`]: backend login and local teardown
//! - [`guard`]: landing views and role checks

pub mod error;
pub mod guard;
pub mod login;
pub mod session;
pub mod store;

pub use error::AuthError;
pub use guard::{View, can_manage, landing_view, require_role, require_token};
pub use login::{LoginOutcome, login, login_failure_message, logout};
pub use session::Session;
pub use store::{SessionStore, TokenSource};
