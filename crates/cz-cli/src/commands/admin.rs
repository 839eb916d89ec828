mod admins;
mod categories;
mod events;
mod logs;

use cz_core::CoreError;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::context::AppContext;

/// Handle `cz admin <group> <subcommand>`. Every group needs a superadmin session.
pub async fn handle(
    action: &AdminCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_superadmin()?;
    match action {
        AdminCommands::Admins { action } => admins::run(action, ctx, flags).await,
        AdminCommands::Events { action } => events::run(action, ctx, flags).await,
        AdminCommands::Categories { action } => categories::run(action, ctx, flags).await,
        AdminCommands::Logs { action } => logs::run(action, ctx, flags).await,
    }
}

/// Trimmed, non-empty text for a required field.
fn required(value: &str, field: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// A password exactly as typed. Only the empty string is refused.
fn secret(value: &str) -> Result<String, CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation("password is required".into()));
    }
    Ok(value.to_string())
}

/// Trimmed text for an optional field; blank means "leave unchanged".
fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{optional, required, secret};

    #[test]
    fn required_rejects_blank() {
        assert!(required("  ", "event name").is_err());
        assert_eq!(required(" Summer Cup ", "event name").expect("valid"), "Summer Cup");
    }

    #[test]
    fn passwords_are_sent_as_typed() {
        assert_eq!(secret(" pass ").expect("valid"), " pass ");
        assert_eq!(secret("   ").expect("spaces are a password"), "   ");
        assert!(secret("").is_err());
    }

    #[test]
    fn blank_optional_means_unchanged() {
        assert_eq!(optional(Some("   ")), None);
        assert_eq!(optional(Some(" new ")), Some("new".to_string()));
        assert_eq!(optional(None), None);
    }
}
