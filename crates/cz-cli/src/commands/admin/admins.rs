use cz_core::requests::{AdminUpdate, NewAdmin};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminsCommands;
use crate::commands::admin::{optional, required, secret};
use crate::commands::shared::confirm::confirm;
use crate::commands::shared::failure::detailed_failure;
use crate::context::AppContext;
use crate::output::{Notice, notify, output_rows};
use crate::views::AdminRow;

pub async fn run(action: &AdminsCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AdminsCommands::List => {
            let (admins, events) = tokio::join!(ctx.client.list_admins(), ctx.client.list_all_events());
            let admins = admins.map_err(|error| detailed_failure(&error, "Error fetching data"))?;
            let events = events.map_err(|error| detailed_failure(&error, "Error fetching data"))?;
            output_rows(&AdminRow::list(&admins, &events), flags.format)
        }
        AdminsCommands::Create {
            username,
            password,
            email,
            events,
        } => {
            let admin = NewAdmin {
                username: required(username, "username")?,
                password: secret(password)?,
                email: optional(email.as_deref()).unwrap_or_default(),
                assigned_events: events.clone(),
            };
            ctx.client
                .create_admin(&admin)
                .await
                .map_err(|error| detailed_failure(&error, "Error creating admin"))?;
            notify(&Notice::new("Admin created successfully"), flags)
        }
        AdminsCommands::Update {
            id,
            username,
            email,
            password,
        } => {
            let update = profile_update(username.as_deref(), email.as_deref(), password.as_deref());
            if update == AdminUpdate::default() {
                anyhow::bail!("nothing to change: pass at least one of --username, --email, --password");
            }
            send(ctx, id, &update, "Error updating admin").await?;
            notify(&Notice::new("Admin updated successfully").with_id(id), flags)
        }
        AdminsCommands::Activate { id } => set_active(ctx, flags, id, true).await,
        AdminsCommands::Deactivate { id } => set_active(ctx, flags, id, false).await,
        AdminsCommands::Assign { id, events } => {
            let update = AdminUpdate {
                assigned_events: Some(events.clone()),
                ..AdminUpdate::default()
            };
            send(ctx, id, &update, "Error updating events").await?;
            notify(
                &Notice::new("Assigned events updated successfully").with_id(id),
                flags,
            )
        }
        AdminsCommands::Delete { id } => {
            if !confirm("Delete this admin?", flags)? {
                return notify(&Notice::new("Delete cancelled"), flags);
            }
            ctx.client
                .delete_admin(id)
                .await
                .map_err(|error| detailed_failure(&error, "Error deleting admin"))?;
            notify(&Notice::new("Admin deleted").with_id(id), flags)
        }
    }
}

/// Profile fields to change. Blank text leaves a field alone; the password
/// is never trimmed.
fn profile_update(username: Option<&str>, email: Option<&str>, password: Option<&str>) -> AdminUpdate {
    AdminUpdate {
        username: optional(username),
        email: optional(email),
        password: password.filter(|p| !p.is_empty()).map(ToString::to_string),
        ..AdminUpdate::default()
    }
}

async fn set_active(ctx: &AppContext, flags: &GlobalFlags, id: &str, active: bool) -> anyhow::Result<()> {
    let update = AdminUpdate {
        is_active: Some(active),
        ..AdminUpdate::default()
    };
    send(ctx, id, &update, "Error updating status").await?;
    let message = if active { "Admin activated" } else { "Admin deactivated" };
    notify(&Notice::new(message).with_id(id), flags)
}

async fn send(ctx: &AppContext, id: &str, update: &AdminUpdate, prefix: &str) -> anyhow::Result<()> {
    ctx.client
        .update_admin(id, update)
        .await
        .map_err(|error| detailed_failure(&error, prefix))
}
