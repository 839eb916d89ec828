use cz_core::requests::{EventUpdate, NewEvent};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminEventCommands;
use crate::commands::admin::required;
use crate::commands::shared::confirm::confirm;
use crate::commands::shared::failure::detailed_failure;
use crate::context::AppContext;
use crate::output::{Notice, notify, output_rows};
use crate::views::EventRow;

pub async fn run(
    action: &AdminEventCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AdminEventCommands::List => {
            let events = ctx
                .client
                .list_all_events()
                .await
                .map_err(|error| detailed_failure(&error, "Error fetching data"))?;
            output_rows(&EventRow::list(&events, ctx.session.event_id()), flags.format)
        }
        AdminEventCommands::Create { name } => {
            let event = NewEvent {
                name: required(name, "event name")?,
            };
            ctx.client
                .create_event(&event)
                .await
                .map_err(|error| detailed_failure(&error, "Error creating event"))?;
            notify(&Notice::new("Event created successfully"), flags)
        }
        AdminEventCommands::Rename { id, name } => {
            let update = EventUpdate {
                name: Some(required(name, "event name")?),
                ..EventUpdate::default()
            };
            update_event(ctx, id, &update, "Error updating event").await?;
            notify(&Notice::new("Event updated").with_id(id), flags)
        }
        AdminEventCommands::Activate { id } => set_active(ctx, flags, id, true).await,
        AdminEventCommands::Deactivate { id } => set_active(ctx, flags, id, false).await,
        AdminEventCommands::Delete { id } => {
            if !confirm("Delete this event?", flags)? {
                return notify(&Notice::new("Delete cancelled"), flags);
            }
            ctx.client
                .delete_event(id)
                .await
                .map_err(|error| detailed_failure(&error, "Error deleting event"))?;
            notify(&Notice::new("Event deleted").with_id(id), flags)
        }
    }
}

async fn set_active(ctx: &AppContext, flags: &GlobalFlags, id: &str, active: bool) -> anyhow::Result<()> {
    let update = EventUpdate {
        is_active: Some(active),
        ..EventUpdate::default()
    };
    update_event(ctx, id, &update, "Error updating event status").await?;
    let message = if active { "Event activated" } else { "Event deactivated" };
    notify(&Notice::new(message).with_id(id), flags)
}

async fn update_event(
    ctx: &AppContext,
    id: &str,
    update: &EventUpdate,
    prefix: &str,
) -> anyhow::Result<()> {
    ctx.client
        .update_event(id, update)
        .await
        .map_err(|error| detailed_failure(&error, prefix))
}
