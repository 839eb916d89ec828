use serde::Serialize;

use cz_core::entities::Event;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EventCommands;
use crate::context::AppContext;
use crate::output::{output, output_rows};
use crate::views::EventRow;

#[derive(Serialize)]
struct SelectionResponse {
    event_id: Option<String>,
    name: Option<String>,
}

/// Handle `cz event <subcommand>`.
pub async fn handle(
    action: &EventCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EventCommands::List => {
            let events = ctx.client.public_events().await?;
            output_rows(&EventRow::list(&events, ctx.session.event_id()), flags.format)
        }
        EventCommands::Select { id } => {
            let session = ctx.store.select_event(id)?;
            ctx.set_session(session);
            let name = event_name(ctx, id).await;
            if name.is_none() {
                tracing::warn!(event = %id, "selected event is not in the public event list");
            }
            output(
                &SelectionResponse {
                    event_id: Some(id.trim().to_string()),
                    name,
                },
                flags.format,
            )
        }
        EventCommands::Clear => {
            let session = ctx.store.clear_event()?;
            ctx.set_session(session);
            output(
                &SelectionResponse {
                    event_id: None,
                    name: None,
                },
                flags.format,
            )
        }
        EventCommands::Current => {
            let event_id = ctx.session.event_id().map(ToString::to_string);
            let name = match &event_id {
                Some(id) => event_name(ctx, id).await,
                None => None,
            };
            output(&SelectionResponse { event_id, name }, flags.format)
        }
    }
}

/// Best-effort lookup of an event's display name.
async fn event_name(ctx: &AppContext, id: &str) -> Option<String> {
    match ctx.client.public_events().await {
        Ok(events) => Event::find(&events, id.trim()).map(|event| event.name.clone()),
        Err(error) => {
            tracing::debug!(%error, "could not fetch events for name lookup");
            None
        }
    }
}
