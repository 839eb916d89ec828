use cz_core::requests::{CategoryUpdate, NewCategory};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCategoryCommands;
use crate::commands::admin::required;
use crate::commands::shared::confirm::confirm;
use crate::commands::shared::failure::detailed_failure;
use crate::context::AppContext;
use crate::output::{Notice, notify, output_rows};
use crate::views::CategoryRow;

pub async fn run(
    action: &AdminCategoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AdminCategoryCommands::List { event } => {
            let (categories, events) = tokio::join!(
                ctx.client.list_all_categories(),
                ctx.client.list_all_events()
            );
            let categories =
                categories.map_err(|error| detailed_failure(&error, "Error fetching data"))?;
            let events = events.map_err(|error| detailed_failure(&error, "Error fetching data"))?;

            let mut rows = CategoryRow::list(&categories, &events);
            if let Some(event) = event.as_deref() {
                rows.retain(|row| row.event_id.as_deref() == Some(event));
            }
            output_rows(&rows, flags.format)
        }
        AdminCategoryCommands::Create { name, event } => {
            let category = NewCategory {
                name: required(name, "category name")?,
                event_id: required(event, "event")?,
            };
            ctx.client
                .create_category(&category)
                .await
                .map_err(|error| detailed_failure(&error, "Error creating category"))?;
            notify(&Notice::new("Category created successfully"), flags)
        }
        AdminCategoryCommands::Rename { id, name } => {
            let update = CategoryUpdate {
                name: required(name, "category name")?,
            };
            ctx.client
                .rename_category(id, &update)
                .await
                .map_err(|error| detailed_failure(&error, "Error updating category"))?;
            notify(&Notice::new("Category renamed").with_id(id), flags)
        }
        AdminCategoryCommands::Delete { id } => {
            let prompt = "Are you sure? This will not delete existing deductions but might affect future entries.";
            if !confirm(prompt, flags)? {
                return notify(&Notice::new("Delete cancelled"), flags);
            }
            ctx.client
                .delete_category(id)
                .await
                .map_err(|error| detailed_failure(&error, "Error deleting category"))?;
            notify(&Notice::new("Category deleted").with_id(id), flags)
        }
    }
}
