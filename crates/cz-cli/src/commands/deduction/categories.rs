use crate::cli::GlobalFlags;
use crate::commands::shared::failure::backend_failure;
use crate::context::AppContext;
use crate::output::output_rows;
use crate::views::CategoryRow;

pub async fn run(event: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let event_id = ctx.event_id(event)?;
    let categories = ctx
        .client
        .event_categories(&event_id)
        .await
        .map_err(|error| backend_failure(error, "Error fetching categories"))?;
    output_rows(&CategoryRow::list(&categories, &[]), flags.format)
}
