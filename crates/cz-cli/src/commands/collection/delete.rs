use crate::cli::GlobalFlags;
use crate::commands::shared::confirm::confirm;
use crate::commands::shared::failure::backend_failure;
use crate::context::AppContext;
use crate::output::{Notice, notify};

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_manager()?;
    if !confirm("Are you sure you want to delete this record?", flags)? {
        return notify(&Notice::new("Delete cancelled"), flags);
    }

    ctx.client
        .delete_person(id)
        .await
        .map_err(|error| backend_failure(error, "Failed to delete. Ensure you are logged in."))?;

    notify(&Notice::new("Record deleted successfully").with_id(id), flags)
}
