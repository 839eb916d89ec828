use crate::cli::GlobalFlags;
use crate::commands::deduction::NOT_ASSIGNED;
use crate::commands::shared::confirm::confirm;
use crate::commands::shared::failure::backend_failure_or;
use crate::context::AppContext;
use crate::output::{Notice, notify};

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_manager()?;
    if !confirm("Are you sure?", flags)? {
        return notify(&Notice::new("Delete cancelled"), flags);
    }

    ctx.client
        .delete_deduction(id)
        .await
        .map_err(|error| backend_failure_or(error, NOT_ASSIGNED, "Error deleting"))?;

    notify(&Notice::new("Expense deleted successfully").with_id(id), flags)
}
