use chrono::{Local, NaiveDate};

use cz_core::requests::{PaymentInput, PaymentPatch};
use cz_core::{Amount, CoreError};

use crate::cli::GlobalFlags;
use crate::commands::collection::fetch_people;
use crate::commands::shared::failure::backend_failure;
use crate::commands::shared::parse::{parse_method, parse_opt, parse_status};
use crate::context::AppContext;
use crate::output::{Notice, notify};

pub struct Changes<'a> {
    pub name: Option<&'a str>,
    pub amount: Option<Amount>,
    pub status: Option<&'a str>,
    pub method: Option<&'a str>,
    pub date: Option<NaiveDate>,
}

impl Changes<'_> {
    fn to_patch(&self) -> anyhow::Result<PaymentPatch> {
        Ok(PaymentPatch {
            name: self.name.map(|name| name.trim().to_string()),
            amount: self.amount,
            status: parse_opt(self.status, parse_status)?,
            payment_method: parse_opt(self.method, parse_method)?,
            date: self.date,
        })
    }
}

pub async fn run(
    id: &str,
    changes: &Changes<'_>,
    event: Option<&str>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_manager()?;
    let patch = changes.to_patch()?;
    if patch.is_empty() {
        anyhow::bail!("nothing to change: pass at least one of --name, --amount, --status, --method, --date");
    }

    let (event_id, records) = fetch_people(ctx, event).await?;
    let record = records
        .iter()
        .find(|record| record.id == id)
        .ok_or_else(|| CoreError::not_found("payment record", id))?;

    let input = patch.apply(PaymentInput::from_record(
        record,
        &event_id,
        Local::now().date_naive(),
    ));
    input.validate()?;

    ctx.client
        .update_person(id, &input)
        .await
        .map_err(|error| backend_failure(error, "Operation failed"))?;

    notify(&Notice::new("Record updated successfully").with_id(id), flags)
}
