use chrono::{Local, NaiveDate};

use cz_core::Amount;
use cz_core::requests::PaymentInput;

use crate::cli::GlobalFlags;
use crate::commands::shared::failure::backend_failure;
use crate::commands::shared::parse::{parse_method, parse_opt, parse_status};
use crate::context::AppContext;
use crate::output::{Notice, notify};

pub struct NewRecord<'a> {
    pub name: &'a str,
    pub amount: Amount,
    pub status: Option<&'a str>,
    pub method: Option<&'a str>,
    pub date: Option<NaiveDate>,
    pub event: Option<&'a str>,
}

pub async fn run(fields: &NewRecord<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_manager()?;
    let event_id = ctx.event_id_for_entry(
        fields.event,
        "Please select an event before adding a record.",
    )?;

    let input = PaymentInput {
        event_id,
        name: fields.name.trim().to_string(),
        amount: fields.amount,
        status: parse_opt(fields.status, parse_status)?.unwrap_or_default(),
        payment_method: parse_opt(fields.method, parse_method)?.unwrap_or_default(),
        date: fields.date.unwrap_or_else(|| Local::now().date_naive()),
    };
    input.validate()?;

    ctx.client
        .create_person(&input)
        .await
        .map_err(|error| backend_failure(error, "Operation failed"))?;

    notify(&Notice::new("Record added successfully"), flags)
}
