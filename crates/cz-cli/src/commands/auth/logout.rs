use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    cleared: bool,
    /// The event selection survives logout.
    event_id: Option<String>,
}

pub fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = cz_auth::logout(&ctx.store)?;
    let response = LogoutResponse {
        cleared: true,
        event_id: session.event_id().map(ToString::to_string),
    };
    ctx.set_session(session);
    output(&response, flags.format)
}
