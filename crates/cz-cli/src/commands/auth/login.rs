use serde::Serialize;

use cz_core::requests::Credentials;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LoginResponse {
    message: String,
    username: Option<String>,
    role: Option<String>,
    event_id: Option<String>,
    landing: String,
    next: &'static str,
}

pub async fn run(args: &LoginArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let credentials = Credentials {
        username: args.username.trim().to_string(),
        password: args.password.clone(),
        event_id: args.event.as_deref().map(str::trim).unwrap_or_default().to_string(),
    };

    let outcome = match cz_auth::login(&ctx.client, &ctx.store, &credentials).await {
        Ok(outcome) => outcome,
        Err(error) => {
            tracing::debug!(%error, "login failed");
            anyhow::bail!(cz_auth::login_failure_message(&error));
        }
    };

    let response = LoginResponse {
        message: outcome.welcome.clone(),
        username: outcome.session.username.clone(),
        role: outcome.session.role.clone(),
        event_id: outcome.session.event_id().map(ToString::to_string),
        landing: outcome.landing.to_string(),
        next: outcome.landing.command(),
    };
    ctx.set_session(outcome.session);
    output(&response, flags.format)
}
