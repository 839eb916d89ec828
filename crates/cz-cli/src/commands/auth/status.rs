use serde::Serialize;

use cz_auth::guard::landing_view;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    username: Option<String>,
    role: Option<String>,
    event_id: Option<String>,
    token_source: Option<&'static str>,
    can_manage: bool,
    home: String,
    backend: String,
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = &ctx.session;
    let authenticated = session.is_authenticated();
    let status = AuthStatusResponse {
        authenticated,
        username: session.username.clone(),
        role: session.role.clone(),
        event_id: session.event_id().map(ToString::to_string),
        token_source: ctx.store.token_source().map(|source| source.as_str()),
        can_manage: cz_auth::can_manage(session),
        home: if authenticated {
            landing_view(session.role()).command().to_string()
        } else {
            "cz auth login".to_string()
        },
        backend: ctx.client.base_url().to_string(),
    };

    output(&status, flags.format)
}
