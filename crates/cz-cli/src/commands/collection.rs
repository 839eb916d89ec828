mod add;
mod delete;
mod edit;
mod export;
mod list;

use cz_api::ApiError;
use cz_core::entities::PaymentRecord;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CollectionCommands;
use crate::commands::shared::failure::backend_failure;
use crate::context::AppContext;

/// Handle `cz collection <subcommand>`.
pub async fn handle(
    action: &CollectionCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CollectionCommands::List { event, min_amount } => {
            list::run(event.as_deref(), *min_amount, ctx, flags).await
        }
        CollectionCommands::Add {
            name,
            amount,
            status,
            method,
            date,
            event,
        } => {
            let fields = add::NewRecord {
                name,
                amount: *amount,
                status: status.as_deref(),
                method: method.as_deref(),
                date: *date,
                event: event.as_deref(),
            };
            add::run(&fields, ctx, flags).await
        }
        CollectionCommands::Edit {
            id,
            name,
            amount,
            status,
            method,
            date,
            event,
        } => {
            let changes = edit::Changes {
                name: name.as_deref(),
                amount: *amount,
                status: status.as_deref(),
                method: method.as_deref(),
                date: *date,
            };
            edit::run(id, &changes, event.as_deref(), ctx, flags).await
        }
        CollectionCommands::Delete { id } => delete::run(id, ctx, flags).await,
        CollectionCommands::Export {
            event,
            min_amount,
            out,
        } => export::run(event.as_deref(), *min_amount, out.as_deref(), ctx, flags).await,
    }
}

/// Fetch the payment records of the requested (or selected) event.
///
/// A 400 means the event id is unusable. When that id came from the stored
/// selection, the selection is cleared so the next command starts clean.
pub(crate) async fn fetch_people(
    ctx: &mut AppContext,
    explicit: Option<&str>,
) -> anyhow::Result<(String, Vec<PaymentRecord>)> {
    let event_id = ctx.event_id(explicit)?;
    match ctx.client.list_people(&event_id).await {
        Ok(records) => Ok((event_id, records)),
        Err(ApiError::BadRequest { message }) => {
            let from_selection = explicit.is_none() || ctx.session.event_id() == Some(event_id.as_str());
            if from_selection {
                let session = ctx.store.clear_event()?;
                ctx.set_session(session);
                tracing::warn!(event = %event_id, "backend rejected the selected event; selection cleared");
            }
            anyhow::bail!(
                "event '{event_id}' was rejected by the backend ({message}). Run `cz event list` and select a valid event"
            )
        }
        Err(error) => Err(backend_failure(error, "Error fetching records")),
    }
}

#[cfg(test)]
mod tests {
    use cz_auth::SessionStore;
    use cz_config::CzConfig;
    use pretty_assertions::assert_eq;

    use super::fetch_people;
    use crate::context::AppContext;

    /// Rejects every event id with a 400, as the backend does for a
    /// malformed or deleted event.
    fn spawn_rejecting_backend() -> String {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind");
        let port = server.server_addr().to_ip().map(|a| a.port()).expect("port");
        std::thread::spawn(move || {
            for request in server.incoming_requests() {
                let body = serde_json::json!({"message": "Invalid event id"}).to_string();
                let _ = request.respond(tiny_http::Response::from_string(body).with_status_code(400));
            }
        });
        format!("http://127.0.0.1:{port}")
    }

    fn context_with_selection(event_id: &str) -> (tempfile::TempDir, AppContext) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SessionStore::new(dir.path());
        let session = store.select_event(event_id).expect("select");
        let mut config = CzConfig::default();
        config.api.base_url = spawn_rejecting_backend();
        let ctx = AppContext::with_store(config, store, session).expect("context");
        (dir, ctx)
    }

    #[tokio::test]
    async fn rejected_selected_event_is_cleared() {
        let (_dir, mut ctx) = context_with_selection("evt-gone");

        let err = fetch_people(&mut ctx, None).await.expect_err("400");

        assert!(err.to_string().contains("evt-gone"));
        assert!(err.to_string().contains("Invalid event id"));
        assert_eq!(ctx.session.event_id(), None);
        assert_eq!(ctx.store.load().expect("load").event_id, None);
    }

    #[tokio::test]
    async fn rejected_explicit_event_keeps_the_selection() {
        let (_dir, mut ctx) = context_with_selection("evt-keep");

        let err = fetch_people(&mut ctx, Some("evt-typo")).await.expect_err("400");

        assert!(err.to_string().contains("evt-typo"));
        assert_eq!(ctx.session.event_id(), Some("evt-keep"));
        assert_eq!(
            ctx.store.load().expect("load").event_id.as_deref(),
            Some("evt-keep")
        );
    }
}
