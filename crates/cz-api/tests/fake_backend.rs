//! End-to-end client tests against a local `tiny_http` backend.

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDate;
use cz_api::{ACCESS_DENIED, ApiClient, ApiError};
use cz_core::Amount;
use cz_core::enums::{EntryStatus, PaymentMethod, PaymentStatus};
use cz_core::requests::{AdminUpdate, Credentials, PaymentInput};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    url: String,
    authorization: Option<String>,
    body: String,
}

type Route = fn(&Recorded) -> (u16, Value);

struct FakeBackend {
    base_url: String,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeBackend {
    fn start(route: Route) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fake backend");
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("tcp listener");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);

        std::thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let recorded = Recorded {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    authorization: request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv("Authorization"))
                        .map(|h| h.value.as_str().to_string()),
                    body,
                };
                let (status, payload) = route(&recorded);
                log.lock().expect("log lock").push(recorded);
                let response = tiny_http::Response::from_string(payload.to_string())
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", "application/json")
                            .expect("static header"),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}/"),
            seen,
        }
    }

    fn client(&self, token: Option<&str>) -> ApiClient {
        ApiClient::new(&self.base_url, Duration::from_secs(5))
            .expect("client builds")
            .with_token(token.map(ToString::to_string))
    }

    fn requests(&self) -> Vec<Recorded> {
        self.seen.lock().expect("log lock").clone()
    }
}

fn routes(req: &Recorded) -> (u16, Value) {
    match (req.method.as_str(), req.url.as_str()) {
        ("GET", "/api/auth/events") => (
            200,
            json!([
                {"_id": "evt-1", "name": "Summer Cup", "isActive": true},
                {"_id": "evt-2", "name": "Old Cup", "isActive": false}
            ]),
        ),
        ("POST", "/api/auth/login") => {
            let body: Value = serde_json::from_str(&req.body).unwrap_or_default();
            if body["password"] == "right" {
                (
                    200,
                    json!({"token": "tok-1", "role": "admin", "username": body["username"], "eventId": body["eventId"]}),
                )
            } else {
                (400, json!({"message": "Invalid credentials"}))
            }
        }
        ("GET", "/api/people?eventId=evt-1") => (
            200,
            json!([
                {"_id": "p1", "eventId": "evt-1", "name": "Asha", "amount": 100, "status": "Paid"},
                {"_id": "p2", "eventId": "evt-1", "name": "Ravi", "amount": "50", "status": "Credit", "credit": true}
            ]),
        ),
        ("GET", "/api/people?eventId=undefined") => (400, json!({"message": "Invalid eventId"})),
        ("GET", "/api/superadmin/logs") => {
            if req.authorization.as_deref() == Some("super-tok") {
                (
                    200,
                    json!([{
                        "_id": "l1",
                        "timestamp": "2024-06-01T10:00:00.000Z",
                        "performedByName": "root",
                        "action": "DELETE_EVENT",
                        "target": "Summer Cup",
                        "details": {"id": "evt-1"}
                    }]),
                )
            } else {
                (403, json!({}))
            }
        }
        ("DELETE", url) if url.starts_with("/api/people/") => (200, json!({"message": "deleted"})),
        ("PUT", url) if url.starts_with("/api/superadmin/admins/") => (200, json!({"ok": true})),
        ("POST", "/api/people") => (403, json!({"message": "Event not assigned to you"})),
        _ => (404, json!({"message": "no route"})),
    }
}

fn payment() -> PaymentInput {
    PaymentInput {
        event_id: "evt-1".into(),
        name: "Meera".into(),
        amount: Amount::from(75),
        status: EntryStatus::Paid,
        payment_method: PaymentMethod::Cash,
        date: NaiveDate::from_ymd_opt(2024, 6, 1).expect("date"),
    }
}

#[tokio::test]
async fn public_events_need_no_token() {
    let backend = FakeBackend::start(routes);
    let events = backend.client(None).public_events().await.expect("events");
    assert_eq!(events.len(), 2);
    assert!(events[0].is_active);
    assert!(!events[1].is_active);
    assert_eq!(backend.requests()[0].authorization, None);
}

#[tokio::test]
async fn login_sends_camel_case_credentials() {
    let backend = FakeBackend::start(routes);
    let response = backend
        .client(None)
        .login(&Credentials {
            username: "asha".into(),
            password: "right".into(),
            event_id: "evt-1".into(),
        })
        .await
        .expect("login");
    assert_eq!(response.token, "tok-1");
    assert_eq!(response.event_id.as_deref(), Some("evt-1"));

    let sent: Value = serde_json::from_str(&backend.requests()[0].body).expect("json body");
    assert_eq!(sent, json!({"username": "asha", "password": "right", "eventId": "evt-1"}));
}

#[tokio::test]
async fn rejected_login_keeps_backend_message() {
    let backend = FakeBackend::start(routes);
    let err = backend
        .client(None)
        .login(&Credentials {
            username: "asha".into(),
            password: "wrong".into(),
            event_id: String::new(),
        })
        .await
        .expect_err("bad password");
    assert_eq!(err.backend_message(), Some("Invalid credentials"));
}

#[tokio::test]
async fn people_are_fetched_with_raw_token() {
    let backend = FakeBackend::start(routes);
    let people = backend
        .client(Some("tok-1"))
        .list_people("evt-1")
        .await
        .expect("people");
    assert_eq!(people.len(), 2);
    assert_eq!(people[1].status, PaymentStatus::Credit);
    assert_eq!(people[1].amount, Amount::from(50));
    assert_eq!(backend.requests()[0].authorization.as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn unusable_event_id_is_a_bad_request() {
    let backend = FakeBackend::start(routes);
    let err = backend
        .client(None)
        .list_people("undefined")
        .await
        .expect_err("400");
    assert!(matches!(err, ApiError::BadRequest { .. }));
}

#[tokio::test]
async fn mutations_without_token_send_nothing() {
    let backend = FakeBackend::start(routes);
    let client = backend.client(None);
    assert!(matches!(
        client.create_person(&payment()).await,
        Err(ApiError::MissingToken)
    ));
    assert!(matches!(
        client.delete_person("p1").await,
        Err(ApiError::MissingToken)
    ));
    assert!(matches!(client.audit_logs().await, Err(ApiError::MissingToken)));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn delete_encodes_the_id() {
    let backend = FakeBackend::start(routes);
    backend
        .client(Some("tok-1"))
        .delete_person("p 1/x")
        .await
        .expect("delete");
    let request = &backend.requests()[0];
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.url, "/api/people/p%201%2Fx");
}

#[tokio::test]
async fn forbidden_create_surfaces_backend_reason() {
    let backend = FakeBackend::start(routes);
    let err = backend
        .client(Some("tok-1"))
        .create_person(&payment())
        .await
        .expect_err("403");
    assert_eq!(err.notification("Operation failed"), "Event not assigned to you");
}

#[tokio::test]
async fn admin_update_sends_only_changed_fields() {
    let backend = FakeBackend::start(routes);
    backend
        .client(Some("super-tok"))
        .update_admin(
            "adm-1",
            &AdminUpdate {
                assigned_events: Some(vec!["evt-1".into(), "evt-2".into()]),
                ..AdminUpdate::default()
            },
        )
        .await
        .expect("update");
    let request = &backend.requests()[0];
    assert_eq!(request.method, "PUT");
    assert_eq!(request.url, "/api/superadmin/admins/adm-1");
    let sent: Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(sent, json!({"assignedEvents": ["evt-1", "evt-2"]}));
}

#[tokio::test]
async fn audit_logs_require_the_superadmin_token() {
    let backend = FakeBackend::start(routes);
    let logs = backend
        .client(Some("super-tok"))
        .audit_logs()
        .await
        .expect("logs");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].performed_by(), "root");
    assert_eq!(logs[0].details_text(), r#"{"id":"evt-1"}"#);

    let err = backend
        .client(Some("admin-tok"))
        .audit_logs()
        .await
        .expect_err("403");
    assert_eq!(err.notification("Error fetching data"), ACCESS_DENIED);
}
