use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use acceso_app_core::{BackendSettings, FilePersistence, RegisterOptions};
use acceso_cli::settings::{handle_set, SettingsUpdate};
use acceso_cli::{commands, CliBackend, Ports};
use acceso_core::messages;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use tempfile::tempdir;

#[derive(Default)]
struct Backend {
    // email -> (local id, password)
    accounts: HashMap<String, (String, String)>,
    documents: HashMap<String, Value>,
    deleted: Vec<String>,
    refuse_documents: bool,
}

type Shared = Arc<Mutex<Backend>>;

fn api_error(code: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": { "code": 400, "message": code } })),
    )
        .into_response()
}

async fn handle(
    State(backend): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let mut backend = backend.lock().unwrap();
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default().to_string();

    match (method, uri.path()) {
        (Method::POST, "/identity/accounts:signUp") => {
            if backend.accounts.contains_key(&email) {
                return api_error("EMAIL_EXISTS");
            }
            let id = format!("uid-{}", backend.accounts.len() + 1);
            backend
                .accounts
                .insert(email.clone(), (id.clone(), password));
            Json(json!({ "localId": id, "idToken": format!("tok-{id}"), "email": email }))
                .into_response()
        }
        (Method::POST, "/identity/accounts:signInWithPassword") => {
            match backend.accounts.get(&email) {
                Some((id, stored)) if *stored == password => {
                    Json(json!({ "localId": id, "idToken": format!("tok-{id}") })).into_response()
                }
                _ => api_error("INVALID_LOGIN_CREDENTIALS"),
            }
        }
        (Method::POST, "/identity/accounts:delete") => {
            let token = body["idToken"].as_str().unwrap_or_default().to_string();
            let id = token.trim_start_matches("tok-").to_string();
            backend.accounts.retain(|_, (uid, _)| *uid != id);
            backend.deleted.push(id);
            Json(json!({})).into_response()
        }
        (Method::PATCH, path) if path.starts_with("/docs/projects/e2e/databases/(default)/documents/users/") => {
            let id = path.rsplit('/').next().unwrap_or_default().to_string();
            let expected = format!("Bearer tok-{id}");
            let authorized = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v == expected);
            if backend.refuse_documents || !authorized {
                return (StatusCode::FORBIDDEN, "denied").into_response();
            }
            backend.documents.insert(id, body.clone());
            Json(json!({ "name": path })).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn start_mock_server() -> (SocketAddr, Shared) {
    let backend = Shared::default();
    let app = Router::new().fallback(handle).with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, backend)
}

fn configure(persistence: &FilePersistence, addr: SocketAddr) -> BackendSettings {
    handle_set(
        persistence,
        SettingsUpdate {
            api_key: Some("e2e-key".into()),
            project_id: Some("e2e".into()),
            identity_endpoint: Some(format!("http://{addr}/identity")),
            firestore_endpoint: Some(format!("http://{addr}/docs")),
            timeout_secs: Some(5),
            rollback: None,
        },
    )
    .unwrap();
    persistence.load_settings().unwrap()
}

#[tokio::test]
async fn register_then_login_against_hosted_api() {
    let (addr, backend) = start_mock_server().await;
    let dir = tempdir().unwrap();
    let persistence = FilePersistence::at(dir.path().join("settings.json"));
    let settings = configure(&persistence, addr);
    let ports = Ports::connect(CliBackend::Firebase, &settings).unwrap();

    commands::cmd_register(
        &ports,
        settings.register_options(),
        "Ana".into(),
        "ana@example.com".into(),
        "secret1".into(),
        "secret1".into(),
    )
    .await
    .unwrap();

    {
        let backend = backend.lock().unwrap();
        let doc = &backend.documents["uid-1"];
        assert_eq!(doc["fields"]["name"]["stringValue"], "Ana");
        assert_eq!(doc["fields"]["email"]["stringValue"], "ana@example.com");
        assert_eq!(doc["fields"]["role"]["stringValue"], "employee");
    }

    commands::cmd_login(&ports, "ana@example.com".into(), "secret1".into())
        .await
        .unwrap();

    let err = commands::cmd_login(&ports, "ana@example.com".into(), "nope".into())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), messages::LOGIN_FAILED);
}

#[tokio::test]
async fn duplicate_email_and_local_validation_surface_as_errors() {
    let (addr, backend) = start_mock_server().await;
    let dir = tempdir().unwrap();
    let persistence = FilePersistence::at(dir.path().join("settings.json"));
    let settings = configure(&persistence, addr);
    let ports = Ports::connect(CliBackend::Firebase, &settings).unwrap();
    let register = |email: &str, password: &str, confirm: &str| {
        commands::cmd_register(
            &ports,
            RegisterOptions::default(),
            "Ana".into(),
            email.into(),
            password.into(),
            confirm.into(),
        )
    };

    register("ana@example.com", "secret1", "secret1").await.unwrap();

    let err = register("ana@example.com", "secret1", "secret1").await.unwrap_err();
    assert_eq!(err.to_string(), messages::EMAIL_IN_USE);

    let err = register("bea@example.com", "secret1", "secret2").await.unwrap_err();
    assert_eq!(err.to_string(), messages::PASSWORDS_DO_NOT_MATCH);

    assert_eq!(backend.lock().unwrap().accounts.len(), 1);
}

#[tokio::test]
async fn refused_profile_write_rolls_back_the_account() {
    let (addr, backend) = start_mock_server().await;
    backend.lock().unwrap().refuse_documents = true;
    let dir = tempdir().unwrap();
    let persistence = FilePersistence::at(dir.path().join("settings.json"));
    let settings = configure(&persistence, addr);
    let ports = Ports::connect(CliBackend::Firebase, &settings).unwrap();

    let err = commands::cmd_register(
        &ports,
        settings.register_options(),
        "Ana".into(),
        "ana@example.com".into(),
        "secret1".into(),
        "secret1".into(),
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), messages::REGISTRATION_FAILED);
    let backend = backend.lock().unwrap();
    assert!(backend.accounts.is_empty());
    assert_eq!(backend.deleted, vec!["uid-1".to_string()]);
}

#[tokio::test]
async fn memory_backend_needs_no_settings() {
    let ports = Ports::connect(CliBackend::Memory, &BackendSettings::default()).unwrap();

    commands::cmd_register(
        &ports,
        RegisterOptions::default(),
        "Ana".into(),
        "ana@example.com".into(),
        "secret1".into(),
        "secret1".into(),
    )
    .await
    .unwrap();
    commands::cmd_login(&ports, "ana@example.com".into(), "secret1".into())
        .await
        .unwrap();
}

#[test]
fn hosted_backend_without_credentials_is_refused() {
    assert!(Ports::connect(CliBackend::Firebase, &BackendSettings::default()).is_err());
}
