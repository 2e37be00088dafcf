use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use configs::SecurityConfig;
use server::routes::{self, ServerState};
use service::client::{policy::ValidationPolicy, repository::mock::MockClientRepository, ClientService};
use service::password::PasswordHashing;

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let repo = Arc::new(MockClientRepository::default());
    let hasher = PasswordHashing::new(&SecurityConfig { hash_memory_kib: 1024, hash_iterations: 1, hash_parallelism: 1 })?;
    let state = ServerState { clients: Arc::new(ClientService::with_config(repo, hasher, ValidationPolicy::default())) };

    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn ana() -> Value {
    json!({"name": "Ana", "email": "ana@x.com", "password": "secret1", "telefone": 11999990000i64})
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_client_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    // Create
    let res = c.post(format!("{}/clients", app.base_url)).json(&ana()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert_eq!(created["name"], "Ana");
    assert_eq!(created["email"], "ana@x.com");
    assert_eq!(created["telefone"], 11999990000i64);
    assert!(created.get("password").is_none());
    assert!(created.get("createdAt").is_some());
    let id = created["id"].as_str().expect("id").to_string();

    // Duplicate
    let res = c.post(format!("{}/clients", app.base_url)).json(&ana()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Email already exists");

    // Retrieve
    let res = c.get(format!("{}/clients/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    // Partial update
    let res = c
        .patch(format!("{}/clients/{}", app.base_url, id))
        .json(&json!({"name": "Ana Maria", "password": "secret2"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<Value>().await?;
    assert_eq!(updated["name"], "Ana Maria");
    assert_eq!(updated["email"], "ana@x.com");
    assert_eq!(updated["telefone"], 11999990000i64);
    assert!(updated.get("password").is_none());

    // Delete, then gone
    let res = c.delete(format!("{}/clients/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.get(format!("{}/clients/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Client not found");
    Ok(())
}

#[tokio::test]
async fn e2e_list_returns_all_without_passwords() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    for i in 0..3 {
        let body = json!({"name": format!("C{i}"), "email": format!("c{i}@x.com"), "password": "pw", "telefone": i});
        let res = c.post(format!("{}/clients", app.base_url)).json(&body).send().await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }
    let res = c.get(format!("{}/clients", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let list = res.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 3);
    assert!(list.iter().all(|v| v.get("password").is_none()));
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_id_is_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let id = Uuid::new_v4();

    let res = c.get(format!("{}/clients/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let res = c.patch(format!("{}/clients/{}", app.base_url, id)).json(&json!({"name": "x"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let res = c.delete(format!("{}/clients/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/api-docs/openapi.json", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc = res.json::<Value>().await?;
    assert!(doc["paths"]["/clients/{id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_body_is_json_error() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/clients", app.base_url))
        .json(&json!({"name": "Ana", "password": "secret1", "telefone": 1}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<Value>().await?;
    assert!(body["message"].as_str().unwrap_or_default().contains("email"));

    let res = c
        .post(format!("{}/clients", app.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert!(res.json::<Value>().await?["message"].is_string());
    Ok(())
}
