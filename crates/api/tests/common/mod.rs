//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use noteful_api::config::{Environment, ServerConfig};
use noteful_api::router::build_app_router;
use noteful_api::state::AppState;

/// Bearer token the test apps are configured with.
pub const TEST_TOKEN: &str = "test-api-token";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(environment: Environment) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_token: TEST_TOKEN.to_string(),
        environment,
        database_url: String::new(),
        db_max_connections: 5,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Full application router in development mode, using the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_in(pool, Environment::Development)
}

/// Full application router in the given environment mode.
pub fn build_test_app_in(pool: PgPool, environment: Environment) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config(environment)),
    };
    build_app_router(state)
}

/// Send a request, optionally with a JSON body and an `Authorization` header
/// value.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    authorization: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = authorization {
        builder = builder.header("authorization", auth);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Authorized request with a raw body and an optional `Content-Type`.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", bearer());
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
}

/// Authorized GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(&bearer())).await
}

/// Authorized POST with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(&bearer())).await
}

/// Authorized PATCH with a JSON body.
pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body), Some(&bearer())).await
}

/// Authorized DELETE.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(&bearer())).await
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect and parse a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert three folders (ids 1..=3) directly, bypassing the API.
pub async fn seed_folders(pool: &PgPool) -> Vec<Value> {
    let names = ["Important", "Super", "Spangley"];
    let mut folders = Vec::new();
    for name in names {
        let (id,): (i64,) =
            sqlx::query_as("INSERT INTO noteful_folder (folder_name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(pool)
                .await
                .unwrap();
        folders.push(json!({ "id": id, "folder_name": name }));
    }
    folders
}

/// Insert a note directly, returning its JSON representation as stored.
pub async fn seed_note(pool: &PgPool, name: &str, folder_id: i64, content: &str) -> Value {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO noteful_note (name, folder_id, content) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(folder_id)
    .bind(content)
    .fetch_one(pool)
    .await
    .unwrap();
    json!({ "id": id, "name": name, "folder_id": folder_id, "content": content })
}

/// Seed folders plus four notes spread across them.
pub async fn seed_notes(pool: &PgPool) -> Vec<Value> {
    let folders = seed_folders(pool).await;
    let folder_id = |i: usize| folders[i]["id"].as_i64().unwrap();

    vec![
        seed_note(pool, "Dogs", folder_id(0), "Corporis accusamus placeat quas non voluptas.").await,
        seed_note(pool, "Cats", folder_id(1), "Eos laudantium quia ab blanditiis temporibus.").await,
        seed_note(pool, "Pigs", folder_id(2), "Occaecati dignissimos quam qui facere deserunt.").await,
        seed_note(pool, "Birds", folder_id(0), "Eum culpa odit. Veniam porro molestiae.").await,
    ]
}

/// A note carrying script and event-handler markup, plus the sanitized form
/// clients must receive.
pub fn malicious_note(folder_id: i64) -> (Value, Value) {
    let raw = json!({
        "name": r#"Naughty naughty very naughty <script>alert("xss");</script>"#,
        "folder_id": folder_id,
        "content": r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">. But not <strong>all</strong> bad."#,
    });
    let expected = json!({
        "name": r#"Naughty naughty very naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#,
        "folder_id": folder_id,
        "content": r#"Bad image <img src="https://url.to.file.which/does-not.exist">. But not <strong>all</strong> bad."#,
    });
    (raw, expected)
}
