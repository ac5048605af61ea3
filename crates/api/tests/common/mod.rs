#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use cosmos_api::config::ServerConfig;
use cosmos_api::router::build_app_router;
use cosmos_api::state::AppState;
use cosmos_db::models::planet::{CreatePlanet, Planet};
use cosmos_db::repositories::PlanetRepo;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    build_app_router(AppState { pool }, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body.to_string()), Some("application/json")).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Body::from(body.to_string()), Some("application/json")).await
}

/// Send a raw body with an arbitrary (or no) content type.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Insert a planet directly; there is no HTTP endpoint for it.
pub async fn seed_planet(pool: &SqlitePool, name: &str) -> Planet {
    PlanetRepo::create(
        pool,
        &CreatePlanet {
            name: Some(name.to_string()),
            distance_from_earth: Some(1_000),
            nearest_star: Some("Sol".to_string()),
        },
    )
    .await
    .unwrap()
}

/// Create a scientist through the API and return its id.
pub async fn create_scientist(pool: &SqlitePool, name: &str, field: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/scientists",
        serde_json::json!({"name": name, "field_of_study": field}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    count
}
