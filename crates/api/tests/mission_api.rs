//! HTTP-level integration tests for the `/missions` endpoint and the way
//! missions appear under their scientist.

mod common;

use axum::http::StatusCode;
use common::{body_json, count_rows, get, post_json};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_mission_returns_201_with_nested_parents(pool: SqlitePool) {
    let scientist_id = common::create_scientist(&pool, "Joseph Richard", "Orbits").await;
    let planet = common::seed_planet(&pool, "Xen").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/missions",
        json!({"name": "Project Terraform", "scientist_id": scientist_id, "planet_id": planet.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Project Terraform");
    assert_eq!(json["scientist_id"], scientist_id);
    assert_eq!(json["planet_id"], planet.id);

    assert_eq!(json["scientist"]["id"], scientist_id);
    assert_eq!(json["scientist"]["name"], "Joseph Richard");
    assert!(json["scientist"].get("missions").is_none());

    assert_eq!(json["planet"]["name"], "Xen");
    assert_eq!(json["planet"]["nearest_star"], "Sol");
    assert!(json["planet"].get("missions").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_scientist_detail_includes_created_mission(pool: SqlitePool) {
    let scientist_id = common::create_scientist(&pool, "Joseph Richard", "Orbits").await;
    let planet = common::seed_planet(&pool, "Xen").await;

    let created = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/missions",
            json!({"name": "Survey", "scientist_id": scientist_id, "planet_id": planet.id}),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/scientists/{scientist_id}")).await).await;

    let missions = json["missions"].as_array().unwrap();
    assert_eq!(missions.len(), 1);
    let mission = &missions[0];
    assert_eq!(mission["id"], created["id"]);
    assert_eq!(mission["name"], "Survey");
    assert_eq!(mission["planet"]["id"], planet.id);
    // No cycle back to the owning scientist.
    assert!(mission.get("scientist").is_none());
    assert!(mission["planet"].get("missions").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_mission_without_planet_returns_400(pool: SqlitePool) {
    let scientist_id = common::create_scientist(&pool, "Joseph Richard", "Orbits").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/missions",
        json!({"name": "Nowhere", "scientist_id": scientist_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"errors": ["validation errors"]}));
    assert_eq!(count_rows(&pool, "missions").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_mission_with_zero_ids_returns_400(pool: SqlitePool) {
    let planet = common::seed_planet(&pool, "Xen").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/missions",
        json!({"name": "Zero", "scientist_id": 0, "planet_id": planet.id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count_rows(&pool, "missions").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_mission_with_empty_name_returns_400(pool: SqlitePool) {
    let scientist_id = common::create_scientist(&pool, "Joseph Richard", "Orbits").await;
    let planet = common::seed_planet(&pool, "Xen").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/missions",
        json!({"name": "", "scientist_id": scientist_id, "planet_id": planet.id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count_rows(&pool, "missions").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_mission_for_unknown_planet_returns_400(pool: SqlitePool) {
    let scientist_id = common::create_scientist(&pool, "Joseph Richard", "Orbits").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/missions",
        json!({"name": "Lost", "scientist_id": scientist_id, "planet_id": 777}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"errors": ["validation errors"]}));
    assert_eq!(count_rows(&pool, "missions").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_mission_with_string_id_returns_400(pool: SqlitePool) {
    let planet = common::seed_planet(&pool, "Xen").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/missions",
        json!({"name": "Typed", "scientist_id": "one", "planet_id": planet.id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_mission_from_array_body_returns_400(pool: SqlitePool) {
    let scientist_id = common::create_scientist(&pool, "Joseph Richard", "Orbits").await;
    let planet = common::seed_planet(&pool, "Xen").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/missions", json!(["Recon", scientist_id, planet.id])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"errors": ["validation errors"]}));
    assert_eq!(count_rows(&pool, "missions").await, 0);
}
