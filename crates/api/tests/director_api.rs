//! HTTP-level integration tests for the `/directors` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, delete, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_director_then_get_round_trips(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/directors/", serde_json::json!({"name": "Nolan"})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, "/directors/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"id": 1, "name": "Nolan"}));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_directors_returns_all(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/directors/", serde_json::json!({"name": "Nolan"})).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/directors/", serde_json::json!({"name": "Villeneuve"})).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/directors/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let directors = json.as_array().unwrap();
    assert_eq!(directors.len(), 2);
    assert_eq!(directors[0]["name"], "Nolan");
    assert_eq!(directors[1]["name"], "Villeneuve");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_director_with_empty_payload_persists_null_name(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/directors/", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/directors/1").await).await;
    assert_eq!(json["id"], 1);
    assert!(json["name"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_director_rejects_unknown_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/directors/",
        serde_json::json!({"name": "Nolan", "oscar_count": 1}),
    )
    .await;
    assert!(response.status().is_client_error());

    // Nothing was inserted.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/directors/").await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_director_returns_null_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/directors/999").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json.is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_director_reflects_new_name(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/directors/", serde_json::json!({"name": "Nolan"})).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/directors/1",
        serde_json::json!({"name": "Christopher Nolan"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/directors/1").await).await;
    assert_eq!(json["name"], "Christopher Nolan");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_director_returns_404_with_text(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/directors/999", serde_json::json!({"name": "X"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let text = body_text(response).await;
    assert_eq!(text, "Director with id 999 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_director_then_get_returns_null(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/directors/", serde_json::json!({"name": "Nolan"})).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/directors/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/directors/1").await).await;
    assert!(json.is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_missing_director_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/directors/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
