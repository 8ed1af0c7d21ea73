//! HTTP-level integration tests for hall management.
//!
//! Covers RBAC on the admin-only routes, create/update validation, and the
//! edit lock once a hall's sessions have sold tickets.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Days, Utc};
use common::{body_json, get_auth, post_json_auth, put_json_auth, ADMIN_ROLE_ID, CUSTOMER_ROLE_ID};
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn admin_token(pool: &PgPool, app: Router) -> String {
    let (_user, password) = common::create_user(pool, "the_admin", ADMIN_ROLE_ID).await;
    common::login(app, "the_admin", &password).await
}

async fn customer_token(pool: &PgPool, app: Router) -> String {
    let (_user, password) = common::create_user(pool, "the_customer", CUSTOMER_ROLE_ID).await;
    common::login(app, "the_customer", &password).await
}

fn hall_body(name: &str, seats: i32) -> serde_json::Value {
    serde_json::json!({ "name": name, "seats": seats })
}

/// A session body starting tomorrow, so the clock rules always pass.
fn session_body(hall_id: i64) -> serde_json::Value {
    let start = Utc::now().date_naive() + Days::new(1);
    let end = start + Days::new(5);
    serde_json::json!({
        "hall_id": hall_id,
        "title": "Blade Runner",
        "description": "Replicants walk among us.",
        "start_time": "10:00:00",
        "end_time": "12:00:00",
        "show_start_date": start.to_string(),
        "show_end_date": end.to_string(),
        "ticket_price": 2500,
    })
}

// ---------------------------------------------------------------------------
// Authentication and RBAC
// ---------------------------------------------------------------------------

/// Hall routes reject requests without a token.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hall_routes_require_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app.clone(), "/api/v1/halls").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing Authorization header");

    // A non-Bearer scheme is rejected before any token parsing.
    let request = Request::builder()
        .uri("/api/v1/halls")
        .header(header::AUTHORIZATION, "Token abc123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Invalid Authorization format. Expected: Bearer <token>"
    );
}

/// Customers cannot create halls.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hall_create_requires_admin_role(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = customer_token(&pool, app.clone()).await;

    let response =
        post_json_auth(app, "/api/v1/halls", hall_body("Grand", 120), &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Admin role required");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// An admin creates a hall and every authenticated user can read it back.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_creates_hall(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let response =
        post_json_auth(app.clone(), "/api/v1/halls", hall_body("Grand", 120), &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Grand");
    assert_eq!(json["data"]["seats"], 120);
    let id = json["data"]["id"].as_i64().unwrap();

    let response = get_auth(app, &format!("/api/v1/halls/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Grand");
}

/// A too-short name and a non-positive seat count are reported together.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hall_create_validates_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let response = post_json_auth(app, "/api/v1/halls", hall_body("ab", 0), &token).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["fields"]["name"][0],
        "hall name must be longer than 2 characters"
    );
    assert_eq!(json["fields"]["seats"][0], "hall must have at least one seat");
}

/// Hall names collide case-insensitively.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hall_create_rejects_duplicate_name(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let response =
        post_json_auth(app.clone(), "/api/v1/halls", hall_body("Blue", 50), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(app, "/api/v1/halls", hall_body("blue", 80), &token).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(
        json["fields"]["name"][0],
        "a hall with this name already exists"
    );
}

// ---------------------------------------------------------------------------
// List and get
// ---------------------------------------------------------------------------

/// The listing is ordered by name regardless of insert order.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hall_list_is_ordered_by_name(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    post_json_auth(app.clone(), "/api/v1/halls", hall_body("Crimson", 50), &token).await;
    post_json_auth(app.clone(), "/api/v1/halls", hall_body("Azure", 80), &token).await;

    let response = get_auth(app, "/api/v1/halls", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Azure", "Crimson"]);
}

/// A missing hall id is a 404 with the entity in the message.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hall_get_missing_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = customer_token(&pool, app.clone()).await;

    let response = get_auth(app, "/api/v1/halls/9999", &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Hall with id 9999 not found");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Update replaces both fields; keeping the same name is not a collision.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hall_update_replaces_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let response =
        post_json_auth(app.clone(), "/api/v1/halls", hall_body("Grand", 120), &token).await;
    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/halls/{id}"),
        hall_body("Grand Royal", 150),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Grand Royal");
    assert_eq!(json["data"]["seats"], 150);

    let response = put_json_auth(
        app,
        &format!("/api/v1/halls/{id}"),
        hall_body("Grand Royal", 200),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// A missing id is a 404 even when the body would also fail validation.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hall_update_missing_id_is_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = admin_token(&pool, app.clone()).await;

    let response =
        put_json_auth(app, "/api/v1/halls/9999", hall_body("x", -5), &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Once any session in the hall has sold tickets, the hall rejects edits.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hall_with_sold_tickets_is_locked(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let admin = admin_token(&pool, app.clone()).await;
    let customer = customer_token(&pool, app.clone()).await;

    let response =
        post_json_auth(app.clone(), "/api/v1/halls", hall_body("Grand", 120), &admin).await;
    let json = body_json(response).await;
    let hall_id = json["data"]["id"].as_i64().unwrap();

    let response =
        post_json_auth(app.clone(), "/api/v1/sessions", session_body(hall_id), &admin).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let session_id = json["data"]["id"].as_i64().unwrap();

    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/sessions/{session_id}/purchase"),
        serde_json::json!({ "quantity": 2 }),
        &customer,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = put_json_auth(
        app,
        &format!("/api/v1/halls/{hall_id}"),
        hall_body("Grand", 150),
        &admin,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(
        json["global"][0],
        "hall has sessions with ticket purchases and can no longer be edited"
    );
}
