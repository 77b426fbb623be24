//! Session guard and role gate tests.
//!
//! None of these paths reach the store, so the router runs over a lazy pool
//! and the tests pass without a database.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use torneo::auth::AccessTokenClaims;
use tower::ServiceExt;

mod common;

fn post_torneo_request(token: Option<&str>) -> Request<Body> {
    let body = serde_json::json!({
        "nombre": "Open de Otoño",
        "club": "CD Norte",
        "participantes": 16,
        "pistas": 4,
        "grupos": 4,
        "fecha": "2026-10-03"
    });

    let mut builder = Request::builder()
        .method("POST")
        .uri("/torneos")
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let (app, _) = common::create_test_app();

    let response = app.oneshot(post_torneo_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_bearer_scheme_is_unauthorized() {
    let (app, _) = common::create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/participantes")
        .header(header::AUTHORIZATION, "Basic YW5hOnNlY3JldGE=")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_forbidden() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(post_torneo_request(Some("no-es-un-token")))
        .await
        .unwrap();

    // invalid tokens answer 403, not 401
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn expired_token_is_forbidden() {
    let (app, _) = common::create_test_app();

    let now = Utc::now().timestamp();
    let claims = AccessTokenClaims {
        id: 1,
        usuario: "ana".to_string(),
        rol: "organizador".to_string(),
        exp: now - 7200,
        iat: now - 14400,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(common::TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app.oneshot(post_torneo_request(Some(token.as_str()))).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn non_organizador_role_is_forbidden() {
    let (app, auth_manager) = common::create_test_app();

    let token = auth_manager
        .issue_access_token(2, "bea", "jugador")
        .unwrap();

    let response = app.oneshot(post_torneo_request(Some(token.as_str()))).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn organizador_token_passes_both_guards() {
    let (app, auth_manager) = common::create_test_app();

    let token = auth_manager
        .issue_access_token(1, "ana", "organizador")
        .unwrap();

    // Empty body: the guards let the request through and field validation
    // answers 400 before any store round-trip.
    let request = Request::builder()
        .method("POST")
        .uri("/torneos")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn participant_creation_requires_token_too() {
    let (app, _) = common::create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/participantes")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
