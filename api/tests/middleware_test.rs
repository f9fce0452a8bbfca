//! Auth gate tests: the reject matrix and context injection.

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;
use uuid::Uuid;

use common::{expired_bearer_token, harness};
use pl_api::app::create_app;

#[actix_web::test]
async fn test_missing_authorization_header() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::get().uri("/users/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "missing authorization header");
}

#[actix_web::test]
async fn test_non_bearer_scheme_is_invalid_format() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/users/me")
        .insert_header(("Authorization", "Token xyz"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid authorization format");
}

#[actix_web::test]
async fn test_garbage_token_is_invalid() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/users/me")
        .insert_header(("Authorization", "Bearer not.a.jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid token");
}

#[actix_web::test]
async fn test_expired_token_is_invalid() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let expired = expired_bearer_token(Uuid::new_v4());
    let req = test::TestRequest::get()
        .uri("/users/me")
        .insert_header(("Authorization", format!("Bearer {}", expired)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid token");
}

#[actix_web::test]
async fn test_valid_token_reaches_the_handler() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let user_id = Uuid::new_v4();
    let bearer = harness.state.token_service.issue(user_id).unwrap();

    let req = test::TestRequest::get()
        .uri("/users/me")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["userId"], user_id.to_string());
}

#[actix_web::test]
async fn test_gate_protects_messages_routes() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::get().uri("/messages").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::post()
        .uri("/messages")
        .set_json(serde_json::json!({"message": "hello"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}
