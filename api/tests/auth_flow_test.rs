//! End-to-end tests for the registration, verification and login flows.

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use uuid::Uuid;

use common::harness;
use pl_api::app::create_app;
use pl_infra::email::MockEmailService;

#[actix_web::test]
async fn test_full_registration_and_login_flow() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    // signup
    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({"email": "a@b.com", "password": "password1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "user created");
    let user_id = Uuid::parse_str(body["userId"].as_str().unwrap()).unwrap();

    // verify using the token from the store
    let token = harness.token_value_for(user_id).await;
    let req = test::TestRequest::get()
        .uri(&format!("/auth/verify-email?token={}", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "email verified!");

    // signin
    let req = test::TestRequest::post()
        .uri("/auth/signin")
        .set_json(json!({"email": "a@b.com", "password": "password1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "logged in");
    let bearer = body["token"].as_str().unwrap().to_string();

    // the minted token resolves back to the registered user
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
async fn test_signup_duplicate_email_is_conflict() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let payload = json!({"email": "a@b.com", "password": "password1"});
    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(payload.clone())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "the email is already used");
}

#[actix_web::test]
async fn test_signup_rejects_bad_input() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let cases = vec![
        (json!({"email": "", "password": "password1"}), "email and password are required"),
        (json!({"email": "a@b.com", "password": ""}), "email and password are required"),
        (json!({"email": "a@b.com", "password": "short"}), "password must be at least 8 characters"),
        (json!({"email": "not-an-email", "password": "password1"}), "invalid email format"),
    ];

    for (payload, expected_error) in cases {
        let req = test::TestRequest::post()
            .uri("/auth/signup")
            .set_json(payload.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{payload}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], expected_error);
    }
}

#[actix_web::test]
async fn test_signup_mailer_failure_returns_500_but_creates_account() {
    let harness = common::harness_with_mailer(MockEmailService::failing());
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({"email": "a@b.com", "password": "password1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // at-least-once semantics: the account exists, so a retry conflicts
    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({"email": "a@b.com", "password": "password1"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CONFLICT
    );
}

#[actix_web::test]
async fn test_verify_email_unknown_token_is_not_found() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/auth/verify-email?token=deadbeef")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid verification token");
}

#[actix_web::test]
async fn test_verify_email_is_at_most_once() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({"email": "a@b.com", "password": "password1"}))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let user_id = Uuid::parse_str(body["userId"].as_str().unwrap()).unwrap();
    let token = harness.token_value_for(user_id).await;

    let uri = format!("/auth/verify-email?token={}", token);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // the token was consumed; replay finds nothing
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_signin_gating() {
    let harness = harness();
    let app = test::init_service(create_app(harness.state.clone())).await;

    // unknown email
    let req = test::TestRequest::post()
        .uri("/auth/signin")
        .set_json(json!({"email": "nobody@b.com", "password": "password1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // registered but unverified, even with the correct password
    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({"email": "a@b.com", "password": "password1"}))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let user_id = Uuid::parse_str(body["userId"].as_str().unwrap()).unwrap();

    let req = test::TestRequest::post()
        .uri("/auth/signin")
        .set_json(json!({"email": "a@b.com", "password": "password1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "email not verified");

    // verified but wrong password
    let token = harness.token_value_for(user_id).await;
    let req = test::TestRequest::get()
        .uri(&format!("/auth/verify-email?token={}", token))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/auth/signin")
        .set_json(json!({"email": "a@b.com", "password": "password2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid email or password");
}
