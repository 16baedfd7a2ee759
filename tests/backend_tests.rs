//! Session and API client tests against a mocked backend.
//!
//! Drives the real `reqwest` transport through wiremock to check the wire
//! format of `/token`, `/chat` and `/health` and the error normalization.

mod common;

use common::mocks::{session_for, token_for, NOW};
use sentinel_session::{
    Access, SessionError, ACCESS_TOKEN_KEY, GENERIC_FAILURE_MESSAGE, KeyValueStore, TOKEN_TYPE_KEY,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Login =============

#[tokio::test]
async fn test_login_posts_form_and_stores_token() {
    let server = MockServer::start().await;
    let token = token_for("admin@example.com", NOW + 1800);

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("username=admin%40example.com&password=hunter2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": token, "token_type": "bearer" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server.uri());
    session
        .ctx
        .login("admin@example.com", "hunter2")
        .await
        .expect("login should succeed");

    assert_eq!(session.store.get(ACCESS_TOKEN_KEY).unwrap(), Some(token));
    assert_eq!(session.store.get(TOKEN_TYPE_KEY).unwrap().as_deref(), Some("bearer"));
    assert_eq!(session.ctx.guard().enforce(), Access::Allow);
}

#[tokio::test]
async fn test_login_rejected_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "incorrect username or password" })),
        )
        .mount(&server)
        .await;

    let session = session_for(&server.uri());
    let err = session.ctx.login("admin@example.com", "wrong").await.unwrap_err();

    assert_eq!(err, SessionError::CredentialsRejected);
    assert!(session.store.is_empty());
}

// ============= Chat =============

#[tokio::test]
async fn test_chat_sends_authorization_header() {
    let server = MockServer::start().await;
    let token = token_for("admin@example.com", NOW + 60);

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("authorization", format!("bearer {}", token).as_str()))
        .and(body_json(json!({ "message": "hi" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "Hello from the Sentinel" })))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_for(&server.uri());
    session.ctx.tokens().save(&token, "bearer").unwrap();

    let reply = session.ctx.api().chat("hi").await.expect("chat should succeed");
    assert_eq!(reply.reply, "Hello from the Sentinel");
}

#[tokio::test]
async fn test_chat_without_credential_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "unreachable" })))
        .expect(0)
        .mount(&server)
        .await;

    let session = session_for(&server.uri());
    let err = session.ctx.api().chat("hi").await.unwrap_err();

    assert_eq!(err, SessionError::Unauthenticated);
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_chat_503_surfaces_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "detail": "overloaded" })))
        .mount(&server)
        .await;

    let session = session_for(&server.uri());
    session.ctx.tokens().save("a.b.c", "bearer").unwrap();

    let err = session.ctx.api().chat("hi").await.unwrap_err();
    assert_eq!(err.to_string(), "overloaded");
}

#[tokio::test]
async fn test_chat_503_non_json_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream connect error"))
        .mount(&server)
        .await;

    let session = session_for(&server.uri());
    session.ctx.tokens().save("a.b.c", "bearer").unwrap();

    let err = session.ctx.api().chat("hi").await.unwrap_err();
    assert_eq!(err, SessionError::RequestFailed(GENERIC_FAILURE_MESSAGE.to_string()));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on port 1.
    let session = session_for("http://127.0.0.1:1");
    session.ctx.tokens().save("a.b.c", "bearer").unwrap();

    let err = session.ctx.api().chat("hi").await.unwrap_err();
    assert!(matches!(err, SessionError::Network(_)), "got {:?}", err);
}

// ============= Guard =============

#[tokio::test]
async fn test_expired_token_is_cleared_on_enforce() {
    let server = MockServer::start().await;
    let session = session_for(&server.uri());
    session
        .ctx
        .tokens()
        .save(&token_for("admin@example.com", NOW - 1), "bearer")
        .unwrap();

    assert!(!session.ctx.guard().has_valid_session());
    assert_eq!(session.ctx.guard().enforce(), Access::Deny);
    assert!(session.store.is_empty());
    assert_eq!(session.navigator.redirects(), vec!["/login".to_string()]);
}

// ============= Health =============

#[tokio::test]
async fn test_health_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let session = session_for(&server.uri());
    let health = session.ctx.api().health().await.expect("health should succeed");
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_health_failure_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let session = session_for(&server.uri());
    let err = session.ctx.api().health().await.unwrap_err();
    assert_eq!(err.to_string(), "Health check failed");
}
