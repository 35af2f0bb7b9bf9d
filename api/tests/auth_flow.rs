//! Sign-in/sign-up/sign-out against a mocked backend.

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{make_token, test_client};

#[tokio::test]
async fn test_sign_in_stores_returned_token() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    let token = make_token("u1", "a@b.com");

    Mock::given(method("POST"))
        .and(path("/api/auth/sign-in"))
        .and(body_json(
            serde_json::json!({"email": "a@b.com", "password": "hunter2hunter2"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"user_id": "u1", "email": "a@b.com", "token": token}),
        ))
        .mount(&server)
        .await;

    let response = api::auth::sign_in(&client, "a@b.com", "hunter2hunter2")
        .await
        .unwrap();
    assert_eq!(response.user_id, "u1");
    assert_eq!(client.session().token(), Some(token));
}

#[tokio::test]
async fn test_sign_in_failure_leaves_session_untouched() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/auth/sign-in"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"detail": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let err = api::auth::sign_in(&client, "a@b.com", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(!client.session().has_token());
}

#[tokio::test]
async fn test_sign_up_stores_returned_token() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    let token = make_token("u9", "new@b.com");

    Mock::given(method("POST"))
        .and(path("/api/auth/sign-up"))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            serde_json::json!({"user_id": "u9", "email": "new@b.com", "token": token}),
        ))
        .mount(&server)
        .await;

    api::auth::sign_up(&client, "new@b.com", "hunter2hunter2")
        .await
        .unwrap();
    assert_eq!(client.session().token(), Some(token));
}

#[tokio::test]
async fn test_sign_out_notifies_backend_and_clears_token() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    client.session().set_token(&make_token("u1", "a@b.com"));

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    api::auth::sign_out(&client).await;
    assert!(!client.session().has_token());
}

#[tokio::test]
async fn test_sign_out_swallows_server_failure() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    client.session().set_token(&make_token("u1", "a@b.com"));

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    // Never fails, and the token is cleared regardless.
    api::auth::sign_out(&client).await;
    assert!(!client.session().has_token());

    // Second sign-out is a no-op: no token, so no request either.
    api::auth::sign_out(&client).await;
    assert!(!client.session().has_token());
}
