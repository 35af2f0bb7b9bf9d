//! Chat endpoint wrappers against a mocked backend.

use api::chat::{self, Role};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::test_client;

#[tokio::test]
async fn test_first_send_omits_conversation_id() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(serde_json::json!({"message": "Add buy milk"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"conversation_id": "c1", "response": "Added!"}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let response = chat::send_chat_message(&client, "Add buy milk", None)
        .await
        .unwrap();
    assert_eq!(response.conversation_id, "c1");
    assert_eq!(response.response, "Added!");
}

#[tokio::test]
async fn test_followup_send_carries_conversation_id() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(
            serde_json::json!({"message": "and eggs", "conversation_id": "c1"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"conversation_id": "c1", "response": "Done"}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    chat::send_chat_message(&client, "and eggs", Some("c1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_conversation_messages_parse_roles_and_order() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/chat/conversations/c1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "messages": [
                {"id": "m1", "conversation_id": "c1", "role": "user",
                 "content": "Add buy milk", "created_at": "2025-01-01T00:00:00Z"},
                {"id": "m2", "conversation_id": "c1", "role": "assistant",
                 "content": "Added!", "created_at": "2025-01-01T00:00:01Z"}
            ]
        })))
        .mount(&server)
        .await;

    let messages = chat::conversation_messages(&client, "c1").await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[1].role, Role::Assistant);
    assert_eq!(messages[1].content, "Added!");
}

#[tokio::test]
async fn test_list_conversations_sends_paging_params() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/chat/conversations"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "conversations": [
                {"id": "c1", "user_id": "u1", "title": null,
                 "created_at": "2025-01-01T00:00:00Z",
                 "updated_at": "2025-01-01T00:00:00Z"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let conversations = chat::list_conversations(&client, 10, 20).await.unwrap();
    assert_eq!(conversations.len(), 1);
    assert!(conversations[0].title.is_none());
}
