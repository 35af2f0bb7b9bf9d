//! Chat endpoint wrappers for the AI assistant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_id: Option<&'a str>,
}

/// One assistant turn. `conversation_id` is assigned by the backend on the
/// first exchange and must be echoed on subsequent sends.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub conversation_id: String,
    pub response: String,
    #[serde(default)]
    pub tool_calls: Vec<ToolCallInfo>,
}

/// Tool invocation details the backend reports for transparency.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallInfo {
    pub tool: String,
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub result: Value,
}

/// A persisted message from the history endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredMessage {
    pub id: String,
    pub conversation_id: String,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Conversation metadata from the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    messages: Vec<StoredMessage>,
}

#[derive(Debug, Deserialize)]
struct ConversationsResponse {
    #[serde(default)]
    conversations: Vec<ConversationSummary>,
}

/// Send one chat turn, carrying the conversation id when one is known.
pub async fn send_chat_message(
    client: &ApiClient,
    message: &str,
    conversation_id: Option<&str>,
) -> Result<ChatResponse, ApiError> {
    client
        .post(
            "/api/chat",
            &ChatRequest {
                message,
                conversation_id,
            },
        )
        .await
}

/// Fetch the full message history of a conversation.
pub async fn conversation_messages(
    client: &ApiClient,
    conversation_id: &str,
) -> Result<Vec<StoredMessage>, ApiError> {
    let response: MessagesResponse = client
        .get(&format!("/api/chat/conversations/{conversation_id}/messages"))
        .await?;
    Ok(response.messages)
}

/// Page size used when the caller has no preference.
pub const DEFAULT_CONVERSATION_LIMIT: usize = 50;

/// List the caller's conversations, newest first per the backend.
pub async fn list_conversations(
    client: &ApiClient,
    limit: usize,
    offset: usize,
) -> Result<Vec<ConversationSummary>, ApiError> {
    let response: ConversationsResponse = client
        .get(&format!("/api/chat/conversations?limit={limit}&offset={offset}"))
        .await?;
    Ok(response.conversations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_absent_conversation_id() {
        let body = serde_json::to_value(ChatRequest {
            message: "Add buy milk",
            conversation_id: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"message": "Add buy milk"}));

        let body = serde_json::to_value(ChatRequest {
            message: "and eggs",
            conversation_id: Some("c1"),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"message": "and eggs", "conversation_id": "c1"})
        );
    }

    #[test]
    fn test_response_tolerates_missing_tool_calls() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "conversation_id": "c1",
            "response": "Added!"
        }))
        .unwrap();
        assert!(response.tool_calls.is_empty());
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_value(Role::User).unwrap(), "user");
        let role: Role = serde_json::from_value(serde_json::json!("assistant")).unwrap();
        assert_eq!(role, Role::Assistant);
    }
}
