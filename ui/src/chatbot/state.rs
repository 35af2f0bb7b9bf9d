//! Conversation state for the chat assistant.
//!
//! The send protocol is optimistic: the user's message is appended and the
//! panel enters loading *before* the network call resolves. On failure the
//! user's message stays in place and only an inline error is added; rolling
//! the message back would be more confusing than an unanswered one.

use chrono::{DateTime, Utc};

pub use api::chat::Role;
use api::chat::{ChatResponse, StoredMessage};

/// One chat turn. User turns get a locally generated id; persisted turns
/// keep their server-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::local(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::local(Role::Assistant, content)
    }

    fn local(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

impl From<StoredMessage> for ChatMessage {
    fn from(message: StoredMessage) -> Self {
        Self {
            id: message.id,
            role: message.role,
            content: message.content,
            timestamp: message.created_at,
        }
    }
}

/// The chat panel's state machine.
///
/// Messages are only ever appended, in the order the transitions run; the
/// panel allows a single in-flight send (the input is disabled while
/// `is_loading`), so message order matches user-perceived send order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    pub is_open: bool,
    pub messages: Vec<ChatMessage>,
    pub is_loading: bool,
    pub conversation_id: Option<String>,
    pub error: Option<String>,
}

impl ChatState {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Optimistic step: append the user's message and enter loading.
    ///
    /// Returns `false` for blank input, in which case nothing changes and
    /// no request should be issued.
    pub fn begin_send(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::user(trimmed));
        self.is_loading = true;
        self.error = None;
        true
    }

    /// Append the assistant's reply and adopt the conversation id from the
    /// response (covers the first exchange, where the backend assigns it).
    pub fn complete_send(&mut self, response: &ChatResponse) {
        self.messages.push(ChatMessage::assistant(&response.response));
        self.conversation_id = Some(response.conversation_id.clone());
        self.is_loading = false;
    }

    /// The optimistically appended user message is kept; only the error
    /// surfaces. No automatic retry.
    pub fn fail_send(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.error = Some(message.into());
    }

    /// Start a new conversation. The backend is not notified.
    pub fn clear_conversation(&mut self) {
        self.messages.clear();
        self.conversation_id = None;
        self.error = None;
    }

    pub fn begin_load(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Replace the message list wholesale with fetched history.
    pub fn complete_load(&mut self, conversation_id: String, messages: Vec<ChatMessage>) {
        self.messages = messages;
        self.conversation_id = Some(conversation_id);
        self.is_loading = false;
    }

    /// Prior messages are left untouched on a failed history load.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(conversation_id: &str, text: &str) -> ChatResponse {
        serde_json::from_value(serde_json::json!({
            "conversation_id": conversation_id,
            "response": text,
        }))
        .unwrap()
    }

    #[test]
    fn test_blank_input_is_rejected_without_state_change() {
        let mut state = ChatState::default();
        assert!(!state.begin_send(""));
        assert!(!state.begin_send("   \n\t"));
        assert_eq!(state, ChatState::default());
    }

    #[test]
    fn test_begin_send_appends_trimmed_user_message_and_enters_loading() {
        let mut state = ChatState {
            error: Some("old error".to_string()),
            ..ChatState::default()
        };
        assert!(state.begin_send("  Add buy milk  "));

        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].role, Role::User);
        assert_eq!(state.messages[0].content, "Add buy milk");
        assert!(state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_first_exchange_adopts_assigned_conversation_id() {
        let mut state = ChatState::default();
        assert!(state.conversation_id.is_none());

        state.begin_send("Add buy milk");
        state.complete_send(&response("c1", "Added!"));

        assert_eq!(state.conversation_id.as_deref(), Some("c1"));
        assert!(!state.is_loading);
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].role, Role::User);
        assert_eq!(state.messages[0].content, "Add buy milk");
        assert_eq!(state.messages[1].role, Role::Assistant);
        assert_eq!(state.messages[1].content, "Added!");
    }

    #[test]
    fn test_failed_send_keeps_user_message_and_sets_error() {
        let mut state = ChatState::default();
        state.begin_send("Add buy milk");
        state.fail_send("Request failed: connection refused");

        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].role, Role::User);
        assert!(!state.is_loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Request failed: connection refused")
        );
    }

    #[test]
    fn test_sequential_sends_preserve_order() {
        let mut state = ChatState::default();
        state.begin_send("first");
        state.complete_send(&response("c1", "reply one"));
        state.begin_send("second");
        state.complete_send(&response("c1", "reply two"));

        let contents: Vec<&str> = state.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "reply one", "second", "reply two"]);
    }

    #[test]
    fn test_clear_conversation_resets_thread_but_not_panel() {
        let mut state = ChatState::default();
        state.open();
        state.begin_send("hello");
        state.complete_send(&response("c1", "hi"));
        state.fail_send("boom");

        state.clear_conversation();

        assert!(state.messages.is_empty());
        assert!(state.conversation_id.is_none());
        assert!(state.error.is_none());
        assert!(state.is_open);
    }

    #[test]
    fn test_failed_load_leaves_prior_messages_untouched() {
        let mut state = ChatState::default();
        state.begin_send("hello");
        state.complete_send(&response("c1", "hi"));

        state.begin_load();
        state.fail_load("Failed to load conversation");

        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.conversation_id.as_deref(), Some("c1"));
        assert!(!state.is_loading);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_complete_load_replaces_messages_wholesale() {
        let mut state = ChatState::default();
        state.begin_send("scratch");

        let history = vec![ChatMessage::user("older"), ChatMessage::assistant("reply")];
        state.complete_load("c9".to_string(), history);

        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].content, "older");
        assert_eq!(state.conversation_id.as_deref(), Some("c9"));
    }
}
