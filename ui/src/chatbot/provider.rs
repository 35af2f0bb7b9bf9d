use dioxus::prelude::*;

use super::state::{ChatMessage, ChatState};

/// Get the chat state signal provided by [`ChatProvider`].
pub fn use_chat() -> Signal<ChatState> {
    use_context::<Signal<ChatState>>()
}

/// Provides the conversation state to the chat widgets below it.
#[component]
pub fn ChatProvider(children: Element) -> Element {
    let chat = use_signal(ChatState::default);
    use_context_provider(|| chat);

    rsx! {
        {children}
    }
}

/// Drive one optimistic send round trip.
///
/// The user's message appears before the request is issued; on failure it
/// stays visible and only the inline error changes.
pub async fn send_message(client: &api::ApiClient, mut chat: Signal<ChatState>, text: String) {
    if !chat.with_mut(|state| state.begin_send(&text)) {
        return;
    }
    let conversation_id = chat.read().conversation_id.clone();

    match api::chat::send_chat_message(client, text.trim(), conversation_id.as_deref()).await {
        Ok(response) => chat.with_mut(|state| state.complete_send(&response)),
        Err(err) => {
            tracing::error!("chat send failed: {err}");
            chat.with_mut(|state| state.fail_send(err.to_string()));
        }
    }
}

/// Replace the thread with the stored history of a conversation.
pub async fn load_conversation(
    client: &api::ApiClient,
    mut chat: Signal<ChatState>,
    conversation_id: String,
) {
    chat.with_mut(|state| state.begin_load());

    match api::chat::conversation_messages(client, &conversation_id).await {
        Ok(messages) => chat.with_mut(|state| {
            state.complete_load(
                conversation_id,
                messages.into_iter().map(ChatMessage::from).collect(),
            )
        }),
        Err(err) => {
            tracing::error!("failed to load conversation: {err}");
            chat.with_mut(|state| state.fail_load(err.to_string()));
        }
    }
}
