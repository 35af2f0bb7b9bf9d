//! Floating AI chat assistant: state machine, context provider and widgets.

use dioxus::prelude::*;

mod state;
pub use state::{ChatMessage, ChatState, Role};

mod provider;
pub use provider::{load_conversation, send_message, use_chat, ChatProvider};

mod chat_button;
pub use chat_button::ChatButton;

mod panel;
pub use panel::ChatPanel;

mod message_bubble;
pub use message_bubble::MessageBubble;

mod message_input;
pub use message_input::MessageInput;

mod typing_indicator;
pub use typing_indicator::TypingIndicator;

/// The complete chat widget: floating toggle button plus slide-in panel.
/// Must be rendered under a [`ChatProvider`].
#[component]
pub fn ChatWidget() -> Element {
    rsx! {
        ChatButton {}
        ChatPanel {}
    }
}
