use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::state::AppState;

/// Main chat area with the rendered conversation and the input row.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let messages_ref: NodeRef<html::Div> = NodeRef::new();

    // Keep the newest message in view
    let chat = state.chat;
    Effect::new(move |_| {
        chat.track();
        if let Some(el) = messages_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    view! {
        <main class="chat-main">
            <div class="chat-container">
                <div
                    class="chat-messages"
                    id="chatMessages"
                    node_ref=messages_ref
                    inner_html=move || chat.with(|c| c.transcript().markup())
                ></div>
                <ChatInput />
            </div>
        </main>
    }
}

/// Input box and send button. Both are disabled while a query is in flight.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let input = state.input;
    let input_ref = state.input_ref;

    let sending = {
        let state = state.clone();
        move || state.is_sending()
    };

    let on_keypress = {
        let state = state.clone();
        move |ev: ev::KeyboardEvent| {
            if ev.key() == "Enter" {
                ev.prevent_default();
                state.send_input();
            }
        }
    };

    let on_click = move |_| state.send_input();

    view! {
        <div class="chat-input-container">
            <input
                type="text"
                id="chatInput"
                placeholder="Ask about courses, lessons, or specific content..."
                node_ref=input_ref
                prop:value=input
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keypress=on_keypress
                disabled=sending.clone()
            />
            <button id="sendButton" on:click=on_click disabled=sending>
                "Send"
            </button>
        </div>
    }
}
