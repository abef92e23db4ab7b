use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;

use super::stats::CoursePanel;
use crate::state::AppState;

const SUGGESTED_QUESTIONS: [(&str, &str); 4] = [
    ("Outline of a course", "What is the outline of the first course?"),
    ("Courses about chatbots", "Are there any courses that include a chatbot implementation?"),
    ("Courses explaining RAG", "Are there any courses that explain what RAG is?"),
    ("Details of a course's lesson", "What was covered in lesson 5 of the MCP course?"),
];

/// Sidebar with "New Chat", course stats, suggestions and the session history.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <NewChatButton />
            <CoursePanel />
            <SuggestedQuestions />
            <SessionHistory />
        </aside>
    }
}

#[component]
fn NewChatButton() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (confirmed, set_confirmed) = signal(false);

    let on_new = move |_| {
        state.new_chat();
        set_confirmed.set(true);
        Timeout::new(1_000, move || set_confirmed.set(false)).forget();
    };

    view! {
        <button class="new-chat-btn" id="newChatBtn" class:confirmed=confirmed on:click=on_new>
            {move || if confirmed.get() { "New Chat ✓" } else { "New Chat" }}
        </button>
    }
}

/// Clicking a suggestion submits it like typed input.
#[component]
fn SuggestedQuestions() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <details class="suggested-collapsible">
            <summary class="suggested-header">"Try asking:"</summary>
            <div class="suggested-items">
                {SUGGESTED_QUESTIONS
                    .into_iter()
                    .map(|(label, question)| {
                        let sending = state.clone();
                        let ask = state.clone();
                        view! {
                            <button
                                class="suggested-item"
                                disabled=move || sending.is_sending()
                                on:click=move |_| {
                                    ask.input.set(question.to_string());
                                    ask.send_input();
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </details>
    }
}

#[component]
fn SessionHistory() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="session-history" id="sessionHistory">
            {move || {
                let entries = state.chat.with(|c| c.sidebar());
                if entries.is_empty() {
                    return view! { <div class="no-sessions">"No previous chats"</div> }.into_any();
                }
                entries
                    .into_iter()
                    .map(|entry| {
                        let select = state.clone();
                        let delete = state.clone();
                        let index = entry.index;
                        view! {
                            <div
                                class="session-item"
                                class:active=entry.active
                                on:click=move |_| select.select_session(index)
                            >
                                <div class="session-icon">{entry.number}</div>
                                <div class="session-content">
                                    <div class="session-title">{entry.title}</div>
                                    <time class="session-timestamp" datetime=entry.timestamp_iso>{entry.timestamp_label}</time>
                                </div>
                                <button
                                    class="delete-session"
                                    title="Delete chat"
                                    on:click=move |ev: ev::MouseEvent| {
                                        ev.stop_propagation();
                                        delete.delete_session(index);
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
