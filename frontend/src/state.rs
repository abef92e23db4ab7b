use course_chat::{ChatController, ChatApi, StatsPanel};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;

/// Shared application state, provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    /// Session history, visible conversation and turn state.
    pub chat: RwSignal<ChatController>,
    pub stats: RwSignal<StatsPanel>,
    /// Text in the chat input.
    pub input: RwSignal<String>,
    pub input_ref: NodeRef<html::Input>,
    api: HttpApi,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide(api: HttpApi) -> Self {
        let state = Self {
            chat: RwSignal::new(ChatController::default()),
            stats: RwSignal::new(StatsPanel::Loading),
            input: RwSignal::new(String::new()),
            input_ref: NodeRef::new(),
            api,
        };

        provide_context(state.clone());
        state
    }

    /// Load course statistics from the backend.
    pub fn load_stats(&self) {
        let state = self.clone();
        spawn_local(async move {
            log::debug!("Loading course stats...");
            let panel = StatsPanel::load(&state.api).await;
            state.stats.set(panel);
        });
    }

    pub fn is_sending(&self) -> bool {
        self.chat.with(|c| c.is_sending())
    }

    /// Submit whatever is in the input box.
    pub fn send_input(&self) {
        let text = self.input.get_untracked();
        self.send_message(text);
    }

    /// Run one query turn. Blank input and submits during a turn are ignored.
    pub fn send_message(&self, text: String) {
        let mut request = None;
        self.chat.update(|c| request = c.begin_turn(&text));
        let Some(request) = request else {
            return;
        };
        self.input.set(String::new());

        let state = self.clone();
        spawn_local(async move {
            let result = state.api.query(&request).await;
            if let Err(e) = &result {
                log::error!("Query failed: {e}");
            }
            state.chat.update(|c| {
                c.finish_turn(result);
            });
            state.focus_input();
        });
    }

    pub fn new_chat(&self) {
        self.chat.update(|c| c.new_session());
        self.focus_input();
        log::info!("New chat session started");
    }

    pub fn select_session(&self, index: usize) {
        self.chat.update(|c| {
            c.switch_to(index);
        });
    }

    pub fn delete_session(&self, index: usize) {
        self.chat.update(|c| {
            if c.delete_session(index) {
                log::info!("Session deleted: {index}");
            }
        });
    }

    fn focus_input(&self) {
        if let Some(input) = self.input_ref.get_untracked() {
            let _ = input.focus();
        }
    }
}
