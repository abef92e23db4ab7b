mod api;
mod components;
mod state;

use course_chat::ClientConfig;
use leptos::mount::mount_to_body;
use leptos::prelude::*;

use api::HttpApi;
use components::chat::ChatArea;
use components::sidebar::Sidebar;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("{e}; using default client configuration");
        ClientConfig::default()
    });
    let state = AppState::provide(HttpApi::new(config));

    // Stats load independently of the chat
    state.load_stats();

    view! {
        <div class="container">
            <Sidebar />
            <ChatArea />
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
