//! Pure rendering: structured chat data in, markup strings out.
//!
//! Nothing here touches the page. The frontend applies the returned markup,
//! and the same strings are what a session snapshot stores.

mod sidebar;
mod sources;

use pulldown_cmark::{html, Options, Parser};

use crate::models::{Message, Role};
use crate::session::BlockId;

pub use sidebar::{sidebar, SidebarEntry};
pub use sources::render_sources;

pub const WELCOME_TEXT: &str = "Welcome to the Course Materials Assistant! I can help you with questions about courses, lessons and specific content. What would you like to know?";

const LOADING_MARKUP: &str = r#"<div class="message assistant"><div class="message-content"><div class="loading"><span></span><span></span><span></span></div></div></div>"#;

/// Turns messages into markup. User text is escaped; assistant text is markdown.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    options: Options,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { options: Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH }
    }
}

impl Renderer {
    pub fn markdown(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, self.options);
        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }

    pub fn render_message(&self, id: BlockId, message: &Message) -> String {
        let body = match message.role {
            Role::User => escape_html(&message.text),
            Role::Assistant => self.markdown(&message.text),
        };
        let welcome = if message.is_welcome { " welcome-message" } else { "" };

        format!(
            r#"<div class="message {role}{welcome}" id="message-{id}"><div class="message-content">{body}</div>{sources}</div>"#,
            role = message.role,
            sources = render_sources(&message.sources),
        )
    }

    pub fn loading_placeholder(&self) -> String {
        LOADING_MARKUP.to_string()
    }
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
