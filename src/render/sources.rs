use std::fmt::Write;

use super::escape_html;
use crate::models::Source;

const EXTERNAL_LINK_ICON: &str = r#"<svg class="external-link-icon" width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path><polyline points="15,3 21,3 21,9"></polyline><line x1="10" y1="14" x2="21" y2="3"></line></svg>"#;

/// Collapsible, numbered source list. Empty input renders nothing.
pub fn render_sources(sources: &[Source]) -> String {
    if sources.is_empty() {
        return String::new();
    }

    let mut items = String::new();
    for (index, source) in sources.iter().enumerate() {
        let number = index + 1;
        let label = escape_html(source.label());
        // Writing into a String cannot fail.
        let _ = match source.link() {
            Some(link) => write!(
                items,
                r#"<li class="source-item"><span class="source-number">{number}.</span><a href="{href}" target="_blank" rel="noopener noreferrer" class="source-link">{label}{EXTERNAL_LINK_ICON}</a></li>"#,
                href = escape_html(link),
            ),
            None => write!(
                items,
                r#"<li class="source-item"><span class="source-number">{number}.</span><span class="source-text">{label}</span></li>"#,
            ),
        };
    }

    format!(
        r#"<details class="sources-collapsible"><summary class="sources-header"><span class="sources-title">Sources</span><span class="sources-count">({count})</span></summary><div class="sources-content"><ul class="sources-list">{items}</ul></div></details>"#,
        count = sources.len(),
    )
}
