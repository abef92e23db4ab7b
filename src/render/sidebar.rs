use chrono::Local;

use crate::session::SessionStore;

/// One row of the session history sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub index: usize,
    /// 1-based position shown in the row icon.
    pub number: usize,
    pub title: String,
    /// RFC 3339 UTC timestamp, for the `datetime` attribute.
    pub timestamp_iso: String,
    /// Local time as `YYYY-MM-DD HH:MM:SS`.
    pub timestamp_label: String,
    pub active: bool,
}

pub fn sidebar(store: &SessionStore) -> Vec<SidebarEntry> {
    store
        .sessions()
        .iter()
        .enumerate()
        .map(|(index, session)| SidebarEntry {
            index,
            number: index + 1,
            title: session.title.clone(),
            timestamp_iso: session.timestamp_iso(),
            timestamp_label: session
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            active: store.current_index() == Some(index),
        })
        .collect()
}
