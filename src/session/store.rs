use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use super::transcript::{Snapshot, Transcript};

/// One history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Backend-issued id; `None` before the first successful answer.
    pub id: Option<String>,
    pub content: Snapshot,
    pub timestamp: DateTime<Utc>,
    pub title: String,
}

impl Session {
    fn capture(id: Option<String>, transcript: &Transcript) -> Self {
        Self {
            id,
            content: transcript.snapshot(),
            timestamp: Utc::now(),
            title: transcript.title(),
        }
    }

    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Ordered session history plus the conversation on screen.
///
/// `current_index` is either `None` or a valid index into `sessions` after
/// every operation.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Vec<Session>,
    current_index: Option<usize>,
    current_id: Option<String>,
    transcript: Transcript,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    /// Saves the open conversation in place (when it has an id and content)
    /// and starts an empty one.
    ///
    /// Only the id is reset: the previous entry stays current until the new
    /// conversation is committed or another entry is selected.
    pub fn create_session(&mut self) {
        if self.current_id.is_some() && !self.transcript.is_empty() {
            self.save_current();
        }
        self.current_id = None;
        self.transcript.clear();
        debug!("New chat session started");
    }

    /// Replaces the id sent with the next query without touching the history.
    pub fn adopt_id(&mut self, id: Option<String>) {
        self.current_id = id;
    }

    /// Appends a snapshot of the visible conversation and makes it current.
    pub fn commit_session(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.current_id = Some(id.clone());
        self.sessions.push(Session::capture(Some(id), &self.transcript));
        self.current_index = Some(self.sessions.len() - 1);
        debug!(sessions = self.sessions.len(), "Session committed to history");
    }

    /// Returns false (and does nothing) when `index` is out of range.
    pub fn switch_to(&mut self, index: usize) -> bool {
        if index >= self.sessions.len() {
            return false;
        }
        if self.current_id.is_some() && !self.transcript.is_empty() {
            self.save_current();
        }

        let target = &self.sessions[index];
        self.current_index = Some(index);
        self.current_id = target.id.clone();
        self.transcript.restore(&target.content);
        debug!(index, "Switched session");
        true
    }

    /// Returns false (and does nothing) when `index` is out of range.
    pub fn delete(&mut self, index: usize) -> bool {
        if index >= self.sessions.len() {
            return false;
        }

        match self.current_index {
            Some(current) if current == index => {
                self.transcript.clear();
                self.current_id = None;
                self.current_index = None;
            }
            Some(current) if index < current => {
                self.current_index = Some(current - 1);
            }
            _ => {}
        }

        self.sessions.remove(index);
        debug!(index, "Session deleted");
        true
    }

    /// Overwrites the record at the current index with the visible conversation.
    fn save_current(&mut self) {
        let Some(index) = self.current_index else {
            return;
        };
        if let Some(slot) = self.sessions.get_mut(index) {
            *slot = Session::capture(self.current_id.clone(), &self.transcript);
        }
    }
}
