use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A citation attached to an answer.
/// The backend sends either a bare string or `{ "source": ..., "link": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Source {
    Plain(String),
    Linked {
        source: String,
        #[serde(default)]
        link: Option<String>,
    },
}

impl Source {
    pub fn label(&self) -> &str {
        match self {
            Source::Plain(text) => text,
            Source::Linked { source, .. } => source,
        }
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            Source::Plain(_) => None,
            Source::Linked { link, .. } => link.as_deref().filter(|l| !l.is_empty()),
        }
    }
}

/// One chat message before rendering. Only its markup survives in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub sources: Vec<Source>,
    pub is_welcome: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into(), sources: Vec::new(), is_welcome: false }
    }

    pub fn assistant(text: impl Into<String>, sources: Vec<Source>) -> Self {
        Self { role: Role::Assistant, text: text.into(), sources, is_welcome: false }
    }

    pub fn welcome(text: impl Into<String>) -> Self {
        Self { role: Role::Assistant, text: text.into(), sources: Vec::new(), is_welcome: true }
    }
}

/// Request body for `POST {base}/query`. `session_id: null` asks for a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub query: String,
    pub session_id: Option<String>,
}

/// Success body of `POST {base}/query`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    /// `null` or absent when the backend did not establish a session.
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Success body of `GET {base}/courses`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseStats {
    pub total_courses: u64,
    #[serde(default)]
    pub course_titles: Vec<String>,
}
