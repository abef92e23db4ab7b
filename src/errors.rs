use thiserror::Error;

/// Every failure the chat client can observe.
/// The `Display` text is what ends up in the conversation after `"Error: "`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    // ── Transport errors ─────────────────────────────────────────────────────
    #[error("{0}")]
    Transport(String),

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    // ── HTTP status errors ───────────────────────────────────────────────────
    #[error("Query failed")]
    QueryStatus { status: u16 },

    #[error("Failed to load course stats")]
    StatsStatus { status: u16 },

    // ── Payload errors ───────────────────────────────────────────────────────
    #[error("Malformed response: {0}")]
    Decode(String),

    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("Invalid value '{value}' for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

impl ChatError {
    pub fn transport(message: impl Into<String>) -> Self {
        ChatError::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        ChatError::Decode(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_use_generic_messages() {
        let err = ChatError::QueryStatus { status: 500 };
        assert_eq!(err.to_string(), "Query failed");

        let err = ChatError::StatsStatus { status: 404 };
        assert_eq!(err.to_string(), "Failed to load course stats");
    }

    #[test]
    fn transport_errors_carry_raw_text() {
        let err = ChatError::transport("Failed to fetch");
        assert_eq!(err.to_string(), "Failed to fetch");
    }

    #[test]
    fn timeout_and_decode_messages() {
        let err = ChatError::Timeout { seconds: 30 };
        assert_eq!(err.to_string(), "Request timed out after 30s");
        let err = ChatError::decode("expected value at line 1 column 1");
        assert_eq!(err.to_string(), "Malformed response: expected value at line 1 column 1");
    }
}
