//! Client configuration, fixed once at startup.
//!
//! Values are compiled in by `build.rs` (from `.env` or the build environment)
//! because the browser has no process environment to read at runtime.

use std::time::Duration;

use crate::errors::ChatError;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const API_BASE_KEY: &str = "COURSE_CHAT_API_BASE";
const TIMEOUT_KEY: &str = "COURSE_CHAT_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Path prefix of the backend, without trailing slash.
    pub api_base: String,
    /// `None` waits for the backend forever.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl ClientConfig {
    /// Reads the values baked in at compile time.
    pub fn from_build_env() -> Result<Self, ChatError> {
        Self::from_values(option_env!("COURSE_CHAT_API_BASE"), option_env!("COURSE_CHAT_TIMEOUT_SECS"))
    }

    pub fn from_values(api_base: Option<&str>, timeout_secs: Option<&str>) -> Result<Self, ChatError> {
        let mut config = Self::default();

        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            let base = base.trim_end_matches('/');
            if base.chars().any(char::is_whitespace) {
                return Err(ChatError::InvalidConfig { key: API_BASE_KEY, value: base.to_string() });
            }
            config.api_base = base.to_string();
        }

        if let Some(raw) = timeout_secs.map(str::trim).filter(|t| !t.is_empty()) {
            let secs: u64 = raw
                .parse()
                .map_err(|_| ChatError::InvalidConfig { key: TIMEOUT_KEY, value: raw.to_string() })?;
            // 0 disables the timeout
            config.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn query_url(&self) -> String {
        format!("{}/query", self.api_base)
    }

    pub fn courses_url(&self) -> String {
        format!("{}/courses", self.api_base)
    }
}
