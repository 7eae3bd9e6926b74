//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BOT_SERVICE_URL: &str = "http://127.0.0.1:8000/api/chatbot/";
pub const DEFAULT_BOT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BOT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading host configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid {var}: {value}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("invalid BOT_SERVICE_URL: {0}")]
    InvalidServiceUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl BotTimeouts {
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

impl Default for BotTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_BOT_TIMEOUT_SECS, connect_secs: DEFAULT_BOT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub bot_service_url: String,
    pub timeouts: BotTimeouts,
}

impl HostConfig {
    /// Build host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BOT_SERVICE_URL`: chatbot endpoint requests are forwarded to
    /// - `BOT_TIMEOUT_SECS`: default 30
    /// - `BOT_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build host config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let bot_service_url = non_blank(lookup("BOT_SERVICE_URL")).unwrap_or_else(|| DEFAULT_BOT_SERVICE_URL.to_owned());
        let parsed = reqwest::Url::parse(&bot_service_url)
            .map_err(|_| ConfigError::InvalidServiceUrl(bot_service_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidServiceUrl(bot_service_url));
        }

        let timeouts = BotTimeouts {
            request_secs: parse_secs(&lookup, "BOT_TIMEOUT_SECS", DEFAULT_BOT_TIMEOUT_SECS)?,
            connect_secs: parse_secs(&lookup, "BOT_CONNECT_TIMEOUT_SECS", DEFAULT_BOT_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self { port, bot_service_url, timeouts })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_secs(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match non_blank(lookup(var)) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::InvalidTimeout { var, value: raw }),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
