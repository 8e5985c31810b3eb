/// Environment variable holding the SendPost subaccount API key.
const API_KEY_VAR: &str = "SENDPOST_API_KEY";

/// Environment variable overriding the SendPost API base URL.
const API_BASE_VAR: &str = "SENDPOST_API_BASE";

/// Default SendPost API base URL.
const DEFAULT_API_BASE: &str = "https://api.sendpost.io/api/v1";

/// Runtime settings, sourced from the environment once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_key: String,
    pub api_base: String,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `SENDPOST_API_KEY` — subaccount API key used to authenticate
    ///   sends. Not required at startup: an absent key surfaces as a
    ///   provider authentication failure on the first send attempt, not
    ///   as a local error.
    /// - `SENDPOST_API_BASE` (optional) — override the API endpoint,
    ///   mainly so integration setups can point at a stub server.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_VAR).unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!(
                "{API_KEY_VAR} is not set; send-email calls will fail at the provider"
            );
        }

        let api_base =
            std::env::var(API_BASE_VAR).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Self { api_key, api_base }
    }
}
