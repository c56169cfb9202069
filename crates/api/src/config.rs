use outreach_core::prompt::{DEFAULT_COMPLETION_MODEL, DEFAULT_MAX_COMPLETION_TOKENS};

/// Server configuration loaded from environment variables.
///
/// All fields except the OpenAI API key have sensible defaults suitable
/// for local development. In production, override via environment
/// variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Chat-completion service settings.
    pub openai: OpenAiConfig,
}

/// Settings for the chat-completions collaborator.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Bearer token for the completions API.
    pub api_key: String,
    /// Base URL of the API (default: `https://api.openai.com/v1`).
    /// Overridable so tests can point at a local stub.
    pub base_url: String,
    /// Model identifier (default: `gpt-3.5-turbo`).
    pub model: String,
    /// Output-token budget per completion (default: `150`).
    pub max_tokens: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `0.0.0.0`                   |
    /// | `PORT`                 | `3000`                      |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                        |
    /// | `OPENAI_API_KEY`       | (required)                  |
    /// | `OPENAI_BASE_URL`      | `https://api.openai.com/v1` |
    /// | `OPENAI_MODEL`         | `gpt-3.5-turbo`             |
    /// | `OPENAI_MAX_TOKENS`    | `150`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let openai = OpenAiConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            openai,
        }
    }
}

impl OpenAiConfig {
    /// Load the completion service settings from environment variables.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");

        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".into());

        let model =
            std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.into());

        let max_tokens: u32 = std::env::var("OPENAI_MAX_TOKENS")
            .unwrap_or_else(|_| DEFAULT_MAX_COMPLETION_TOKENS.to_string())
            .parse()
            .expect("OPENAI_MAX_TOKENS must be a valid u32");

        Self {
            api_key,
            base_url,
            model,
            max_tokens,
        }
    }
}
