//! Application configuration. Upstream model, mock toggle, listen address.
//!
//! Loaded once at process start; handlers never read the environment themselves.

use serde::Deserialize;

/// Ollama base address used when none is configured.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Model requested from Ollama.
pub const DEFAULT_OLLAMA_MODEL: &str = "mistral";

/// Total budget for one upstream call, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Largest accepted request body (CSV uploads), in bytes.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    /// Ollama base URL. Read from OLLAMA_URL or NAME_HANDLER_OLLAMA_URL.
    #[serde(default)]
    pub ollama_url: Option<String>,

    /// Model name. Read from NAME_HANDLER_OLLAMA_MODEL.
    #[serde(default)]
    pub ollama_model: Option<String>,

    /// Use the local rule-based classifier instead of Ollama. Read from MOCK_LLM
    /// (`1`/`true`/`yes`, any case) or NAME_HANDLER_MOCK_LLM.
    #[serde(default)]
    pub mock_llm: Option<bool>,

    /// Upstream call timeout in seconds. Read from NAME_HANDLER_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Listen address. Read from NAME_HANDLER_BIND_ADDR.
    #[serde(default)]
    pub bind_addr: Option<String>,

    /// Request body limit in bytes. Read from NAME_HANDLER_MAX_UPLOAD_BYTES.
    #[serde(default)]
    pub max_upload_bytes: Option<usize>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("NAME_HANDLER"));
        if let Ok(path) = std::env::var("NAME_HANDLER_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // OLLAMA_URL and MOCK_LLM are read unprefixed so existing .env files keep working
        if let Ok(url) = std::env::var("OLLAMA_URL") {
            cfg.ollama_url = Some(url);
        }
        if let Ok(s) = std::env::var("MOCK_LLM") {
            cfg.mock_llm = Some(parse_flag(&s));
        }
        Ok(cfg)
    }

    /// Returns the Ollama base URL. Defaults to http://localhost:11434.
    pub fn ollama_url_or_default(&self) -> String {
        self.ollama_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string())
    }

    /// Returns the model name. Defaults to "mistral".
    pub fn ollama_model_or_default(&self) -> String {
        self.ollama_model
            .clone()
            .unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string())
    }

    /// Returns true if the mock classifier should be used. Defaults to false.
    pub fn mock_mode(&self) -> bool {
        self.mock_llm.unwrap_or(false)
    }

    /// Returns the upstream timeout in seconds. Defaults to 30.
    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    /// Returns the listen address. Defaults to 0.0.0.0:8000.
    pub fn bind_addr_or_default(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    /// Returns the request body limit. Defaults to 25 MiB.
    pub fn max_upload_bytes_or_default(&self) -> usize {
        self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

/// Boolean-like env value: `1`, `true` or `yes`, case-insensitive. Anything else is false.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
