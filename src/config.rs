//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export HUBSPOT_TOKEN="pat-na1-..."
//! export OPENAI_API_KEY="sk-..."      # Optional, enables /summarize-contact
//! ```
//!
//! ## Required Variables
//!
//! - `HUBSPOT_TOKEN` - HubSpot private app access token
//!
//! ## Optional Variables
//!
//! - `HUBSPOT_BASE_URL` - CRM API origin (default: `https://api.hubapi.com`)
//! - `CRM_TIMEOUT_SECONDS` - Per-request CRM timeout (default: 10)
//! - `CRM_PAGE_LIMIT` - Max deals / engagements per kind in a briefing (default: 100, max: 100)
//! - `CRM_SEARCH_RATE` - CRM search requests started per second (default: 4, max: 10)
//! - `OPENAI_API_KEY` - Enables summaries if set and non-empty
//! - `OPENAI_BASE_URL` - LLM API origin (default: `https://api.openai.com`)
//! - `OPENAI_MODEL` - Chat model (default: `gpt-4o-mini`)
//! - `SUMMARY_TIMEOUT_SECONDS` - LLM request timeout (default: 60)
//! - `PUBLIC_BASE_URL` - Externally visible origin used in the plugin manifest
//!   (default: `http://localhost:3000`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::crm::{DEFAULT_SEARCH_RATE, HubSpotOptions};
use crate::infrastructure::summarizer::OpenAiOptions;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Origin advertised to plugin clients, without trailing slash.
    pub public_base_url: String,

    // ── CRM ─────────────────────────────────────────────────────────────────
    pub hubspot_base_url: String,
    pub hubspot_token: String,
    pub crm_timeout_seconds: u64,
    pub crm_page_limit: u32,
    pub crm_search_rate: u32,

    // ── Summaries ───────────────────────────────────────────────────────────
    /// `None` disables `/summarize-contact`.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub summary_timeout_seconds: u64,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `HUBSPOT_TOKEN` is missing.
    pub fn from_env() -> Result<Self> {
        let hubspot_token = env::var("HUBSPOT_TOKEN").context("HUBSPOT_TOKEN must be set")?;

        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            listen_addr: var_or("LISTEN", "0.0.0.0:3000"),
            log_level: var_or("RUST_LOG", "info"),
            log_format: var_or("LOG_FORMAT", "text"),
            public_base_url: var_or("PUBLIC_BASE_URL", "http://localhost:3000")
                .trim_end_matches('/')
                .to_string(),
            hubspot_base_url: var_or("HUBSPOT_BASE_URL", "https://api.hubapi.com"),
            hubspot_token,
            crm_timeout_seconds: parsed_or("CRM_TIMEOUT_SECONDS", 10),
            crm_page_limit: parsed_or("CRM_PAGE_LIMIT", 100),
            crm_search_rate: parsed_or("CRM_SEARCH_RATE", DEFAULT_SEARCH_RATE),
            openai_api_key,
            openai_base_url: var_or("OPENAI_BASE_URL", "https://api.openai.com"),
            openai_model: var_or("OPENAI_MODEL", "gpt-4o-mini"),
            summary_timeout_seconds: parsed_or("SUMMARY_TIMEOUT_SECONDS", 60),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - any base URL is not `http(s)://`
    /// - `hubspot_token` is blank
    /// - a timeout is zero or `crm_page_limit` is outside `1..=100`
    /// - `crm_search_rate` is outside `1..=10`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        for (name, value) in [
            ("HUBSPOT_BASE_URL", &self.hubspot_base_url),
            ("OPENAI_BASE_URL", &self.openai_base_url),
            ("PUBLIC_BASE_URL", &self.public_base_url),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                anyhow::bail!(
                    "{} must start with 'http://' or 'https://', got '{}'",
                    name,
                    value
                );
            }
        }

        if self.hubspot_token.trim().is_empty() {
            anyhow::bail!("HUBSPOT_TOKEN must not be empty");
        }

        if self.crm_timeout_seconds == 0 {
            anyhow::bail!("CRM_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.summary_timeout_seconds == 0 {
            anyhow::bail!("SUMMARY_TIMEOUT_SECONDS must be greater than 0");
        }

        if !(1..=100).contains(&self.crm_page_limit) {
            anyhow::bail!(
                "CRM_PAGE_LIMIT must be between 1 and 100, got {}",
                self.crm_page_limit
            );
        }

        if !(1..=10).contains(&self.crm_search_rate) {
            anyhow::bail!(
                "CRM_SEARCH_RATE must be between 1 and 10, got {}",
                self.crm_search_rate
            );
        }

        Ok(())
    }

    /// Returns whether LLM summaries are enabled.
    pub fn is_summary_enabled(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// HubSpot client settings.
    pub fn hubspot_options(&self) -> HubSpotOptions {
        HubSpotOptions {
            base_url: self.hubspot_base_url.clone(),
            token: self.hubspot_token.clone(),
            timeout: Duration::from_secs(self.crm_timeout_seconds),
            page_limit: self.crm_page_limit,
            search_rate: self.crm_search_rate,
        }
    }

    /// OpenAI client settings, if a key is configured.
    pub fn openai_options(&self) -> Option<OpenAiOptions> {
        self.openai_api_key.as_ref().map(|api_key| OpenAiOptions {
            base_url: self.openai_base_url.clone(),
            api_key: api_key.clone(),
            model: self.openai_model.clone(),
            timeout: Duration::from_secs(self.summary_timeout_seconds),
        })
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Public URL: {}", self.public_base_url);
        tracing::info!(
            "  CRM: {} (token {})",
            self.hubspot_base_url,
            mask_secret(&self.hubspot_token)
        );
        tracing::info!(
            "  CRM timeout: {}s, page limit: {}, searches/s: {}",
            self.crm_timeout_seconds,
            self.crm_page_limit,
            self.crm_search_rate
        );

        if let Some(ref key) = self.openai_api_key {
            tracing::info!(
                "  Summaries: {} via {} (key {})",
                self.openai_model,
                self.openai_base_url,
                mask_secret(key)
            );
        } else {
            tracing::info!("  Summaries: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a credential for logging, keeping only a short prefix.
///
/// - `pat-na1-1234abcd` → `pat-***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 8 {
        "***".to_string()
    } else {
        format!("{prefix}***")
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "HUBSPOT_TOKEN",
        "HUBSPOT_BASE_URL",
        "CRM_TIMEOUT_SECONDS",
        "CRM_PAGE_LIMIT",
        "CRM_SEARCH_RATE",
        "OPENAI_API_KEY",
        "OPENAI_MODEL",
        "PUBLIC_BASE_URL",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            public_base_url: "http://localhost:3000".to_string(),
            hubspot_base_url: "https://api.hubapi.com".to_string(),
            hubspot_token: "pat-na1-test".to_string(),
            crm_timeout_seconds: 10,
            crm_page_limit: 100,
            crm_search_rate: 4,
            openai_api_key: None,
            openai_base_url: "https://api.openai.com".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            summary_timeout_seconds: 60,
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("pat-na1-1234abcd"), "pat-***");
        assert_eq!(mask_secret("short"), "***");
        assert_eq!(mask_secret(""), "***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.hubspot_base_url = "ftp://api.hubapi.com".to_string();
        assert!(config.validate().is_err());
        config.hubspot_base_url = "https://api.hubapi.com".to_string();

        config.hubspot_token = "  ".to_string();
        assert!(config.validate().is_err());
        config.hubspot_token = "pat-na1-test".to_string();

        config.crm_page_limit = 0;
        assert!(config.validate().is_err());
        config.crm_page_limit = 101;
        assert!(config.validate().is_err());
        config.crm_page_limit = 100;

        config.crm_search_rate = 0;
        assert!(config.validate().is_err());
        config.crm_search_rate = 11;
        assert!(config.validate().is_err());
        config.crm_search_rate = 4;

        config.crm_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_options_follow_config() {
        let mut config = valid_config();
        let hubspot = config.hubspot_options();
        assert_eq!(hubspot.timeout, Duration::from_secs(10));
        assert_eq!(hubspot.page_limit, 100);
        assert_eq!(hubspot.search_rate, 4);

        assert!(config.openai_options().is_none());
        config.openai_api_key = Some("sk-test".to_string());
        assert_eq!(config.openai_options().unwrap().model, "gpt-4o-mini");
    }

    #[test]
    #[serial]
    fn test_from_env_requires_token() {
        clear_env();
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("HUBSPOT_TOKEN", "pat-na1-test");
            env::set_var("PUBLIC_BASE_URL", "https://brief.example.com/");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.hubspot_base_url, "https://api.hubapi.com");
        assert_eq!(config.crm_page_limit, 100);
        assert_eq!(config.crm_search_rate, DEFAULT_SEARCH_RATE);
        assert_eq!(config.public_base_url, "https://brief.example.com");
        assert!(!config.is_summary_enabled());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_openai_key_disables_summaries() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("HUBSPOT_TOKEN", "pat-na1-test");
            env::set_var("OPENAI_API_KEY", "   ");
        }

        let config = Config::from_env().unwrap();
        assert!(config.openai_api_key.is_none());

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("OPENAI_API_KEY", "sk-live");
        }
        assert!(Config::from_env().unwrap().is_summary_enabled());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparseable_numbers_fall_back_to_defaults() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("HUBSPOT_TOKEN", "pat-na1-test");
            env::set_var("CRM_TIMEOUT_SECONDS", "soon");
            env::set_var("CRM_PAGE_LIMIT", "25");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.crm_timeout_seconds, 10);
        assert_eq!(config.crm_page_limit, 25);

        clear_env();
    }
}
