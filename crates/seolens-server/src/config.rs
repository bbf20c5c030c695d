//! Command-line and environment configuration

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use seolens_core::recommend::llm::{API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use seolens_core::{Analyzer, AnalyzerSettings, CompletionSettings, LlmConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Parser)]
#[command(name = "seolens-server", version, about = "Serve the seolens web form and JSON API")]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "SEOLENS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "SEOLENS_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Completion API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat model used for recommendations
    #[arg(long, env = "SEOLENS_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// OpenAI-compatible chat-completions endpoint
    #[arg(long, env = "SEOLENS_LLM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub llm_endpoint: String,

    /// Page fetch timeout in seconds
    #[arg(long, env = "SEOLENS_FETCH_TIMEOUT_SECS", default_value_t = 10)]
    pub fetch_timeout: u64,

    /// Completion call timeout in seconds
    #[arg(long, env = "SEOLENS_LLM_TIMEOUT_SECS", default_value_t = 120)]
    pub llm_timeout: u64,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn analyzer_settings(&self) -> AnalyzerSettings {
        AnalyzerSettings {
            fetch_timeout: Duration::from_secs(self.fetch_timeout),
            llm: LlmConfig {
                endpoint: self.llm_endpoint.clone(),
                api_key: self.api_key.clone(),
                timeout: Duration::from_secs(self.llm_timeout),
            },
            completion: CompletionSettings {
                model: self.model.clone(),
                ..CompletionSettings::default()
            },
        }
    }

    pub fn build_analyzer(&self) -> Result<Analyzer> {
        Ok(Analyzer::from_settings(self.analyzer_settings())?)
    }
}

/// Install the global `tracing` subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
