//! # seolens-core
//!
//! Core library for on-page SEO analysis of a single web page.
//!
//! This library provides:
//! - Page fetching with a browser-like client
//! - Signal extraction (title, meta tags, headings, images, links, JSON-LD)
//! - Heuristic scoring of content, headings, meta tags and URL shape
//! - Model-backed recommendations with heuristic fallbacks
//!
//! ## Example
//!
//! ```no_run
//! use seolens_core::{Analyzer, AnalyzerSettings, LlmConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let analyzer = Analyzer::from_settings(AnalyzerSettings {
//!     llm: LlmConfig::from_env(),
//!     ..AnalyzerSettings::default()
//! })?;
//!
//! let report = analyzer.analyze("example.com", None).await?;
//! println!("{}", report.recommendations.len());
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod business;
pub mod error;
pub mod fetch;
pub mod parser;
pub mod pipeline;
pub mod recommend;
pub mod types;
pub mod url_utils;

// Re-export commonly used types
pub use types::{
    ContentSignal, Headings, ImageStats, LinkStats, OpenGraph, SignalSet, TitleSignal, TwitterCard,
};

pub use analyzer::PageInsights;
pub use business::{BusinessContext, BusinessContextError, BusinessContextForm};
pub use error::{FetchError, LlmError, ReplyError, SetupError};
pub use fetch::Fetcher;
pub use parser::extract_signals;
pub use pipeline::{AnalysisReport, Analyzer, AnalyzerSettings};
pub use recommend::{
    CompletionClient, CompletionSettings, ContextSummary, GroqClient, LlmConfig, Priority,
    Recommendation, RecommendationEngine, RecommendationReport, RecommendationSource,
};
pub use url_utils::normalize_target_url;
