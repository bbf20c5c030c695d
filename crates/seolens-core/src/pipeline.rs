//! End-to-end analysis of one URL

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::business::BusinessContext;
use crate::error::{FetchError, SetupError};
use crate::fetch::{DEFAULT_FETCH_TIMEOUT, Fetcher};
use crate::parser::extract_signals;
use crate::recommend::{
    CompletionSettings, ContextSummary, GroqClient, LlmConfig, Recommendation,
    RecommendationEngine, RecommendationSource,
};
use crate::types::SignalSet;
use crate::url_utils::normalize_target_url;

/// Everything produced for one analyzed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub seo_data: SignalSet,
    pub recommendations: Vec<Recommendation>,
    pub fastmcp_context: ContextSummary,
    #[serde(skip)]
    pub source: RecommendationSource,
}

/// Configuration for [`Analyzer::from_settings`]
#[derive(Debug, Clone)]
pub struct AnalyzerSettings {
    pub fetch_timeout: Duration,
    pub llm: LlmConfig,
    pub completion: CompletionSettings,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            llm: LlmConfig::default(),
            completion: CompletionSettings::default(),
        }
    }
}

/// Fetch, extract and recommend, in that order.
#[derive(Debug, Clone)]
pub struct Analyzer {
    fetcher: Fetcher,
    engine: RecommendationEngine,
}

impl Analyzer {
    pub fn new(fetcher: Fetcher, engine: RecommendationEngine) -> Self {
        Self { fetcher, engine }
    }

    /// Build a [`Fetcher`] and a [`GroqClient`]-backed engine.
    ///
    /// A blank API key counts as no key at all.
    pub fn from_settings(settings: AnalyzerSettings) -> Result<Self, SetupError> {
        let fetcher = Fetcher::new(settings.fetch_timeout)?;
        let mut llm = settings.llm;
        llm.api_key = llm.api_key.filter(|key| !key.trim().is_empty());
        let client = GroqClient::new(llm)?;

        Ok(Self::new(
            fetcher,
            RecommendationEngine::new(Arc::new(client), settings.completion),
        ))
    }

    /// Fetch and extract only.
    pub async fn signals(&self, url: &str) -> Result<SignalSet, FetchError> {
        let url = normalize_target_url(url);
        let html = self.fetcher.fetch(&url).await?;
        Ok(extract_signals(&html, &url))
    }

    /// Run the whole pipeline for `url`.
    ///
    /// A fetch failure ends the run before the completion API is called.
    pub async fn analyze(
        &self,
        url: &str,
        business: Option<&BusinessContext>,
    ) -> Result<AnalysisReport, FetchError> {
        let seo_data = self.signals(url).await?;
        info!(url = %seo_data.url, words = seo_data.content.word_count, "page signals extracted");

        let report = self.engine.recommend(&seo_data, business).await;
        Ok(AnalysisReport {
            seo_data,
            recommendations: report.recommendations,
            fastmcp_context: report.fastmcp_context,
            source: report.source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::recommend::{CompletionClient, CompletionRequest};
    use async_trait::async_trait;
    use httpmock::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingClient {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CompletionClient for CountingClient {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(r#"{"recommendations": [{"parameter": "Title Tag", "issue": "Short",
                "recommendation": "Lengthen", "examples": ["a", "b", "c"],
                "priority": "high"}]}"#
                .to_string())
        }
    }

    fn analyzer(client: Arc<CountingClient>) -> Analyzer {
        Analyzer::new(
            Fetcher::new(DEFAULT_FETCH_TIMEOUT).unwrap(),
            RecommendationEngine::new(client, CompletionSettings::default()),
        )
    }

    #[tokio::test]
    async fn fetch_failure_skips_the_model() {
        let client = Arc::new(CountingClient::default());
        let result = analyzer(client.clone())
            .analyze("http://127.0.0.1:1/", None)
            .await;

        assert!(result.is_err());
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_run_combines_signals_and_recommendations() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/shop");
            then.status(200)
                .header("content-type", "text/html")
                .body("<html><head><title>Shop</title></head><body><h1>Boots</h1><p>Buy boots</p></body></html>");
        });

        let client = Arc::new(CountingClient::default());
        let report = analyzer(client.clone())
            .analyze(&server.url("/shop"), None)
            .await
            .unwrap();

        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        assert_eq!(report.source, RecommendationSource::Model);
        assert_eq!(report.seo_data.title.content.as_deref(), Some("Shop"));
        assert_eq!(report.seo_data.url, server.url("/shop"));
        assert_eq!(report.recommendations[0].parameter, "Title Tag");
        assert_eq!(report.fastmcp_context.content_type, "e-commerce");

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("seo_data").is_some());
        assert!(json.get("recommendations").is_some());
        assert!(json.get("fastmcp_context").is_some());
    }

    #[tokio::test]
    async fn settings_with_blank_key_report_missing_key() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("<html><head><title>Home</title></head></html>");
        });
        let completion = server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(500);
        });

        let analyzer = Analyzer::from_settings(AnalyzerSettings {
            llm: LlmConfig {
                endpoint: server.url("/v1/chat/completions"),
                api_key: Some("   ".to_string()),
                ..LlmConfig::default()
            },
            ..AnalyzerSettings::default()
        })
        .unwrap();

        let report = analyzer.analyze(&server.url("/"), None).await.unwrap();
        assert_eq!(
            report.source,
            RecommendationSource::Failed {
                reason: "no API key configured for the completion endpoint".to_string()
            }
        );
        completion.assert_calls(0);
    }
}
