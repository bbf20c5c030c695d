//! Model-backed SEO recommendations with heuristic fallbacks
//!
//! [`RecommendationEngine::recommend`] never fails. It yields one of three
//! outcomes, tagged by [`RecommendationSource`]:
//!
//! - the model's own recommendations, when its reply decodes (entries that
//!   do not match the schema are dropped individually);
//! - two heuristic recommendations (title and description), when the reply
//!   does not match the expected JSON shape;
//! - a single "API Error" entry, when the completion call itself fails.

pub mod llm;
pub mod parse;
pub mod prompt;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analyzer::{EXAMPLE_COUNT, PageInsights};
use crate::business::BusinessContext;
use crate::types::SignalSet;

pub use llm::{
    ChatMessage, CompletionClient, CompletionRequest, GroqClient, LlmConfig, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};

/// Upper bound on recommendations kept from a model reply.
pub const MAX_RECOMMENDATIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[serde(alias = "Critical", alias = "CRITICAL")]
    Critical,
    #[serde(alias = "High", alias = "HIGH")]
    High,
    #[serde(alias = "Medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "Low", alias = "LOW")]
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// SEO element the advice is about, e.g. "Title Tag"
    pub parameter: String,
    pub issue: String,
    pub recommendation: String,
    #[serde(default)]
    pub examples: Vec<String>,
    pub priority: Priority,
}

/// Heuristic scores sent back alongside the recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSummary {
    pub content_type: String,
    pub keywords: Vec<String>,
    pub heading_score: u8,
    pub title_score: u8,
    pub description_score: u8,
}

impl ContextSummary {
    fn from_insights(insights: &PageInsights) -> Self {
        Self {
            content_type: insights.context.content_type.to_string(),
            keywords: insights.context.keywords.iter().take(5).cloned().collect(),
            heading_score: insights.headings.hierarchy_score,
            title_score: insights.meta.title.score,
            description_score: insights.meta.description.score,
        }
    }

    fn unknown() -> Self {
        Self {
            content_type: "unknown".to_string(),
            keywords: Vec::new(),
            heading_score: 0,
            title_score: 0,
            description_score: 0,
        }
    }
}

/// Where a report's recommendations came from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecommendationSource {
    #[default]
    Model,
    /// The model answered but its reply could not be decoded
    HeuristicFallback { reason: String },
    /// The completion call failed
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub recommendations: Vec<Recommendation>,
    pub fastmcp_context: ContextSummary,
    #[serde(skip)]
    pub source: RecommendationSource,
}

/// Model parameters for each completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Turns page signals into a [`RecommendationReport`].
#[derive(Clone)]
pub struct RecommendationEngine {
    client: Arc<dyn CompletionClient>,
    settings: CompletionSettings,
}

impl fmt::Debug for RecommendationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationEngine")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl RecommendationEngine {
    pub fn new(client: Arc<dyn CompletionClient>, settings: CompletionSettings) -> Self {
        Self { client, settings }
    }

    pub async fn recommend(
        &self,
        signals: &SignalSet,
        business: Option<&BusinessContext>,
    ) -> RecommendationReport {
        let insights = PageInsights::from_signals(signals);
        let request = CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage::system(prompt::build_system_message(&insights)),
                ChatMessage::user(prompt::build_prompt(signals, &insights, business)),
            ],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        let reply = match self.client.complete(&request).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(url = %signals.url, error = %err, "completion call failed");
                return error_report(err.to_string());
            }
        };

        match parse::decode_recommendations(&reply) {
            Ok(recommendations) => {
                let recommendations = normalize(recommendations, &insights);
                info!(
                    url = %signals.url,
                    count = recommendations.len(),
                    "model recommendations decoded"
                );
                RecommendationReport {
                    recommendations,
                    fastmcp_context: ContextSummary::from_insights(&insights),
                    source: RecommendationSource::Model,
                }
            }
            Err(err) => {
                warn!(url = %signals.url, error = %err, "model reply did not decode, using heuristics");
                fallback_report(&insights, err.to_string())
            }
        }
    }
}

/// Cap the list and make sure every entry carries enough examples.
fn normalize(
    mut recommendations: Vec<Recommendation>,
    insights: &PageInsights,
) -> Vec<Recommendation> {
    recommendations.truncate(MAX_RECOMMENDATIONS);
    let filler = format!(
        "Professional solution for {}",
        insights
            .context
            .keywords
            .first()
            .map(String::as_str)
            .unwrap_or("your business")
    );
    for recommendation in &mut recommendations {
        while recommendation.examples.len() < EXAMPLE_COUNT {
            recommendation.examples.push(filler.clone());
        }
    }
    recommendations
}

/// Title and description advice built from the heuristics alone.
pub fn fallback_report(insights: &PageInsights, reason: String) -> RecommendationReport {
    let content_type = insights.context.content_type;
    let focus = insights
        .context
        .keywords
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let recommendations = vec![
        Recommendation {
            parameter: "Title Tag".to_string(),
            issue: format!(
                "Based on content analysis, your title needs improvement. Current score: {}/100",
                insights.meta.title.score
            ),
            recommendation: format!(
                "Create a compelling title for your {content_type} website focusing on: {focus}"
            ),
            examples: insights.title_examples.clone(),
            priority: Priority::High,
        },
        Recommendation {
            parameter: "Meta Description".to_string(),
            issue: format!(
                "Content analysis shows description issues. Score: {}/100",
                insights.meta.description.score
            ),
            recommendation: format!("Write an engaging description for your {content_type} site"),
            examples: insights.description_examples.clone(),
            priority: Priority::High,
        },
    ];

    RecommendationReport {
        recommendations,
        fastmcp_context: ContextSummary::from_insights(insights),
        source: RecommendationSource::HeuristicFallback { reason },
    }
}

/// Single troubleshooting entry reported when the model could not be reached.
pub fn error_report(message: String) -> RecommendationReport {
    RecommendationReport {
        recommendations: vec![Recommendation {
            parameter: "API Error".to_string(),
            issue: "Failed to generate recommendations".to_string(),
            recommendation: format!("Error: {message}. Please try again."),
            examples: vec![
                "Check your API connection".to_string(),
                "Verify the API key is configured".to_string(),
                "Try analyzing the website again".to_string(),
            ],
            priority: Priority::High,
        }],
        fastmcp_context: ContextSummary::unknown(),
        source: RecommendationSource::Failed { reason: message },
    }
}
