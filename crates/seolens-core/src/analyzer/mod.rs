//! Heuristic scoring over extracted signals
//!
//! Everything in here is pure and deterministic: no I/O, no clock, no
//! randomness. The recommendation client feeds these results to the model
//! and falls back on them when the model is unusable.

pub mod content;
pub mod examples;
pub mod headings;
pub mod meta;

pub use content::{ContentContext, ContentType, DEFAULT_MAX_LENGTH, analyze_content_context};
pub use examples::{ElementType, EXAMPLE_COUNT, generate_contextual_examples};
pub use headings::{HeadingAnalysis, analyze_heading_structure};
pub use meta::{FieldAssessment, FieldStatus, MetaAnalysis, UrlStructure, analyze_meta_quality};

use crate::types::SignalSet;

/// All heuristic results for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInsights {
    pub context: ContentContext,
    pub headings: HeadingAnalysis,
    pub meta: MetaAnalysis,
    pub title_examples: Vec<String>,
    pub description_examples: Vec<String>,
    pub h1_examples: Vec<String>,
}

impl PageInsights {
    pub fn from_signals(signals: &SignalSet) -> Self {
        let context = analyze_content_context(&signals.content.text, DEFAULT_MAX_LENGTH);
        let headings = analyze_heading_structure(&signals.headings);
        let meta = analyze_meta_quality(
            signals.title.content.as_deref(),
            signals.meta_description.as_deref(),
            &signals.url,
        );

        let title_examples = generate_contextual_examples(
            &context,
            ElementType::Title,
            signals.title.content.as_deref(),
        );
        let description_examples = generate_contextual_examples(
            &context,
            ElementType::MetaDescription,
            signals.meta_description.as_deref(),
        );
        let h1_examples = generate_contextual_examples(
            &context,
            ElementType::H1,
            signals.headings.h1.first().map(String::as_str),
        );

        Self {
            context,
            headings,
            meta,
            title_examples,
            description_examples,
            h1_examples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_signals;

    #[test]
    fn insights_combine_every_heuristic() {
        let html = r#"
            <html>
            <head><title>Shop</title></head>
            <body>
                <h1>Boots</h1>
                <p>Buy boots, boots and more boots at a fair price.</p>
            </body>
            </html>
        "#;
        let signals = extract_signals(html, "https://example.com/boots");
        let insights = PageInsights::from_signals(&signals);

        assert_eq!(insights.context.content_type, ContentType::ECommerce);
        assert_eq!(insights.context.keywords[0], "boots");
        assert_eq!(insights.headings.hierarchy_score, 80);
        assert_eq!(insights.meta.title.status, FieldStatus::Poor);
        assert_eq!(insights.meta.description.status, FieldStatus::Critical);
        assert_eq!(insights.meta.url_structure.score, 100);
        assert_eq!(insights.title_examples.len(), 3);
        assert_eq!(insights.description_examples.len(), 3);
        assert_eq!(insights.h1_examples.len(), 3);
    }
}
