//! Keyword frequency and content-type classification

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default number of characters of page text considered for analysis.
pub const DEFAULT_MAX_LENGTH: usize = 2000;

const MAX_KEYWORDS: usize = 10;
const PREVIEW_LENGTH: usize = 500;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "is", "are",
    "was", "were", "be", "been", "being",
];

/// Classification buckets, checked in this order; the first hit wins.
const CONTENT_TYPE_MARKERS: &[(ContentType, &[&str])] = &[
    (
        ContentType::ECommerce,
        &["shop", "buy", "product", "price", "cart", "checkout"],
    ),
    (
        ContentType::Blog,
        &["blog", "article", "post", "author", "published"],
    ),
    (
        ContentType::Service,
        &["service", "consulting", "solution", "contact", "about"],
    ),
    (
        ContentType::Portfolio,
        &["portfolio", "project", "work", "design"],
    ),
];

/// What kind of site a page most likely belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    #[serde(rename = "e-commerce")]
    ECommerce,
    Blog,
    Service,
    Portfolio,
    #[default]
    General,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::ECommerce => "e-commerce",
            ContentType::Blog => "blog",
            ContentType::Service => "service",
            ContentType::Portfolio => "portfolio",
            ContentType::General => "general",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Themes and type of a page derived from its visible text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentContext {
    /// Up to 10 keywords, most frequent first
    pub keywords: Vec<String>,
    pub content_type: ContentType,
    /// Characters in the cleaned, truncated text
    pub content_length: usize,
    pub word_count: usize,
    pub preview: String,
}

/// Analyze page text for keywords and content type.
///
/// Whitespace is collapsed and the text is cut to `max_length` characters
/// before anything is counted.
pub fn analyze_content_context(text: &str, max_length: usize) -> ContentContext {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let cleaned: String = collapsed.chars().take(max_length).collect();
    let lowered = cleaned.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    ContentContext {
        keywords: top_keywords(&words),
        content_type: classify(&lowered),
        content_length: cleaned.chars().count(),
        word_count: words.len(),
        preview: cleaned.chars().take(PREVIEW_LENGTH).collect(),
    }
}

fn top_keywords(words: &[&str]) -> Vec<String> {
    // (first position, count) per token keeps ranking stable on ties
    let mut frequency: HashMap<String, (usize, usize)> = HashMap::new();

    for word in words {
        let token: String = word
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect();
        if token.len() <= 3 || STOP_WORDS.contains(&token.as_str()) {
            continue;
        }
        let next_position = frequency.len();
        frequency.entry(token).or_insert((next_position, 0)).1 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = frequency
        .into_iter()
        .map(|(token, (position, count))| (token, position, count))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));

    ranked
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(token, _, _)| token)
        .collect()
}

fn classify(lowered: &str) -> ContentType {
    CONTENT_TYPE_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|marker| lowered.contains(marker)))
        .map_or(ContentType::General, |(content_type, _)| *content_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shopping_text_is_e_commerce() {
        let context = analyze_content_context("buy shoes price cart", DEFAULT_MAX_LENGTH);

        assert_eq!(context.content_type, ContentType::ECommerce);
        assert!(context.keywords.contains(&"price".to_string()));
        assert!(context.keywords.contains(&"cart".to_string()));
        assert!(context.keywords.contains(&"shoes".to_string()));
        // "buy" is only three characters long
        assert!(!context.keywords.contains(&"buy".to_string()));
    }

    #[test]
    fn keywords_rank_by_frequency_then_first_occurrence() {
        let text = "delta alpha beta alpha gamma beta alpha delta";
        let context = analyze_content_context(text, DEFAULT_MAX_LENGTH);

        // beta and delta tie at 2; delta was seen first
        assert_eq!(context.keywords, vec!["alpha", "delta", "beta", "gamma"]);
    }

    #[test]
    fn stop_words_short_tokens_and_punctuation_are_dropped() {
        let text = "The cat, WITH boots! being there... Boots? 2024 x";
        let context = analyze_content_context(text, DEFAULT_MAX_LENGTH);

        assert_eq!(context.keywords, vec!["boots", "there", "2024"]);
        assert_eq!(context.word_count, 9);
    }

    #[test]
    fn keyword_list_is_capped_at_ten() {
        let text = (0..25)
            .map(|i| format!("word{i:02}"))
            .collect::<Vec<_>>()
            .join(" ");
        let context = analyze_content_context(&text, DEFAULT_MAX_LENGTH);

        assert_eq!(context.keywords.len(), 10);
        assert_eq!(context.keywords[0], "word00");
    }

    #[test]
    fn classification_follows_precedence() {
        let blog_and_service = analyze_content_context("our blog about consulting", 2000);
        assert_eq!(blog_and_service.content_type, ContentType::Blog);

        let service = analyze_content_context("contact our team", 2000);
        assert_eq!(service.content_type, ContentType::Service);

        let portfolio = analyze_content_context("my design gallery", 2000);
        assert_eq!(portfolio.content_type, ContentType::Portfolio);

        let general = analyze_content_context("hello there friend", 2000);
        assert_eq!(general.content_type, ContentType::General);
    }

    #[test]
    fn text_is_collapsed_and_truncated() {
        let text = format!("  first\n\n second\t{}", "z".repeat(3000));
        let context = analyze_content_context(&text, 20);

        assert_eq!(context.content_length, 20);
        assert_eq!(context.preview, format!("first second {}", "z".repeat(7)));
    }

    #[test]
    fn preview_is_limited_to_500_characters() {
        let text = "abcd ".repeat(300);
        let context = analyze_content_context(&text, DEFAULT_MAX_LENGTH);

        assert_eq!(context.preview.chars().count(), 500);
        assert_eq!(context.content_length, 1499);
    }

    #[test]
    fn empty_text_yields_general_context() {
        let context = analyze_content_context("", DEFAULT_MAX_LENGTH);

        assert!(context.keywords.is_empty());
        assert_eq!(context.content_type, ContentType::General);
        assert_eq!(context.word_count, 0);
        assert_eq!(context.preview, "");
    }

    #[test]
    fn content_type_serializes_with_hyphen() {
        assert_eq!(
            serde_json::to_value(ContentType::ECommerce).unwrap(),
            "e-commerce"
        );
        assert_eq!(serde_json::to_value(ContentType::General).unwrap(), "general");
        assert_eq!(ContentType::Portfolio.to_string(), "portfolio");
    }
}
