//! Signal types extracted from a single page

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Every on-page SEO signal collected from one fetched document.
///
/// Built once per request by [`crate::parser::extract_signals`] and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    pub url: String,
    pub title: TitleSignal,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub headings: Headings,
    pub images: ImageStats,
    pub links: LinkStats,
    pub content: ContentSignal,
    pub open_graph: OpenGraph,
    pub twitter_card: TwitterCard,
    pub canonical: Option<String>,
    pub robots: Option<String>,
    pub structured_data: Vec<JsonValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSignal {
    pub content: Option<String>,
    /// Character count of `content`, 0 when absent
    pub length: usize,
}

/// Heading text per level, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub h4: Vec<String>,
    pub h5: Vec<String>,
    pub h6: Vec<String>,
}

impl Headings {
    /// Headings for `level` (1..=6); any other level is empty.
    pub fn level(&self, level: u8) -> &[String] {
        match level {
            1 => &self.h1,
            2 => &self.h2,
            3 => &self.h3,
            4 => &self.h4,
            5 => &self.h5,
            6 => &self.h6,
            _ => &[],
        }
    }

    pub fn level_mut(&mut self, level: u8) -> Option<&mut Vec<String>> {
        match level {
            1 => Some(&mut self.h1),
            2 => Some(&mut self.h2),
            3 => Some(&mut self.h3),
            4 => Some(&mut self.h4),
            5 => Some(&mut self.h5),
            6 => Some(&mut self.h6),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageStats {
    pub total: usize,
    pub with_alt: usize,
    pub without_alt: usize,
}

/// Anchor counts for `<a href>` elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    pub total: usize,
    pub internal: usize,
    pub external: usize,
    /// Hrefs that are neither absolute `http…` nor root-relative, e.g.
    /// `page.html`, `./page`, `#top` or `mailto:`.
    pub unclassified: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSignal {
    pub text: String,
    pub word_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraph {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterCard {
    pub card: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels_map_to_fields() {
        let mut headings = Headings::default();
        headings.level_mut(2).unwrap().push("Section".to_string());

        assert_eq!(headings.level(2), ["Section".to_string()]);
        assert!(headings.level(1).is_empty());
        assert!(headings.level(7).is_empty());
        assert!(headings.level_mut(0).is_none());
    }

    #[test]
    fn signal_set_serializes_with_expected_keys() {
        let signals = SignalSet {
            url: "https://example.com".to_string(),
            ..SignalSet::default()
        };

        let value = serde_json::to_value(&signals).unwrap();
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["title"]["length"], 0);
        assert!(value["title"]["content"].is_null());
        assert!(value["headings"]["h6"].as_array().unwrap().is_empty());
        assert_eq!(value["links"]["unclassified"], 0);
        assert!(value["open_graph"]["image"].is_null());
        assert!(value["twitter_card"]["card"].is_null());
        assert!(value["structured_data"].as_array().unwrap().is_empty());
    }
}
