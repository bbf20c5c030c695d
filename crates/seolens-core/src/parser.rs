//! HTML parsing into a [`SignalSet`]

use scraper::{ElementRef, Html, Selector};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::types::{
    ContentSignal, Headings, ImageStats, LinkStats, OpenGraph, SignalSet, TitleSignal, TwitterCard,
};
use crate::url_utils::normalize_origin;

/// Elements whose text never reaches the reader.
const HIDDEN_TEXT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Extract every SEO signal from `html`, fetched from `url`.
///
/// `url` is only used to tell internal links from external ones and is
/// copied verbatim into the result.
pub fn extract_signals(html: &str, url: &str) -> SignalSet {
    let document = Html::parse_document(html);

    SignalSet {
        url: url.to_string(),
        title: extract_title(&document),
        meta_description: attr_of_first(&document, "meta[name='description']", "content"),
        meta_keywords: attr_of_first(&document, "meta[name='keywords']", "content"),
        headings: extract_headings(&document),
        images: count_images(&document),
        links: classify_links(&document, url),
        content: extract_content(&document),
        open_graph: OpenGraph {
            title: attr_of_first(&document, "meta[property='og:title']", "content"),
            description: attr_of_first(&document, "meta[property='og:description']", "content"),
            image: attr_of_first(&document, "meta[property='og:image']", "content"),
            url: attr_of_first(&document, "meta[property='og:url']", "content"),
        },
        twitter_card: TwitterCard {
            card: attr_of_first(&document, "meta[name='twitter:card']", "content"),
            title: attr_of_first(&document, "meta[name='twitter:title']", "content"),
            description: attr_of_first(&document, "meta[name='twitter:description']", "content"),
            image: attr_of_first(&document, "meta[name='twitter:image']", "content"),
        },
        canonical: attr_of_first(&document, "link[rel~='canonical']", "href"),
        robots: attr_of_first(&document, "meta[name='robots']", "content"),
        structured_data: parse_structured_data(&document),
    }
}

fn json_ld_blocks(document: &Html, script_selector: &Selector) -> Vec<String> {
    document
        .select(script_selector)
        .filter_map(|element| {
            let script_type = element
                .value()
                .attr("type")
                .map(|t| t.trim().to_ascii_lowercase())
                .unwrap_or_default();

            // Use contains() to catch variations like "application/ld+json; charset=utf-8"
            if script_type.contains("ld+json") {
                let text = element.text().collect::<String>().trim().to_string();
                if text.is_empty() { None } else { Some(text) }
            } else {
                None
            }
        })
        .collect()
}

/// Decode every JSON-LD block, dropping the ones that are not valid JSON.
fn parse_structured_data(document: &Html) -> Vec<JsonValue> {
    let Ok(script_selector) = Selector::parse("script") else {
        return Vec::new();
    };

    json_ld_blocks(document, &script_selector)
        .into_iter()
        .enumerate()
        .filter_map(|(index, block)| match serde_json::from_str(&block) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(block = index, error = %err, "skipping malformed JSON-LD block");
                None
            }
        })
        .collect()
}

fn extract_title(document: &Html) -> TitleSignal {
    let content = select_all(document, "title")
        .into_iter()
        .next()
        .map(|title| title.text().collect::<String>())
        .filter(|text| !text.is_empty());

    TitleSignal {
        length: content.as_ref().map_or(0, |text| text.chars().count()),
        content,
    }
}

fn extract_headings(document: &Html) -> Headings {
    let mut headings = Headings::default();
    for level in 1..=6u8 {
        if let Some(slot) = headings.level_mut(level) {
            *slot = select_all(document, &format!("h{level}"))
                .into_iter()
                .map(|heading| heading.text().collect::<String>().trim().to_string())
                .collect();
        }
    }
    headings
}

fn count_images(document: &Html) -> ImageStats {
    let mut stats = ImageStats::default();
    for image in select_all(document, "img") {
        stats.total += 1;
        match image.value().attr("alt") {
            Some(alt) if !alt.is_empty() => stats.with_alt += 1,
            _ => stats.without_alt += 1,
        }
    }
    stats
}

/// Count anchors by where they point.
///
/// Absolute `http…` hrefs are internal when they contain the page origin,
/// root-relative hrefs are internal, everything else stays unclassified.
fn classify_links(document: &Html, page_url: &str) -> LinkStats {
    let origin = normalize_origin(page_url);
    let mut stats = LinkStats::default();

    for anchor in select_all(document, "a[href]") {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        stats.total += 1;

        if href.starts_with("http") {
            if href.contains(origin.as_str()) {
                stats.internal += 1;
            } else {
                stats.external += 1;
            }
        } else if href.starts_with('/') {
            stats.internal += 1;
        } else {
            stats.unclassified += 1;
        }
    }

    if stats.unclassified > 0 {
        debug!(
            unclassified = stats.unclassified,
            "relative links counted as neither internal nor external"
        );
    }

    stats
}

fn extract_content(document: &Html) -> ContentSignal {
    let text = select_all(document, "body")
        .into_iter()
        .next()
        .map(visible_text)
        .unwrap_or_default();

    ContentSignal {
        word_count: text.split_whitespace().count(),
        text,
    }
}

fn visible_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    for node in element.descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_TEXT_TAGS.contains(&el.name()))
        });
        if !hidden {
            text.push_str(fragment);
        }
    }
    text
}

/// Attribute of the first element matching `selector_str`.
///
/// A matching element without the attribute yields an empty string, so
/// "tag present but empty" stays distinguishable from "tag missing".
fn attr_of_first(document: &Html, selector_str: &str, attr: &str) -> Option<String> {
    select_all(document, selector_str)
        .into_iter()
        .next()
        .map(|element| element.value().attr(attr).unwrap_or_default().to_string())
}

// Helper functions
fn select_all<'a>(document: &'a Html, selector_str: &str) -> Vec<ElementRef<'a>> {
    if let Ok(selector) = Selector::parse(selector_str) {
        document.select(&selector).collect()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Handmade Leather Boots</title>
            <meta name="description" content="Boots made by hand in small batches.">
            <meta name="keywords" content="boots, leather">
            <meta name="robots" content="index, follow">
            <meta property="og:title" content="OG Boots">
            <meta property="og:image" content="https://example.com/boot.jpg">
            <meta name="twitter:card" content="summary_large_image">
            <meta name="twitter:title" content="Tweet Boots">
            <link rel="canonical" href="https://example.com/boots">
            <script type="application/ld+json">
            {"@context": "https://schema.org", "@type": "Product", "name": "Boot"}
            </script>
            <script type="application/ld+json">{ not json </script>
            <script type="application/ld+json">
            {"@type": "Organization", "name": "Bootmakers"}
            </script>
        </head>
        <body>
            <h1>  Leather Boots  </h1>
            <h2>Materials</h2>
            <h2>Sizing <em>guide</em></h2>
            <h3>Width</h3>
            <img src="a.jpg" alt="A boot">
            <img src="b.jpg" alt="">
            <img src="c.jpg">
            <a href="https://example.com/about">About</a>
            <a href="https://other.org/">Partner</a>
            <a href="/cart">Cart</a>
            <a href="sizes.html">Sizes</a>
            <a href="./care">Care</a>
            <a name="no-href">Anchor</a>
            <p>Buy sturdy boots today</p>
            <script>var hidden = "tracking code";</script>
            <style>.x { color: red; }</style>
        </body>
        </html>
    "#;

    #[test]
    fn extracts_title_and_meta() {
        let signals = extract_signals(PAGE, "https://example.com/boots");

        assert_eq!(signals.url, "https://example.com/boots");
        assert_eq!(signals.title.content.as_deref(), Some("Handmade Leather Boots"));
        assert_eq!(signals.title.length, 22);
        assert_eq!(
            signals.meta_description.as_deref(),
            Some("Boots made by hand in small batches.")
        );
        assert_eq!(signals.meta_keywords.as_deref(), Some("boots, leather"));
        assert_eq!(signals.robots.as_deref(), Some("index, follow"));
        assert_eq!(signals.canonical.as_deref(), Some("https://example.com/boots"));
    }

    #[test]
    fn extracts_social_tags() {
        let signals = extract_signals(PAGE, "https://example.com/boots");

        assert_eq!(signals.open_graph.title.as_deref(), Some("OG Boots"));
        assert_eq!(
            signals.open_graph.image.as_deref(),
            Some("https://example.com/boot.jpg")
        );
        assert_eq!(signals.open_graph.description, None);
        assert_eq!(signals.open_graph.url, None);
        assert_eq!(signals.twitter_card.card.as_deref(), Some("summary_large_image"));
        assert_eq!(signals.twitter_card.title.as_deref(), Some("Tweet Boots"));
        assert_eq!(signals.twitter_card.image, None);
    }

    #[test]
    fn collects_headings_in_document_order() {
        let signals = extract_signals(PAGE, "https://example.com/boots");

        assert_eq!(signals.headings.h1, vec!["Leather Boots"]);
        assert_eq!(signals.headings.h2, vec!["Materials", "Sizing guide"]);
        assert_eq!(signals.headings.h3, vec!["Width"]);
        assert!(signals.headings.h4.is_empty());
        assert!(signals.headings.h6.is_empty());
    }

    #[test]
    fn counts_images_by_alt_attribute() {
        let signals = extract_signals(PAGE, "https://example.com/boots");

        assert_eq!(signals.images.total, 3);
        assert_eq!(signals.images.with_alt, 1);
        assert_eq!(signals.images.without_alt, 2);
    }

    #[test]
    fn classifies_links_against_page_origin() {
        let signals = extract_signals(PAGE, "https://example.com/boots");

        assert_eq!(signals.links.total, 5);
        assert_eq!(signals.links.internal, 2);
        assert_eq!(signals.links.external, 1);
        assert_eq!(signals.links.unclassified, 2);
    }

    #[test]
    fn body_text_skips_scripts_and_styles() {
        let signals = extract_signals(PAGE, "https://example.com/boots");

        assert!(signals.content.text.contains("Buy sturdy boots today"));
        assert!(!signals.content.text.contains("tracking code"));
        assert!(!signals.content.text.contains("color: red"));
        assert_eq!(
            signals.content.word_count,
            signals.content.text.split_whitespace().count()
        );
    }

    #[test]
    fn malformed_structured_data_is_skipped() {
        let signals = extract_signals(PAGE, "https://example.com/boots");

        assert_eq!(signals.structured_data.len(), 2);
        assert_eq!(signals.structured_data[0]["@type"], "Product");
        assert_eq!(signals.structured_data[1]["name"], "Bootmakers");
    }

    #[test]
    fn missing_elements_yield_empty_signals() {
        let signals = extract_signals("<html><head></head></html>", "https://example.com");

        assert_eq!(signals.title.content, None);
        assert_eq!(signals.title.length, 0);
        assert_eq!(signals.meta_description, None);
        assert_eq!(signals.canonical, None);
        assert_eq!(signals.images, ImageStats::default());
        assert_eq!(signals.links, LinkStats::default());
        assert_eq!(signals.content.word_count, 0);
        assert!(signals.structured_data.is_empty());
    }

    #[test]
    fn empty_title_is_treated_as_missing() {
        let signals = extract_signals(
            "<html><head><title></title></head><body></body></html>",
            "https://example.com",
        );
        assert_eq!(signals.title.content, None);
        assert_eq!(signals.title.length, 0);
    }

    #[test]
    fn meta_without_content_is_present_but_empty() {
        let signals = extract_signals(
            r#"<html><head><meta name="description"></head></html>"#,
            "https://example.com",
        );
        assert_eq!(signals.meta_description.as_deref(), Some(""));
    }

    #[test]
    fn page_without_json_ld_has_no_structured_data() {
        let signals = extract_signals(
            "<html><body>No JSON-LD here</body></html>",
            "https://example.com",
        );
        assert!(signals.structured_data.is_empty());
    }

    #[test]
    fn json_ld_type_with_charset_or_uppercase_is_recognized() {
        let html = r#"
            <script type="application/ld+json; charset=utf-8">
            {"@type": "Product", "name": "Charset"}
            </script>
            <script type=" APPLICATION/LD+JSON ">
            {"@type": "Product", "name": "Upper"}
            </script>
            <script type="text/javascript">{"@type": "Ignored"}</script>
        "#;

        let signals = extract_signals(html, "https://example.com");
        assert_eq!(signals.structured_data.len(), 2);
        assert_eq!(signals.structured_data[0]["name"], "Charset");
        assert_eq!(signals.structured_data[1]["name"], "Upper");
    }

    #[test]
    fn blank_json_ld_scripts_are_ignored() {
        let html = r#"
            <script type="application/ld+json"></script>
            <script type="application/ld+json">   </script>
        "#;

        let signals = extract_signals(html, "https://example.com");
        assert!(signals.structured_data.is_empty());
    }
}
