//! Decoding model replies into recommendations

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::warn;

use super::Recommendation;
use crate::error::ReplyError;

/// Outermost brace-delimited span, across newlines.
static JSON_OBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid JSON object regex"));

#[derive(Debug, Deserialize)]
struct ModelReply {
    recommendations: Vec<JsonValue>,
}

/// Narrow `reply` to the span between its first `{` and last `}`.
///
/// Models like to wrap JSON in prose or code fences. When the reply holds
/// no braces it is returned unchanged.
pub fn extract_json_object(reply: &str) -> &str {
    JSON_OBJECT_RE
        .find(reply)
        .map(|m| m.as_str())
        .unwrap_or(reply)
}

/// Decode a model reply into its recommendation list.
///
/// Entries that do not match [`Recommendation`] are dropped one by one. The
/// reply only fails as a whole when the object itself does not decode, or
/// when it listed recommendations and none of them survived.
pub fn decode_recommendations(reply: &str) -> Result<Vec<Recommendation>, ReplyError> {
    let parsed: ModelReply = serde_json::from_str(extract_json_object(reply))?;
    let listed = parsed.recommendations.len();

    let recommendations: Vec<Recommendation> = parsed
        .recommendations
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(recommendation) => Some(recommendation),
            Err(err) => {
                warn!(entry = index, error = %err, "dropping malformed recommendation");
                None
            }
        })
        .collect();

    if listed > 0 && recommendations.is_empty() {
        return Err(ReplyError::NoValidEntries(listed));
    }
    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::Priority;

    #[test]
    fn strips_prose_and_code_fences() {
        let reply = "Sure! Here you go:\n```json\n{\"recommendations\": []}\n```\nGood luck.";
        assert_eq!(extract_json_object(reply), "{\"recommendations\": []}");
    }

    #[test]
    fn spans_first_open_to_last_close_brace() {
        let reply = "a {\"x\": {\"y\": 1}} b } c";
        assert_eq!(extract_json_object(reply), "{\"x\": {\"y\": 1}} b }");
    }

    #[test]
    fn reply_without_braces_is_returned_whole() {
        assert_eq!(extract_json_object("no json here"), "no json here");
    }

    #[test]
    fn decodes_typed_recommendations() {
        let reply = r#"
            Here is my analysis:
            {
                "recommendations": [
                    {
                        "parameter": "Title Tag",
                        "issue": "Title too short (4 chars)",
                        "recommendation": "Lengthen the title",
                        "examples": ["A", "B", "C"],
                        "priority": "critical"
                    },
                    {
                        "parameter": "Images",
                        "issue": "2 images without alt text",
                        "recommendation": "Add alt text",
                        "examples": ["alt one"],
                        "priority": "Low"
                    }
                ]
            }
        "#;

        let recommendations = decode_recommendations(reply).unwrap();
        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].parameter, "Title Tag");
        assert_eq!(recommendations[0].priority, Priority::Critical);
        assert_eq!(recommendations[1].priority, Priority::Low);
        assert_eq!(recommendations[1].examples, vec!["alt one"]);
    }

    #[test]
    fn malformed_entries_are_dropped_individually() {
        let reply = r#"{"recommendations": [
            {"parameter": "Title Tag", "issue": "Short", "recommendation": "Lengthen",
             "examples": ["A", "B", "C"], "priority": "high"},
            {"parameter": "H1", "issue": "Missing", "recommendation": "Add one",
             "examples": ["A", "B", "C"], "priority": "medium-high"},
            {"parameter": "Images", "issue": "No alt", "recommendation": "Add alt",
             "examples": ["A", "B", "C"]},
            {"parameter": "Links", "issue": "Few", "recommendation": "Link more",
             "examples": ["A", "B", "C"], "priority": "low"}
        ]}"#;

        let recommendations = decode_recommendations(reply).unwrap();
        let parameters: Vec<_> = recommendations.iter().map(|r| r.parameter.as_str()).collect();
        assert_eq!(parameters, vec!["Title Tag", "Links"]);
    }

    #[test]
    fn empty_list_decodes_to_no_recommendations() {
        let recommendations = decode_recommendations("{\"recommendations\": []}").unwrap();
        assert!(recommendations.is_empty());
    }

    #[test]
    fn schema_mismatch_is_an_error() {
        assert!(matches!(
            decode_recommendations("{\"recs\": []}"),
            Err(ReplyError::Json(_))
        ));
        assert!(matches!(
            decode_recommendations("{\"recommendations\": [{\"parameter\": 1}]}"),
            Err(ReplyError::NoValidEntries(1))
        ));
        assert!(decode_recommendations("I cannot help with that.").is_err());
    }
}
