//! Title, meta description and URL quality scoring

use std::fmt;

use serde::{Deserialize, Serialize};

const TITLE_MIN: usize = 30;
const TITLE_MAX: usize = 70;
const DESCRIPTION_MIN: usize = 120;
const DESCRIPTION_MAX: usize = 160;
const URL_MAX: usize = 100;

/// Severity label attached to a scored field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    Critical,
    Poor,
    Warning,
    Good,
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldStatus::Critical => "critical",
            FieldStatus::Poor => "poor",
            FieldStatus::Warning => "warning",
            FieldStatus::Good => "good",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAssessment {
    pub status: FieldStatus,
    pub issue: String,
    pub score: u8,
}

impl FieldAssessment {
    fn new(status: FieldStatus, issue: impl Into<String>, score: u8) -> Self {
        Self {
            status,
            issue: issue.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlStructure {
    pub score: u8,
    pub issues: Vec<String>,
}

/// Quality of the title, meta description and URL of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaAnalysis {
    pub title: FieldAssessment,
    pub description: FieldAssessment,
    pub url_structure: UrlStructure,
}

/// Score title and description lengths and the shape of the URL.
///
/// An empty string counts as missing. Lengths are measured in characters.
pub fn analyze_meta_quality(
    title: Option<&str>,
    description: Option<&str>,
    url: &str,
) -> MetaAnalysis {
    MetaAnalysis {
        title: assess_title(title),
        description: assess_description(description),
        url_structure: assess_url(url),
    }
}

fn assess_title(title: Option<&str>) -> FieldAssessment {
    let length = match title {
        Some(t) if !t.is_empty() => t.chars().count(),
        _ => return FieldAssessment::new(FieldStatus::Critical, "Missing title tag", 0),
    };

    if length < TITLE_MIN {
        FieldAssessment::new(
            FieldStatus::Poor,
            format!("Title too short ({length} chars)"),
            30,
        )
    } else if length > TITLE_MAX {
        FieldAssessment::new(
            FieldStatus::Warning,
            format!("Title too long ({length} chars)"),
            60,
        )
    } else {
        FieldAssessment::new(FieldStatus::Good, "Title length optimal", 100)
    }
}

fn assess_description(description: Option<&str>) -> FieldAssessment {
    let length = match description {
        Some(d) if !d.is_empty() => d.chars().count(),
        _ => {
            return FieldAssessment::new(FieldStatus::Critical, "Missing meta description", 0);
        }
    };

    if length < DESCRIPTION_MIN {
        FieldAssessment::new(
            FieldStatus::Warning,
            format!("Description too short ({length} chars)"),
            50,
        )
    } else if length > DESCRIPTION_MAX {
        FieldAssessment::new(
            FieldStatus::Warning,
            format!("Description too long ({length} chars)"),
            70,
        )
    } else {
        FieldAssessment::new(FieldStatus::Good, "Description length optimal", 100)
    }
}

fn assess_url(url: &str) -> UrlStructure {
    let mut score = 100u32;
    let mut issues = Vec::new();

    if url.contains('?') {
        issues.push("Contains query parameters".to_string());
        score = score.saturating_sub(10);
    }
    if url.chars().count() > URL_MAX {
        issues.push("URL too long".to_string());
        score = score.saturating_sub(20);
    }
    if url.contains('_') {
        issues.push("Contains underscores (use hyphens)".to_string());
        score = score.saturating_sub(10);
    }

    UrlStructure {
        score: score.min(100) as u8,
        issues,
    }
}
