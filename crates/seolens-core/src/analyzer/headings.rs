//! Heading hierarchy scoring

use serde::{Deserialize, Serialize};

use crate::types::Headings;

/// Heading structure assessment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAnalysis {
    pub h1_count: usize,
    pub h2_count: usize,
    pub h3_count: usize,

    /// Problems found with the heading structure
    pub issues: Vec<String>,

    /// One fix per issue
    pub recommendations: Vec<String>,

    /// 0-100, higher is better
    pub hierarchy_score: u8,
}

pub fn analyze_heading_structure(headings: &Headings) -> HeadingAnalysis {
    let h1_count = headings.h1.len();
    let h2_count = headings.h2.len();
    let h3_count = headings.h3.len();

    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    if h1_count == 0 {
        issues.push("No H1 tag found".to_string());
        recommendations.push("Add a single, descriptive H1 tag".to_string());
    } else if h1_count > 1 {
        issues.push(format!("Multiple H1 tags found ({h1_count})"));
        recommendations.push("Use only one H1 tag per page".to_string());
    }

    if h2_count == 0 {
        issues.push("No H2 tags found".to_string());
        recommendations.push("Add H2 tags to structure your content".to_string());
    }

    let mut score = 100u32;
    if h1_count != 1 {
        score = score.saturating_sub(30);
    }
    if h2_count == 0 {
        score = score.saturating_sub(20);
    }
    if h3_count > h2_count * 3 {
        score = score.saturating_sub(10);
    }

    HeadingAnalysis {
        h1_count,
        h2_count,
        h3_count,
        issues,
        recommendations,
        hierarchy_score: score.min(100) as u8,
    }
}
