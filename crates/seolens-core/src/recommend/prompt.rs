//! Prompt construction for the recommendation model

use std::fmt::Write as _;

use crate::analyzer::PageInsights;
use crate::business::BusinessContext;
use crate::types::SignalSet;

const MISSING: &str = "MISSING";

fn present(flag: bool) -> &'static str {
    if flag { "Present" } else { MISSING }
}

/// Summarize the page signals and heuristic scores as plain text.
pub fn build_context_block(signals: &SignalSet, insights: &PageInsights) -> String {
    let context = &insights.context;
    let meta = &insights.meta;
    let headings = &insights.headings;

    let mut out = String::new();
    let _ = writeln!(out, "Website URL: {}", signals.url);

    out.push_str("\nCONTENT ANALYSIS:\n");
    let _ = writeln!(out, "- Content Type: {}", context.content_type);
    let _ = writeln!(out, "- Top Keywords: {}", top_keywords(context, 5));
    let _ = writeln!(out, "- Word Count: {}", context.word_count);
    let _ = writeln!(out, "- Content Preview: {}", context.preview);

    out.push_str("\nTITLE ANALYSIS:\n");
    let _ = writeln!(
        out,
        "- Current Title: {}",
        signals.title.content.as_deref().unwrap_or(MISSING)
    );
    let _ = writeln!(out, "- Length: {} characters", signals.title.length);
    let _ = writeln!(out, "- Status: {}", meta.title.status);
    let _ = writeln!(out, "- Issue: {}", meta.title.issue);
    let _ = writeln!(out, "- Score: {}/100", meta.title.score);

    let description = signals.meta_description.as_deref().unwrap_or_default();
    out.push_str("\nMETA DESCRIPTION:\n");
    let _ = writeln!(
        out,
        "- Current: {}",
        signals.meta_description.as_deref().unwrap_or(MISSING)
    );
    let _ = writeln!(out, "- Length: {} characters", description.chars().count());
    let _ = writeln!(out, "- Status: {}", meta.description.status);
    let _ = writeln!(out, "- Issue: {}", meta.description.issue);
    let _ = writeln!(out, "- Score: {}/100", meta.description.score);

    let h1_content = if signals.headings.h1.is_empty() {
        "NONE".to_string()
    } else {
        signals.headings.h1.join(", ")
    };
    let heading_issues = if headings.issues.is_empty() {
        "None".to_string()
    } else {
        headings.issues.join(", ")
    };
    out.push_str("\nHEADING STRUCTURE:\n");
    let _ = writeln!(out, "- H1 Tags: {} found", headings.h1_count);
    let _ = writeln!(out, "- H2 Tags: {} found", headings.h2_count);
    let _ = writeln!(out, "- H3 Tags: {} found", headings.h3_count);
    let _ = writeln!(out, "- H1 Content: {h1_content}");
    let _ = writeln!(out, "- Hierarchy Score: {}/100", headings.hierarchy_score);
    let _ = writeln!(out, "- Issues: {heading_issues}");

    out.push_str("\nIMAGES:\n");
    let _ = writeln!(out, "- Total Images: {}", signals.images.total);
    let _ = writeln!(out, "- Without ALT tags: {}", signals.images.without_alt);

    out.push_str("\nLINKS:\n");
    let _ = writeln!(out, "- Total: {}", signals.links.total);
    let _ = writeln!(out, "- Internal: {}", signals.links.internal);
    let _ = writeln!(out, "- External: {}", signals.links.external);

    out.push_str("\nTECHNICAL SEO:\n");
    let _ = writeln!(
        out,
        "- Canonical URL: {}",
        present(signals.canonical.as_deref().is_some_and(|c| !c.is_empty()))
    );
    let _ = writeln!(
        out,
        "- Robots Meta: {}",
        signals.robots.as_deref().unwrap_or(MISSING)
    );
    let _ = writeln!(
        out,
        "- Open Graph Tags: {}",
        present(signals.open_graph.title.as_deref().is_some_and(|t| !t.is_empty()))
    );
    let _ = writeln!(
        out,
        "- Twitter Card: {}",
        present(signals.twitter_card.card.as_deref().is_some_and(|c| !c.is_empty()))
    );
    let _ = writeln!(
        out,
        "- Structured Data: {} schemas found",
        signals.structured_data.len()
    );
    let _ = writeln!(
        out,
        "- URL Structure Score: {}/100",
        meta.url_structure.score
    );

    out
}

/// Describe the site owner's goals so the model can tailor its advice.
pub fn build_business_block(business: &BusinessContext) -> String {
    let mut out = String::from("BUSINESS CONTEXT:\n");
    let _ = writeln!(out, "- Primary Goal: {}", business.primary_goal);
    let _ = writeln!(out, "- Target Customer: {}", business.target_customer);
    let _ = writeln!(out, "- Price Position: {}", business.price_position);
    match business.geographic_location.as_deref() {
        Some(location) => {
            let _ = writeln!(
                out,
                "- Geographic Focus: {} ({location})",
                business.geographic_focus
            );
        }
        None => {
            let _ = writeln!(out, "- Geographic Focus: {}", business.geographic_focus);
        }
    }
    let _ = writeln!(out, "- Desired Visitor Action: {}", business.desired_action);
    out
}

/// Full user prompt: context, pre-generated examples and output contract.
pub fn build_prompt(
    signals: &SignalSet,
    insights: &PageInsights,
    business: Option<&BusinessContext>,
) -> String {
    let content_type = insights.context.content_type;
    let mut out = String::from(
        "You are an expert SEO consultant with detailed content analysis of the page below.\n\n",
    );

    out.push_str(&build_context_block(signals, insights));
    if let Some(business) = business {
        out.push('\n');
        out.push_str(&build_business_block(business));
    }

    out.push_str("\nContextual examples already generated from the content analysis:\n");
    let _ = writeln!(out, "- Title Examples: {}", json_list(&insights.title_examples));
    let _ = writeln!(
        out,
        "- Description Examples: {}",
        json_list(&insights.description_examples)
    );
    let _ = writeln!(out, "- H1 Examples: {}", json_list(&insights.h1_examples));

    let _ = write!(
        out,
        r#"
CRITICAL INSTRUCTIONS:
1. Use the content analysis to understand the website's topic and type
2. Use the pre-generated contextual examples as reference
3. Provide SPECIFIC recommendations based on the analysis scores
4. For each recommendation, provide MINIMUM 3 DIFFERENT EXAMPLES
5. Examples must be realistic and based on the content type: {content_type}
6. Prioritize issues by severity using the scores
"#
    );
    if business.is_some() {
        out.push_str(
            "7. Align every recommendation with the business goal, audience, pricing and location above\n",
        );
    }

    let _ = write!(
        out,
        r#"
For each issue found, provide:
- parameter: The SEO element that needs improvement
- issue: What's wrong (be specific with scores and context)
- recommendation: Detailed, actionable advice based on content type and keywords
- examples: Array of at least 3 realistic examples
- priority: critical/high/medium/low (based on the scores)

Return ONLY valid JSON in this exact format:
{{
    "recommendations": [
        {{
            "parameter": "Title Tag",
            "issue": "specific issue with score",
            "recommendation": "specific actionable advice for {content_type} site",
            "examples": [
                "First example based on content type and keywords",
                "Second example with different approach",
                "Third example emphasizing different aspect"
            ],
            "priority": "high"
        }}
    ]
}}

Focus on the most impactful issues first. Maximum 10 recommendations.
Each recommendation MUST have at least 3 different examples tailored to the content type.
"#
    );

    out
}

/// System message naming the site type and its leading topics.
pub fn build_system_message(insights: &PageInsights) -> String {
    format!(
        "You are an expert SEO consultant with access to detailed content analysis showing this is a {} website about {}. Provide specific, actionable recommendations based on this context.",
        insights.context.content_type,
        top_keywords(&insights.context, 3)
    )
}

fn top_keywords(context: &crate::analyzer::ContentContext, n: usize) -> String {
    context
        .keywords
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn json_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}
