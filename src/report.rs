//! Terminal rendering of analysis results

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};

use seolens_core::analyzer::FieldAssessment;
use seolens_core::{AnalysisReport, PageInsights, Recommendation, SignalSet};
use url::Url;

const DIVIDER: &str = "─────────────────────────────────────────────────────────────";
const LABEL_WIDTH: usize = 18;

pub fn push_section_header(buf: &mut String, icon: &str, title: &str) {
    let _ = writeln!(buf, "{DIVIDER}");
    let _ = writeln!(buf, "{icon} {title}");
    let _ = writeln!(buf, "{DIVIDER}");
}

pub fn push_key_value(buf: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let _ = writeln!(buf, "• {:<width$} : {}", label, value, width = LABEL_WIDTH);
}

fn or_missing(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "(missing)",
    }
}

fn assessment(field: &FieldAssessment) -> String {
    format!("{}/100 ({}) {}", field.score, field.status, field.issue)
}

/// Page signals and heuristic scores, without any model output.
pub fn render_signals(signals: &SignalSet, insights: &PageInsights) -> String {
    let mut out = String::new();

    push_section_header(&mut out, "🔎", &format!("SEO Report: {}", signals.url));
    push_key_value(&mut out, "Title", or_missing(signals.title.content.as_deref()));
    push_key_value(&mut out, "Title Length", &signals.title.length.to_string());
    push_key_value(
        &mut out,
        "Meta Description",
        or_missing(signals.meta_description.as_deref()),
    );
    push_key_value(&mut out, "Canonical", or_missing(signals.canonical.as_deref()));
    push_key_value(&mut out, "Robots", or_missing(signals.robots.as_deref()));
    let _ = writeln!(out);

    push_section_header(&mut out, "📊", "Scores");
    push_key_value(
        &mut out,
        "Content Type",
        insights.context.content_type.as_str(),
    );
    push_key_value(&mut out, "Keywords", &insights.context.keywords.join(", "));
    push_key_value(&mut out, "Word Count", &insights.context.word_count.to_string());
    push_key_value(&mut out, "Title", &assessment(&insights.meta.title));
    push_key_value(&mut out, "Description", &assessment(&insights.meta.description));
    push_key_value(
        &mut out,
        "Headings",
        &format!("{}/100", insights.headings.hierarchy_score),
    );
    push_key_value(
        &mut out,
        "URL",
        &format!("{}/100", insights.meta.url_structure.score),
    );
    for issue in insights
        .headings
        .issues
        .iter()
        .chain(&insights.meta.url_structure.issues)
    {
        let _ = writeln!(out, "  ⚠️  {issue}");
    }
    let _ = writeln!(out);

    push_section_header(&mut out, "🧱", "Headings");
    for level in 1..=6u8 {
        let texts = signals.headings.level(level);
        if !texts.is_empty() {
            push_key_value(
                &mut out,
                &format!("H{level} ({})", texts.len()),
                &texts.join(" | "),
            );
        }
    }
    let _ = writeln!(out);

    push_section_header(&mut out, "🔗", "Images & Links");
    push_key_value(
        &mut out,
        "Images",
        &format!(
            "{} total, {} with alt, {} without alt",
            signals.images.total, signals.images.with_alt, signals.images.without_alt
        ),
    );
    push_key_value(
        &mut out,
        "Links",
        &format!(
            "{} total, {} internal, {} external, {} unclassified",
            signals.links.total,
            signals.links.internal,
            signals.links.external,
            signals.links.unclassified
        ),
    );
    let _ = writeln!(out);

    push_section_header(&mut out, "🏷️", "Social & Structured Data");
    push_key_value(
        &mut out,
        "Open Graph Title",
        or_missing(signals.open_graph.title.as_deref()),
    );
    push_key_value(
        &mut out,
        "Twitter Card",
        or_missing(signals.twitter_card.card.as_deref()),
    );
    push_key_value(
        &mut out,
        "JSON-LD Blocks",
        &signals.structured_data.len().to_string(),
    );
    let _ = writeln!(out);

    out
}

/// Heuristic example texts, shown when the model step is skipped.
pub fn render_examples(insights: &PageInsights) -> String {
    let mut out = String::new();
    push_section_header(&mut out, "✍️", "Suggested Examples");
    for (label, examples) in [
        ("Title", &insights.title_examples),
        ("Meta Description", &insights.description_examples),
        ("H1", &insights.h1_examples),
    ] {
        let _ = writeln!(out, "{label}:");
        for example in examples {
            let _ = writeln!(out, "  - {example}");
        }
    }
    out
}

pub fn render_recommendations(recommendations: &[Recommendation]) -> String {
    let mut out = String::new();
    push_section_header(
        &mut out,
        "💡",
        &format!("Recommendations ({})", recommendations.len()),
    );
    for (index, recommendation) in recommendations.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. [{}] {}",
            index + 1,
            recommendation.priority.to_string().to_uppercase(),
            recommendation.parameter
        );
        let _ = writeln!(out, "   Issue: {}", recommendation.issue);
        let _ = writeln!(out, "   Fix:   {}", recommendation.recommendation);
        for example in &recommendation.examples {
            let _ = writeln!(out, "     - {example}");
        }
        let _ = writeln!(out);
    }
    out
}

pub fn render_report(report: &AnalysisReport, insights: &PageInsights) -> String {
    let mut out = render_signals(&report.seo_data, insights);
    out.push_str(&render_recommendations(&report.recommendations));
    out
}

/// Resolve where `--save` writes: the path itself when it already ends in
/// `.md` or `.json`, otherwise a file named after the URL inside that
/// directory with `extension` appended.
pub fn build_output_path(base: &Path, url: &str, extension: &str) -> PathBuf {
    let is_report_file = base.extension().is_some_and(|ext| {
        ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("json")
    });

    if is_report_file {
        base.to_path_buf()
    } else {
        base.join(derive_output_filename(url, extension))
    }
}

fn derive_output_filename(url: &str, extension: &str) -> String {
    let Ok(url) = Url::parse(url) else {
        return format!("{}.seo.{extension}", sanitize_for_filename(url));
    };

    let host = url.host_str().unwrap_or("page");
    let mut path_component = url.path().trim_matches('/').replace('/', "_");
    if path_component.is_empty() {
        path_component = "index".to_string();
    }

    format!(
        "{}__{}.seo.{extension}",
        sanitize_for_filename(host),
        sanitize_for_filename(&path_component)
    )
}

fn sanitize_for_filename(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
