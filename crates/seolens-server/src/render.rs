//! HTML pages for the form flow

use std::fmt::Write as _;

use html_escape::encode_text;
use seolens_core::{AnalysisReport, Recommendation};

const FRONTEND_HTML: &str = include_str!("frontend.html");

/// The analysis form, with an optional error banner above it.
pub fn render_form(error: Option<&str>) -> String {
    let banner = error
        .map(|message| format!(r#"<div class="error">{}</div>"#, encode_text(message)))
        .unwrap_or_default();
    FRONTEND_HTML.replace("{{error}}", &banner)
}

pub fn render_results(report: &AnalysisReport) -> String {
    let data = &report.seo_data;
    let context = &report.fastmcp_context;

    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>seolens · Results</title>
<style>
body { font-family: system-ui, -apple-system, "Segoe UI", sans-serif; margin: 0; background: #f8fafc; color: #111827; }
main { max-width: 860px; margin: 2.5rem auto; padding: 0 1.25rem; }
table { border-collapse: collapse; width: 100%; background: #fff; }
td, th { border: 1px solid #e5e7eb; padding: 0.5rem 0.75rem; text-align: left; }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: 10px; padding: 1rem 1.25rem; margin: 1rem 0; }
.priority { display: inline-block; border-radius: 999px; padding: 0.1rem 0.6rem; font-size: 0.8rem; text-transform: uppercase; }
.priority-critical { background: #fee2e2; color: #991b1b; }
.priority-high { background: #ffedd5; color: #9a3412; }
.priority-medium { background: #fef9c3; color: #854d0e; }
.priority-low { background: #dcfce7; color: #166534; }
</style>
</head>
<body>
<main>
"#,
    );

    let _ = writeln!(html, "<h1>SEO report</h1>");
    let _ = writeln!(html, "<p><code>{}</code></p>", encode_text(&data.url));

    html.push_str("<h2>Scores</h2>\n<table>\n");
    row(&mut html, "Content type", &context.content_type);
    row(&mut html, "Top keywords", &context.keywords.join(", "));
    row(&mut html, "Title score", &format!("{}/100", context.title_score));
    row(
        &mut html,
        "Description score",
        &format!("{}/100", context.description_score),
    );
    row(&mut html, "Heading score", &format!("{}/100", context.heading_score));
    html.push_str("</table>\n");

    html.push_str("<h2>Page signals</h2>\n<table>\n");
    row(
        &mut html,
        "Title",
        data.title.content.as_deref().unwrap_or("(missing)"),
    );
    row(
        &mut html,
        "Meta description",
        data.meta_description.as_deref().unwrap_or("(missing)"),
    );
    row(
        &mut html,
        "Headings",
        &format!(
            "H1: {} · H2: {} · H3: {}",
            data.headings.h1.len(),
            data.headings.h2.len(),
            data.headings.h3.len()
        ),
    );
    row(
        &mut html,
        "Images",
        &format!(
            "{} total, {} without alt text",
            data.images.total, data.images.without_alt
        ),
    );
    row(
        &mut html,
        "Links",
        &format!(
            "{} total, {} internal, {} external, {} unclassified",
            data.links.total, data.links.internal, data.links.external, data.links.unclassified
        ),
    );
    row(&mut html, "Words", &data.content.word_count.to_string());
    row(
        &mut html,
        "Structured data",
        &format!("{} blocks", data.structured_data.len()),
    );
    html.push_str("</table>\n");

    let _ = writeln!(
        html,
        "<h2>Recommendations ({})</h2>",
        report.recommendations.len()
    );
    for recommendation in &report.recommendations {
        push_recommendation(&mut html, recommendation);
    }

    html.push_str("<p><a href=\"/\">Analyze another page</a></p>\n</main>\n</body>\n</html>\n");
    html
}

fn row(html: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        html,
        "<tr><th>{}</th><td>{}</td></tr>",
        encode_text(label),
        encode_text(value)
    );
}

fn push_recommendation(html: &mut String, recommendation: &Recommendation) {
    let priority = recommendation.priority;
    let _ = writeln!(html, r#"<div class="card">"#);
    let _ = writeln!(
        html,
        r#"<h3>{} <span class="priority priority-{priority}">{priority}</span></h3>"#,
        encode_text(&recommendation.parameter)
    );
    let _ = writeln!(
        html,
        "<p><strong>Issue:</strong> {}</p>",
        encode_text(&recommendation.issue)
    );
    let _ = writeln!(html, "<p>{}</p>", encode_text(&recommendation.recommendation));
    if !recommendation.examples.is_empty() {
        html.push_str("<ul>\n");
        for example in &recommendation.examples {
            let _ = writeln!(html, "<li>{}</li>", encode_text(example));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use seolens_core::recommend::{ContextSummary, Priority, RecommendationSource};
    use seolens_core::extract_signals;

    #[test]
    fn form_without_error_has_no_banner() {
        let page = render_form(None);
        assert!(page.contains(r#"<form method="post" action="/analyze">"#));
        assert!(!page.contains("{{error}}"));
        assert!(!page.contains(r#"class="error""#));
    }

    #[test]
    fn form_error_is_escaped() {
        let page = render_form(Some("bad <url>"));
        assert!(page.contains(r#"<div class="error">bad &lt;url&gt;</div>"#));
    }

    #[test]
    fn results_list_recommendations_and_escape_page_text() {
        let report = AnalysisReport {
            seo_data: extract_signals(
                "<html><head><title>Fish &amp; <Chips></title></head><body></body></html>",
                "https://example.com/",
            ),
            recommendations: vec![Recommendation {
                parameter: "Title Tag".to_string(),
                issue: "Too short".to_string(),
                recommendation: "Use <strong> words".to_string(),
                examples: vec!["A".to_string(), "B".to_string(), "C".to_string()],
                priority: Priority::Critical,
            }],
            fastmcp_context: ContextSummary {
                content_type: "general".to_string(),
                keywords: vec!["fish".to_string()],
                heading_score: 50,
                title_score: 30,
                description_score: 0,
            },
            source: RecommendationSource::Model,
        };

        let page = render_results(&report);
        assert!(page.contains("<h2>Recommendations (1)</h2>"));
        assert!(page.contains(r#"<span class="priority priority-critical">critical</span>"#));
        assert!(page.contains("Use &lt;strong&gt; words"));
        assert!(page.contains("<li>C</li>"));
        assert!(page.contains("<tr><th>Title score</th><td>30/100</td></tr>"));
        assert!(page.contains(
            "<tr><th>Links</th><td>0 total, 0 internal, 0 external, 0 unclassified</td></tr>"
        ));
        assert!(!page.contains("<Chips>"));
    }
}
