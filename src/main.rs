mod report;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use seolens_core::recommend::llm::{API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use seolens_core::{
    Analyzer, AnalyzerSettings, CompletionSettings, LlmConfig, PageInsights, RecommendationSource,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Fetch a page, score its on-page SEO and ask an LLM for prioritized fixes.
#[derive(Debug, Parser)]
#[command(name = "seolens", version, about, after_help = "Developed by Pon Datalab")]
struct Cli {
    /// Page to analyze; `https://` is assumed when no scheme is given
    url: String,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Only extract signals and heuristic scores; no completion call
    #[arg(long)]
    skip_recommendations: bool,

    /// Page fetch timeout in seconds
    #[arg(long = "timeout", env = "SEOLENS_FETCH_TIMEOUT_SECS", default_value_t = 10)]
    timeout: u64,

    /// Completion call timeout in seconds
    #[arg(long, env = "SEOLENS_LLM_TIMEOUT_SECS", default_value_t = 120)]
    llm_timeout: u64,

    /// Completion API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Chat model used for recommendations
    #[arg(long, env = "SEOLENS_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// OpenAI-compatible chat-completions endpoint
    #[arg(long, env = "SEOLENS_LLM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    llm_endpoint: String,

    /// Save the report to a directory, or to a `.md` or `.json` file
    #[arg(short, long, value_name = "PATH", num_args = 0..=1, default_missing_value = ".")]
    save: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn analyzer_settings(cli: &Cli) -> AnalyzerSettings {
    AnalyzerSettings {
        fetch_timeout: Duration::from_secs(cli.timeout),
        llm: LlmConfig {
            endpoint: cli.llm_endpoint.clone(),
            api_key: cli.api_key.clone(),
            timeout: Duration::from_secs(cli.llm_timeout),
        },
        completion: CompletionSettings {
            model: cli.model.clone(),
            ..CompletionSettings::default()
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let analyzer = Analyzer::from_settings(analyzer_settings(&cli))?;

    let (output, page_url) = if cli.skip_recommendations {
        let signals = analyzer.signals(&cli.url).await?;
        let insights = PageInsights::from_signals(&signals);
        let output = if cli.json {
            serde_json::to_string_pretty(&serde_json::json!({ "seo_data": &signals }))?
        } else {
            let mut text = report::render_signals(&signals, &insights);
            text.push_str(&report::render_examples(&insights));
            text
        };
        (output, signals.url)
    } else {
        let analysis = analyzer.analyze(&cli.url, None).await?;
        if let RecommendationSource::Failed { reason } = &analysis.source {
            warn!(%reason, "recommendations unavailable");
        }
        let output = if cli.json {
            serde_json::to_string_pretty(&analysis)?
        } else {
            let insights = PageInsights::from_signals(&analysis.seo_data);
            report::render_report(&analysis, &insights)
        };
        (output, analysis.seo_data.url)
    };

    println!("{}", output.trim_end());

    if let Some(save_base) = cli.save {
        let extension = if cli.json { "json" } else { "md" };
        let output_path = report::build_output_path(&save_base, &page_url, extension);
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory {}", parent.display())
            })?;
        }

        fs::write(&output_path, output.as_bytes())
            .with_context(|| format!("failed to write output file {}", output_path.display()))?;

        eprintln!("Wrote output to {}", output_path.display());
    }

    Ok(())
}
