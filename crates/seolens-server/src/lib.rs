//! HTTP surface for seolens
//!
//! Routes:
//! - `GET /` analysis form
//! - `POST /analyze` form submission, answered with an HTML report
//! - `POST /api/analyze` JSON analysis
//! - `GET /health` liveness probe

pub mod config;
pub mod render;


use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Deserialize;
use seolens_core::{Analyzer, BusinessContextForm};
use tracing::{error, info};

/// Shared, immutable per-process state.
pub struct AppState {
    pub analyzer: Analyzer,
}

/// Form fields posted by the analysis page
#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub url: String,
    pub primary_goal: Option<String>,
    pub target_customer: Option<String>,
    pub price_position: Option<String>,
    pub geographic_focus: Option<String>,
    pub geographic_location: Option<String>,
    pub desired_action: Option<String>,
}

impl AnalyzeForm {
    fn business(&self) -> BusinessContextForm {
        BusinessContextForm {
            primary_goal: self.primary_goal.clone(),
            target_customer: self.target_customer.clone(),
            price_position: self.price_position.clone(),
            geographic_focus: self.geographic_focus.clone(),
            geographic_location: self.geographic_location.clone(),
            desired_action: self.desired_action.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiAnalyzeRequest {
    pub url: Option<String>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/analyze", web::post().to(analyze_form))
        .route("/api/analyze", web::post().to(api_analyze))
        .route("/health", web::get().to(health_check));
}

fn html_page(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

async fn index() -> ActixResult<HttpResponse> {
    Ok(html_page(render::render_form(None)))
}

async fn analyze_form(
    state: web::Data<AppState>,
    form: web::Form<AnalyzeForm>,
) -> ActixResult<HttpResponse> {
    let form = form.into_inner();

    let business = match form.business().validate() {
        Ok(business) => business,
        Err(err) => {
            info!(error = %err, "rejected incomplete business context");
            return Ok(html_page(render::render_form(Some(&err.to_string()))));
        }
    };

    info!(url = %form.url, "analyzing page from form");
    match state.analyzer.analyze(&form.url, Some(&business)).await {
        Ok(report) => Ok(html_page(render::render_results(&report))),
        Err(err) => {
            error!(url = %form.url, error = %err, "analysis failed");
            Ok(html_page(render::render_form(Some(&err.to_string()))))
        }
    }
}

async fn api_analyze(
    state: web::Data<AppState>,
    req: web::Json<ApiAnalyzeRequest>,
) -> ActixResult<HttpResponse> {
    let Some(url) = req
        .into_inner()
        .url
        .filter(|url| !url.trim().is_empty())
    else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "detail": "URL is required"
        })));
    };

    info!(%url, "API: analyzing page");
    match state.analyzer.analyze(&url, None).await {
        Ok(report) => Ok(HttpResponse::Ok().json(report)),
        Err(err) => {
            error!(%url, error = %err, "API: analysis failed");
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "error": err.to_string()
            })))
        }
    }
}

async fn health_check() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    })))
}
