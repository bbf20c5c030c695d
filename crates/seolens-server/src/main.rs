use actix_web::{App, HttpServer, middleware, web};
use anyhow::Result;
use clap::Parser;
use seolens_server::config::{ServerConfig, init_logging};
use seolens_server::{AppState, configure_routes};
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if config.api_key.is_none() {
        warn!("GROQ_API_KEY is not set; every analysis will report an API error");
    }

    let state = web::Data::new(AppState {
        analyzer: config.build_analyzer()?,
    });

    info!(host = %config.host, port = config.port, "starting seolens-server");
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
