mod config;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod notices;
mod report;
mod routes;
mod session;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::extractor::GeminiResumeExtractor;
use crate::llm_client::LlmClient;
use crate::report::generator::GeminiReportGenerator;
use crate::routes::build_router;
use crate::session::Session;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Parser API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        config.llm_timeout_secs.map(Duration::from_secs),
    )?;
    match config.llm_timeout_secs {
        Some(secs) => info!("LLM client initialized (model: {}, timeout: {secs}s)", llm_client::MODEL),
        None => info!("LLM client initialized (model: {}, no timeout)", llm_client::MODEL),
    }

    // Build app state
    let state = AppState {
        session: Arc::new(Session::new()),
        extractor: Arc::new(GeminiResumeExtractor::new(llm.clone())),
        reporter: Arc::new(GeminiReportGenerator::new(llm)),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
