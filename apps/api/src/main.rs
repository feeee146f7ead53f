mod config;
mod errors;
mod llm_client;
mod ranking;
mod resume;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scoring::scorer::{CompetencyScorer, KeywordCompetencyScorer, LlmValidatedScorer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting screener v{}", env!("CARGO_PKG_VERSION"));

    let scorer = build_scorer(&config)?;
    info!("Competency scorer: {}", scorer.backend());

    let state = AppState {
        config: config.clone(),
        scorer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Keyword scoring unless LLM validation is switched on.
fn build_scorer(config: &Config) -> Result<Arc<dyn CompetencyScorer>> {
    match (&config.anthropic_api_key, config.enable_llm_validation) {
        (Some(key), true) => {
            let llm = LlmClient::new(key.clone()).context("failed to build LLM client")?;
            info!(
                "LLM validation enabled (model: {}, blend weight: {})",
                llm_client::MODEL,
                config.llm_blend_weight
            );
            Ok(Arc::new(LlmValidatedScorer::new(llm, config.llm_blend_weight)))
        }
        _ => Ok(Arc::new(KeywordCompetencyScorer)),
    }
}
