mod assessment;
mod config;
mod db;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assessment::repository::{
    PgAssessmentStore, PgAttemptHistoryStore, PgQuestionRepository,
};
use crate::config::Config;
use crate::db::create_pool;
use crate::matching::catalogue::{RoleCatalogue, StaticRoleCatalogue};
use crate::matching::engine::MatchConfig;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathway API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Stores behind trait objects so tests can swap in fixtures
    let questions = Arc::new(PgQuestionRepository::new(db.clone()));
    let history = Arc::new(PgAttemptHistoryStore::new(db.clone()));
    let assessments = Arc::new(PgAssessmentStore::new(db));

    // Embedded role catalogue
    let catalogue = Arc::new(StaticRoleCatalogue::with_defaults());
    info!("Role catalogue loaded ({} roles)", catalogue.all().len());

    let match_config = MatchConfig {
        rating_scale_max: config.rating_scale_max,
        ..MatchConfig::default()
    };

    // Build app state
    let state = AppState {
        questions,
        history,
        assessments,
        catalogue,
        match_config,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
