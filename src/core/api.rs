//! HTTP API for Reflectify
//!
//! Endpoints:
//! - POST /analyze - Score one reflection
//! - GET /health - Health check

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::core::ReflectionScorer;
use crate::types::ScoreOutput;

/// App state
pub struct AppState {
    pub scorer: ReflectionScorer,
}

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub nlp_configured: bool,
}

/// Create the API router
pub fn create_router(scorer: ReflectionScorer) -> Router {
    let state = Arc::new(AppState { scorer });

    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        nlp_configured: state.scorer.nlp_configured(),
    })
}

/// Score a reflection. Always 200 once the body parses; degradation shows in
/// `tier` and `reason`.
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<ScoreOutput> {
    let output = state
        .scorer
        .score_reflection(
            &req.content,
            req.title.as_deref().unwrap_or_default(),
            req.category.as_deref(),
        )
        .await;
    Json(output)
}

/// Run the API server
pub async fn run_server(addr: &str, scorer: ReflectionScorer) -> Result<(), Box<dyn std::error::Error>> {
    let nlp_configured = scorer.nlp_configured();
    let router = create_router(scorer);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr, nlp_configured, "Reflectify API listening");
    info!("  POST /analyze - Score a reflection");
    info!("  GET  /health  - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
