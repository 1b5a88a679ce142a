//! HTTP surface: JSON over axum.
//!
//! One handler per route. Every failure mode (validation, fetch,
//! render, extraction) comes back as `400 {"error": "…"}`; the process
//! itself never dies for a bad request.

use crate::engine::Engine;
use crate::types::CompareRequest;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all endpoints.
pub fn router(engine: Arc<Engine>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(meta))
        .route("/meta", get(meta))
        .route("/health", get(health))
        .route("/compare", post(compare))
        .layer(cors)
        .with_state(engine)
}

/// Bind and serve until the process exits.
pub async fn start(port: u16, engine: Arc<Engine>) -> anyhow::Result<()> {
    let app = router(engine);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("feature comparison API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn meta() -> Json<Value> {
    Json(json!({
        "name": "Universal Feature Comparator API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/compare": "POST - Compare features from two URLs",
            "/health": "GET - Health check",
            "/meta": "GET - Service descriptor",
        }
    }))
}

async fn compare(
    State(engine): State<Arc<Engine>>,
    payload: Option<Json<CompareRequest>>,
) -> Response {
    let Some(Json(req)) = payload else {
        return bad_request("Missing JSON payload");
    };
    let (Some(url1), Some(url2)) = (req.url1, req.url2) else {
        return bad_request("Both URLs are required");
    };

    match engine.compare(&url1, &url2).await {
        Ok(cmp) => (StatusCode::OK, Json(cmp)).into_response(),
        Err(e) => bad_request(&e.to_string()),
    }
}

fn bad_request(msg: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
}
