use crate::core::engine::AggregatorEngine;
use crate::core::request::RecipeQuery;
use crate::utils::error::{AggregatorError, Result};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

pub fn router(engine: AggregatorEngine) -> Router {
    Router::new()
        .route("/recipes", get(recipes))
        .route("/health", get(health))
        .with_state(engine)
}

pub async fn serve(listen_addr: &str, engine: AggregatorEngine) -> Result<()> {
    let listener = TcpListener::bind(listen_addr).await?;
    tracing::info!("🌐 Listening on {}", listener.local_addr()?);
    serve_on(listener, engine).await
}

pub async fn serve_on(listener: TcpListener, engine: AggregatorEngine) -> Result<()> {
    axum::serve(listener, router(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[derive(Serialize)]
struct ApiErrorResponse {
    error_message: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// 空結果仍回傳 200 與空陣列；重複的參數只取第一個值
async fn recipes(
    State(engine): State<AggregatorEngine>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> std::result::Result<Response, AggregatorError> {
    let query = RecipeQuery::from_pairs(pairs);
    let recipes = engine.handle(&query).await;
    let body = serde_json::to_vec(&recipes)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

impl IntoResponse for AggregatorError {
    fn into_response(self) -> Response {
        tracing::error!("❌ Request failed: {}", self);

        let body = Json(ApiErrorResponse {
            error_message: self.user_friendly_message(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
