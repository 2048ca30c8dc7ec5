use std::net::SocketAddr;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use crate::config::Config;
use crate::engine::build_report;
use crate::engine::fallback::fallback_recommendations;
use crate::engine::report::RecommendationReport;
use crate::recommendations::thresholds::Thresholds;
use crate::recommendations::Recommendation;

#[derive(Clone)]
struct ApiState {
    config: Config,
}

#[derive(Debug, Serialize)]
struct ApiResponse<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    ok: bool,
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiErrorBody {
            ok: false,
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<ApiResponse<T>>, ApiError>;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Debug, Deserialize)]
struct RecommendQuery {
    top: Option<usize>,
}

pub fn create_router(config: Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/v1/config", get(show_thresholds))
        .route("/v1/recommendations", post(recommend))
        .route("/v1/recommendations/fallback", get(fallback))
        .with_state(ApiState { config })
        .layer(cors)
}

pub async fn run_server(config: Config, bind: SocketAddr) -> Result<()> {
    let app = create_router(config);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("REST API listening on http://{bind}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<ApiResponse<HealthResponse>> {
    ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn show_thresholds(State(state): State<ApiState>) -> Json<ApiResponse<Thresholds>> {
    ok(state.config.thresholds)
}

async fn recommend(
    State(state): State<ApiState>,
    Query(query): Query<RecommendQuery>,
    Json(analysis): Json<Value>,
) -> ApiResult<RecommendationReport> {
    let top = query.top.or(state.config.output.top);
    if top == Some(0) {
        return Err(ApiError::bad_request("top must be at least 1"));
    }
    let report = build_report(&analysis, &state.config.thresholds, Utc::now(), top);
    debug!(
        "served {} recommendations ({:?})",
        report.recommendations.len(),
        report.source
    );
    Ok(ok(report))
}

async fn fallback() -> Json<ApiResponse<Vec<Recommendation>>> {
    ok(fallback_recommendations(Utc::now()))
}

fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse { ok: true, data })
}
