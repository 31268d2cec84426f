use axum::{extract::{Path, Query, State}, http::{HeaderValue, StatusCode}, routing::get, Json, Router};
use recommender_core::{effective_query, recommend, DocId, Document, PipelineError, Recommendation, DEFAULT_RESULTS};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer, AllowOrigin};
use tower_http::trace::TraceLayer;

pub mod input;

pub use input::load_corpus;
pub use recommender_core::DEFAULT_QUERY;

#[derive(Deserialize)]
pub struct RecommendParams {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_num")]
    pub num: usize,
}
fn default_num() -> usize { DEFAULT_RESULTS }

#[derive(Serialize)]
pub struct RecommendResponse {
    pub result: RecommendResult,
}

#[derive(Serialize)]
pub struct RecommendResult {
    pub utterance: String,
    pub articles: Vec<Recommendation>,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<Vec<Document>>,
    pub default_query: String,
}

pub fn build_app(corpus: Vec<Document>, default_query: String) -> Router {
    let app_state = AppState { corpus: Arc::new(corpus), default_query };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/recommend", get(recommend_handler))
        .route("/documents/:id", get(document_handler))
        .with_state(app_state)
        .layer(cors_layer(std::env::var("CORS_ALLOW_ORIGIN").ok().as_deref()))
        .layer(TraceLayer::new_for_http())
}

/// Allowed origins from a comma-separated list; unset or empty means any origin.
fn cors_layer(allowed: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed
        .into_iter()
        .flat_map(|val| val.split(','))
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

pub async fn recommend_handler(State(state): State<AppState>, Query(params): Query<RecommendParams>) -> Result<Json<RecommendResponse>, ApiError> {
    let utterance = effective_query(&params.query, &state.default_query).to_string();
    tracing::info!(%utterance, num = params.num, "recommendation requested");

    let corpus = Arc::clone(&state.corpus);
    let query = utterance.clone();
    let articles = tokio::task::spawn_blocking(move || recommend(&corpus, &query, params.num))
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .map_err(pipeline_error)?;

    tracing::info!(count = articles.len(), "recommendations returned");
    Ok(Json(RecommendResponse { result: RecommendResult { utterance, articles } }))
}

pub async fn document_handler(State(state): State<AppState>, Path(id): Path<DocId>) -> Result<Json<Document>, ApiError> {
    state
        .corpus
        .iter()
        .find(|d| d.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, format!("document {id} not found")))
}

fn error_response(status: StatusCode, error: String) -> ApiError {
    (status, Json(ErrorBody { error }))
}

fn pipeline_error(err: PipelineError) -> ApiError {
    let status = match err {
        PipelineError::InvalidResultCount { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::warn!(error = %err, "recommendation failed");
    error_response(status, err.to_string())
}
