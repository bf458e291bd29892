use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use staffnames::error::AppError;
use staffnames::harvest::RejectedName;
use staffnames::names::{candidates_for, NameCandidates};
use staffnames::segments::{plan, PlanRequest, Segment};
use std::sync::atomic::Ordering;

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatesRequest {
    pub(crate) names: Vec<String>,
    #[serde(default)]
    pub(crate) domain: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CandidateView {
    pub(crate) raw: String,
    pub(crate) clean: String,
    pub(crate) first: String,
    pub(crate) second: String,
    pub(crate) last: String,
    pub(crate) usernames: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) emails: Option<Vec<String>>,
}

impl CandidateView {
    fn from_result(result: NameCandidates, domain: Option<&str>) -> Self {
        let emails = domain.map(|domain| result.candidates.with_domain(domain));
        Self {
            raw: result.raw,
            clean: result.clean.into_string(),
            first: result.parts.first().to_string(),
            second: result.parts.second().to_string(),
            last: result.parts.last().to_string(),
            usernames: result.candidates.into_iter().collect(),
            emails,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CandidatesResponse {
    pub(crate) results: Vec<CandidateView>,
    pub(crate) rejected: Vec<RejectedName>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PlanResponse {
    pub(crate) total_pages: u32,
    pub(crate) segments: Vec<Segment>,
}

pub fn api_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/names/candidates", post(candidates_endpoint))
        .route("/api/v1/segments/plan", post(plan_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    match state.metrics {
        Some(metrics) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            metrics.render(),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            String::new(),
        ),
    }
}

pub(crate) async fn candidates_endpoint(
    Json(payload): Json<CandidatesRequest>,
) -> Json<CandidatesResponse> {
    let domain = payload
        .domain
        .as_deref()
        .map(str::trim)
        .filter(|domain| !domain.is_empty());
    let mut results = Vec::new();
    let mut rejected = Vec::new();

    for raw in payload.names {
        match candidates_for(&raw) {
            Ok(result) => results.push(CandidateView::from_result(result, domain)),
            Err(err) => rejected.push(RejectedName {
                reason: err.to_string(),
                raw,
            }),
        }
    }

    Json(CandidatesResponse { results, rejected })
}

pub(crate) async fn plan_endpoint(
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let segments = plan(&request)?;
    let total_pages = segments.iter().map(|segment| segment.pages).sum();
    Ok(Json(PlanResponse {
        total_pages,
        segments,
    }))
}
