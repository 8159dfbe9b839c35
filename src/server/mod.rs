//! HTTP surface: `GET /?title=..&location=..` returns a JSON array of jobs

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::job_finder::{JobFinder, to_json};
use crate::models::SearchQuery;

/// Number of sources that failed while answering the request
pub const SOURCE_FAILURES_HEADER: &str = "x-source-failures";

pub fn build_router(finder: JobFinder) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(SOURCE_FAILURES_HEADER)]);

    Router::new()
        .route("/", get(search))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(finder)
}

async fn search(State(finder): State<JobFinder>, Query(query): Query<SearchQuery>) -> Response {
    let outcome = finder.search(&query.title, &query.location).await;

    let (status, body) = match to_json(&outcome.jobs) {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => {
            error!(error = %e, "Failed to encode search results");
            (StatusCode::INTERNAL_SERVER_ERROR, "[]".to_string())
        }
    };

    let mut response = (status, [(header::CONTENT_TYPE, "application/json")], body).into_response();
    response
        .headers_mut()
        .insert(
            HeaderName::from_static(SOURCE_FAILURES_HEADER),
            HeaderValue::from(outcome.failures.len()),
        );
    response
}

async fn health() -> &'static str {
    "ok"
}
