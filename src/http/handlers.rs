//! Request handlers for both services.
//!
//! Both answer `GET /` with status 200, whatever happened upstream.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::environment::{discover_targets, ServiceIdentity};
use crate::fanout::FetchOutcome;
use crate::http::server::{AppState, ServiceKind};
use crate::observability::metrics;

/// Content type existing clients of common-service receive.
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// `GET /` for common-service.
pub async fn identity_handler(State(state): State<AppState>) -> impl IntoResponse {
    metrics::record_request(ServiceKind::Common.name());
    (
        [(header::CONTENT_TYPE, JSON_UTF8)],
        Json(ServiceIdentity::resolve(state.env.as_ref())),
    )
}

/// `GET /` for order-service.
///
/// Blocks until every discovered target has produced an outcome.
pub async fn aggregate_handler(State(state): State<AppState>) -> impl IntoResponse {
    metrics::record_request(ServiceKind::Order.name());

    let identity = ServiceIdentity::resolve(state.env.as_ref());
    let targets = discover_targets(state.env.as_ref());
    let outcomes = state.fetcher.scatter_gather(targets).await;

    (StatusCode::OK, render_aggregate(&identity, &outcomes))
}

/// `HEAD /` for both services.
///
/// Without this, HEAD falls through to the GET handler and order-service
/// would fan out for a request that discards the body.
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")])
}

/// Build the order-service body.
///
/// The identity fields are deliberately left unquoted, so the first line is
/// not valid JSON. Clients of the existing service parse it as-is.
pub fn render_aggregate(identity: &ServiceIdentity, outcomes: &[FetchOutcome]) -> String {
    let results = outcomes
        .iter()
        .map(FetchOutcome::as_wire)
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{{\"service\":{}, \"version\":{}}}\n{}\n",
        identity.service, identity.version, results
    )
}
