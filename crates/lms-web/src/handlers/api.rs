//! Liveness and static asset handlers

use axum::{http::header, response::IntoResponse};

/// Liveness probe
pub async fn health_check() -> &'static str {
    "OK"
}

/// Dashboard stylesheet
pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../static/dashboard.css"),
    )
}
