//! Route definitions for the dashboard

use crate::{
    handlers::{actions, api, pages},
    middleware::request_logging,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

/// Build the complete dashboard router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Pages
        .route("/", get(pages::index))
        .route("/admin", get(pages::admin_page))
        .route("/courses", get(pages::courses_page))
        .route("/instructor", get(pages::instructor_page))
        // Admin actions
        .route("/admin/backup", post(actions::backup))
        .route("/admin/export", get(actions::export))
        // Course deletion: confirmation prompt, then the decision
        .route(
            "/courses/:id/delete",
            get(pages::confirm_course_delete).post(actions::delete_course),
        )
        .route(
            "/instructor/courses/:id/delete",
            get(pages::confirm_instructor_course_delete).post(actions::delete_instructor_course),
        )
        // Assets and liveness
        .route("/static/dashboard.css", get(api::stylesheet))
        .route("/health", get(api::health_check))
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(request_logging))
}
