//! Handlers for state-changing actions

use super::render;
use crate::{
    auth::AuthContext,
    pages::{
        Layout,
        admin::{self, AdminPage},
        courses::CoursesPage,
        instructor::InstructorPage,
    },
    state::AppState,
    view_state::Confirmation,
};
use axum::{
    Form,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

/// Body of the delete confirmation form
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeleteForm {
    /// What the user chose
    pub decision: Confirmation,
}

/// Trigger a backup and render the admin page with the outcome
pub async fn backup(State(state): State<Arc<AppState>>, auth: AuthContext) -> Response {
    let api = state.api_for(auth.authorization.as_deref());
    let mut page = AdminPage::new(&state.config.dashboard);
    page.load(&api).await;

    let notice = page.backup(&api).await;

    render(&page.template(Layout::new(auth.user).with_notice(Some(notice))))
}

/// Download the system export as a dated CSV attachment
pub async fn export(State(state): State<Arc<AppState>>, auth: AuthContext) -> Response {
    let api = state.api_for(auth.authorization.as_deref());

    match admin::export(&api, Utc::now().date_naive()).await {
        Ok(download) => (
            [
                (header::CONTENT_TYPE, download.content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", download.filename),
                ),
            ],
            download.bytes,
        )
            .into_response(),
        Err(notice) => Redirect::to(&format!("/admin?notice={}", notice.as_query())).into_response(),
    }
}

/// Apply the decision on a catalog course and render the catalog
pub async fn delete_course(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(course_id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Response {
    let api = state.api_for(auth.authorization.as_deref());
    let mut page = CoursesPage::new();
    page.load(&api).await;

    let notice = page.delete_course(&api, &course_id, form.decision).await;

    render(&page.template(Layout::new(auth.user).with_notice(notice)))
}

/// Apply the decision on an instructor course and render the dashboard
pub async fn delete_instructor_course(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(course_id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Response {
    let api = state.api_for(auth.authorization.as_deref());
    let mut page = InstructorPage::new(&state.config.dashboard);
    page.load(&api).await;

    let notice = page.delete_course(&api, &course_id, form.decision).await;

    render(&page.template(Layout::new(auth.user).with_notice(notice)))
}
