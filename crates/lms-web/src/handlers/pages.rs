//! Page handlers
//!
//! Every request builds a fresh page, fetches on behalf of the caller, and
//! renders the result.

use super::render;
use crate::{
    auth::AuthContext,
    pages::{
        Layout,
        admin::AdminPage,
        courses::{self, ConfirmDeleteTemplate, CoursesPage},
        instructor::{self, InstructorPage},
    },
    state::AppState,
    view_state::NoticeQuery,
};
use axum::{
    extract::{Path, Query, State},
    response::{Redirect, Response},
};
use std::sync::Arc;

/// Landing page; the catalog is the default view
pub async fn index() -> Redirect {
    Redirect::to("/courses")
}

/// Admin page, with an optional notice carried over from an action
pub async fn admin_page(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Query(query): Query<NoticeQuery>,
) -> Response {
    let api = state.api_for(auth.authorization.as_deref());
    let mut page = AdminPage::new(&state.config.dashboard);
    page.load(&api).await;

    render(&page.template(Layout::new(auth.user).with_notice(query.notice)))
}

/// Course catalog
pub async fn courses_page(State(state): State<Arc<AppState>>, auth: AuthContext) -> Response {
    let api = state.api_for(auth.authorization.as_deref());
    let mut page = CoursesPage::new();
    page.load(&api).await;

    render(&page.template(Layout::new(auth.user)))
}

/// Instructor dashboard
pub async fn instructor_page(State(state): State<Arc<AppState>>, auth: AuthContext) -> Response {
    let api = state.api_for(auth.authorization.as_deref());
    let mut page = InstructorPage::new(&state.config.dashboard);
    page.load(&api).await;

    render(&page.template(Layout::new(auth.user)))
}

/// Delete confirmation for a catalog course
pub async fn confirm_course_delete(auth: AuthContext, Path(course_id): Path<String>) -> Response {
    render(&ConfirmDeleteTemplate::new(
        Layout::new(auth.user),
        &course_id,
        courses::DELETE_BASE,
    ))
}

/// Delete confirmation for an instructor's course
pub async fn confirm_instructor_course_delete(
    auth: AuthContext,
    Path(course_id): Path<String>,
) -> Response {
    render(&ConfirmDeleteTemplate::new(
        Layout::new(auth.user),
        &course_id,
        instructor::DELETE_BASE,
    ))
}
