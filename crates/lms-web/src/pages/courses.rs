//! Course catalog with role-gated controls

use super::{CourseCard, Layout};
use crate::{
    api_client::DashboardApi,
    view_state::{Confirmation, Notice, ViewState},
};
use askama::Template;
use lms_core::{Course, access::can_create_course};
use tracing::error;

/// Path prefix of per-course delete links on this page
pub const DELETE_BASE: &str = "/courses";

const DELETE_QUESTION: &str = "Are you sure you want to delete this course?";

/// Course catalog view-model
#[derive(Debug, Default)]
pub struct CoursesPage {
    state: ViewState<Vec<Course>>,
}

impl CoursesPage {
    /// Fresh page in the loading state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view state
    #[must_use]
    pub const fn state(&self) -> &ViewState<Vec<Course>> {
        &self.state
    }

    /// Fetch the catalog
    pub async fn load(&mut self, api: &dyn DashboardApi) {
        self.state = match api.courses().await {
            Ok(courses) => ViewState::Ready(courses),
            Err(e) => {
                error!("Error fetching courses: {e}");
                ViewState::Failed("Failed to fetch courses".to_string())
            }
        };
    }

    /// Delete a course after confirmation
    ///
    /// The request goes out even if the page never loaded; there is simply
    /// nothing local to remove then.
    pub async fn delete_course(
        &mut self,
        api: &dyn DashboardApi,
        course_id: &str,
        confirmation: Confirmation,
    ) -> Option<Notice> {
        match self.state.data_mut() {
            Some(courses) => super::delete_course(api, courses, course_id, confirmation).await,
            None => super::delete_course(api, &mut Vec::new(), course_id, confirmation).await,
        }
    }

    /// Template for the current state, gated on the viewer
    #[must_use]
    pub fn template(&self, layout: Layout) -> CoursesTemplate {
        let viewer = layout.viewer.as_ref();
        let cards = self
            .state
            .data()
            .map(|courses| CourseCard::gated(courses, viewer, DELETE_BASE));

        CoursesTemplate {
            can_create: can_create_course(viewer),
            loading: self.state.is_loading(),
            error: self.state.error().map(str::to_string),
            cards,
            layout: layout.at("/courses"),
        }
    }
}

/// Rendered course catalog
#[derive(Debug, Template)]
#[template(path = "courses.html")]
pub struct CoursesTemplate {
    /// Page chrome
    pub layout: Layout,
    /// Show only the loading indicator
    pub loading: bool,
    /// Error banner
    pub error: Option<String>,
    /// Create Course button
    pub can_create: bool,
    /// Course cards, `None` unless loaded
    pub cards: Option<Vec<CourseCard>>,
}

/// Confirmation prompt shown before deleting a course
#[derive(Debug, Template)]
#[template(path = "confirm_delete.html")]
pub struct ConfirmDeleteTemplate {
    /// Page chrome
    pub layout: Layout,
    /// Course id as given in the path
    pub course_id: String,
    /// Form target
    pub action: String,
    /// Question asked in the prompt
    pub question: &'static str,
}

impl ConfirmDeleteTemplate {
    /// Prompt for a course listed under `base`
    #[must_use]
    pub fn new(layout: Layout, course_id: &str, base: &str) -> Self {
        Self {
            layout,
            course_id: course_id.to_string(),
            action: format!("{base}/{}/delete", urlencoding::encode(course_id)),
            question: DELETE_QUESTION,
        }
    }
}
