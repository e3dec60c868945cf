//! Instructor dashboard: stats, own courses and recent students

use super::{CourseCard, Layout};
use crate::{
    api_client::DashboardApi,
    view_state::{Confirmation, Notice, ViewState},
};
use askama::Template;
use lms_core::{Course, InstructorStats, Student, config::DashboardConfig};
use tracing::error;

/// Path prefix of per-course delete links on this page
pub const DELETE_BASE: &str = "/instructor/courses";

/// Data behind the instructor page
#[derive(Debug, Clone, PartialEq)]
pub struct InstructorData {
    /// Courses taught by the instructor
    pub courses: Vec<Course>,
    /// Students across those courses
    pub students: Vec<Student>,
    /// Aggregate numbers
    pub stats: InstructorStats,
}

/// Instructor dashboard view-model
#[derive(Debug)]
pub struct InstructorPage {
    state: ViewState<InstructorData>,
    recent_students_limit: usize,
}

impl InstructorPage {
    /// Fresh page in the loading state
    #[must_use]
    pub fn new(settings: &DashboardConfig) -> Self {
        Self {
            state: ViewState::Loading,
            recent_students_limit: settings.recent_students_limit,
        }
    }

    /// Current view state
    #[must_use]
    pub const fn state(&self) -> &ViewState<InstructorData> {
        &self.state
    }

    /// Fetch courses, students and stats behind one loading state
    pub async fn load(&mut self, api: &dyn DashboardApi) {
        let fetched = tokio::try_join!(
            api.instructor_courses(),
            api.instructor_students(),
            api.instructor_stats(),
        );

        self.state = match fetched {
            Ok((courses, students, stats)) => ViewState::Ready(InstructorData {
                courses,
                students,
                stats,
            }),
            Err(e) => {
                error!("Error fetching instructor data: {e}");
                ViewState::Failed("Failed to fetch instructor data".to_string())
            }
        };
    }

    /// Delete one of the instructor's courses after confirmation
    pub async fn delete_course(
        &mut self,
        api: &dyn DashboardApi,
        course_id: &str,
        confirmation: Confirmation,
    ) -> Option<Notice> {
        match self.state.data_mut() {
            Some(data) => {
                super::delete_course(api, &mut data.courses, course_id, confirmation).await
            }
            None => super::delete_course(api, &mut Vec::new(), course_id, confirmation).await,
        }
    }

    /// Template for the current state
    #[must_use]
    pub fn template(&self, layout: Layout) -> InstructorTemplate {
        let data = self.state.data();

        InstructorTemplate {
            layout: layout.at("/instructor"),
            loading: self.state.is_loading(),
            error: self.state.error().map(str::to_string),
            stats: data.map(|d| StatCards::from(&d.stats)),
            cards: data.map(|d| CourseCard::ungated(&d.courses, DELETE_BASE)),
            students: data.map(|d| {
                d.students
                    .iter()
                    .take(self.recent_students_limit)
                    .cloned()
                    .collect()
            }),
        }
    }
}

/// Stats formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCards {
    /// Courses taught
    pub total_courses: String,
    /// Students enrolled
    pub total_students: String,
    /// Completion rate, e.g. `78%`
    pub completion_rate: String,
    /// Average rating out of 5
    pub avg_rating: String,
}

impl From<&InstructorStats> for StatCards {
    fn from(stats: &InstructorStats) -> Self {
        Self {
            total_courses: stats.total_courses.to_string(),
            total_students: stats.total_students.to_string(),
            completion_rate: format!("{}%", stats.completion_rate),
            avg_rating: stats.avg_rating.to_string(),
        }
    }
}

/// Rendered instructor dashboard
#[derive(Debug, Template)]
#[template(path = "instructor.html")]
pub struct InstructorTemplate {
    /// Page chrome
    pub layout: Layout,
    /// Show only the loading indicator
    pub loading: bool,
    /// Error banner
    pub error: Option<String>,
    /// Stat cards, `None` unless loaded
    pub stats: Option<StatCards>,
    /// Every fetched course
    pub cards: Option<Vec<CourseCard>>,
    /// Most recent students, truncated
    pub students: Option<Vec<Student>>,
}
