//! Page view-models and their templates
//!
//! Each page is created fresh per request, fetches its own data, and owns
//! its view state exclusively.

pub mod admin;
pub mod courses;
pub mod instructor;

use crate::{
    api_client::DashboardApi,
    view_state::{Confirmation, Notice},
};
use lms_core::{Course, CourseActions, CurrentUser, access::course_actions};
use tracing::{error, info};

/// Page chrome shared by every template: who is viewing and any pending notice
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Signed-in user, `None` when the proxy sent no identity
    pub viewer: Option<CurrentUser>,
    /// Modal notice to show over the page
    pub notice: Option<Notice>,
    /// Page the notice's OK button returns to
    pub path: &'static str,
}

impl Layout {
    /// Layout for a viewer without a notice
    #[must_use]
    pub const fn new(viewer: Option<CurrentUser>) -> Self {
        Self {
            viewer,
            notice: None,
            path: "",
        }
    }

    /// Set the page path
    #[must_use]
    pub fn at(mut self, path: &'static str) -> Self {
        self.path = path;
        self
    }

    /// Attach a notice
    #[must_use]
    pub fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.notice = notice;
        self
    }
}

/// A course together with the controls shown on its card
#[derive(Debug, Clone)]
pub struct CourseCard {
    /// The course
    pub course: Course,
    /// Visible controls
    pub actions: CourseActions,
    /// Link to the delete confirmation
    pub delete_href: String,
}

impl CourseCard {
    fn new(course: Course, actions: CourseActions, delete_base: &str) -> Self {
        let delete_href = format!(
            "{delete_base}/{}/delete",
            urlencoding::encode(&course.id)
        );
        Self {
            course,
            actions,
            delete_href,
        }
    }

    /// Cards gated on the viewer's role and ownership
    pub(crate) fn gated(
        courses: &[Course],
        viewer: Option<&CurrentUser>,
        delete_base: &str,
    ) -> Vec<Self> {
        courses
            .iter()
            .map(|c| Self::new(c.clone(), course_actions(viewer, c), delete_base))
            .collect()
    }

    /// Cards with every control visible
    pub(crate) fn ungated(courses: &[Course], delete_base: &str) -> Vec<Self> {
        courses
            .iter()
            .map(|c| Self::new(c.clone(), CourseActions::ALL, delete_base))
            .collect()
    }
}

/// Confirm, delete, then drop the course from the local list on success
///
/// A cancelled confirmation issues no request. A failed request leaves the
/// list untouched and yields a notice.
pub(crate) async fn delete_course(
    api: &dyn DashboardApi,
    courses: &mut Vec<Course>,
    course_id: &str,
    confirmation: Confirmation,
) -> Option<Notice> {
    if confirmation == Confirmation::Cancelled {
        return None;
    }

    match api.delete_course(course_id).await {
        Ok(()) => {
            courses.retain(|c| c.id != course_id);
            info!(course_id, "Course deleted");
            None
        }
        Err(e) => {
            error!(course_id, "Error deleting course: {e}");
            Some(Notice::DeleteFailed)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! In-memory backend for page tests

    use crate::api_client::DashboardApi;
    use async_trait::async_trait;
    use bytes::Bytes;
    use lms_core::{
        AuditLogEntry, Course, Error, InstructorStats, Result, Student, SystemHealth,
    };
    use std::sync::Mutex;

    /// Canned responses; `None` makes the call fail with a 500
    #[derive(Debug, Default)]
    pub(crate) struct FakeApi {
        pub health: Option<SystemHealth>,
        pub audit_logs: Option<Vec<AuditLogEntry>>,
        pub backup_ok: bool,
        pub export: Option<Bytes>,
        pub courses: Option<Vec<Course>>,
        pub delete_ok: bool,
        pub instructor_courses: Option<Vec<Course>>,
        pub students: Option<Vec<Student>>,
        pub stats: Option<InstructorStats>,
        pub calls: Mutex<Vec<String>>,
    }

    impl FakeApi {
        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }

        fn record(&self, call: impl Into<String>) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(call.into());
            }
        }

        fn answer<T: Clone>(value: Option<&T>, what: &str) -> Result<T> {
            value.cloned().ok_or_else(|| Error::Http {
                status: 500,
                message: what.to_string(),
            })
        }
    }

    #[async_trait]
    impl DashboardApi for FakeApi {
        async fn system_health(&self) -> Result<SystemHealth> {
            self.record("GET /admin/system-health");
            Self::answer(self.health.as_ref(), "GET /admin/system-health")
        }

        async fn audit_logs(&self) -> Result<Vec<AuditLogEntry>> {
            self.record("GET /admin/audit-logs");
            Self::answer(self.audit_logs.as_ref(), "GET /admin/audit-logs")
        }

        async fn trigger_backup(&self) -> Result<()> {
            self.record("POST /admin/backup");
            Self::answer(self.backup_ok.then_some(&()), "POST /admin/backup")
        }

        async fn export_data(&self) -> Result<Bytes> {
            self.record("GET /admin/export-data");
            Self::answer(self.export.as_ref(), "GET /admin/export-data")
        }

        async fn courses(&self) -> Result<Vec<Course>> {
            self.record("GET /courses");
            Self::answer(self.courses.as_ref(), "GET /courses")
        }

        async fn delete_course(&self, course_id: &str) -> Result<()> {
            self.record(format!("DELETE /courses/{course_id}"));
            Self::answer(self.delete_ok.then_some(&()), "DELETE /courses")
        }

        async fn instructor_courses(&self) -> Result<Vec<Course>> {
            self.record("GET /instructor/courses");
            Self::answer(self.instructor_courses.as_ref(), "GET /instructor/courses")
        }

        async fn instructor_students(&self) -> Result<Vec<Student>> {
            self.record("GET /instructor/students");
            Self::answer(self.students.as_ref(), "GET /instructor/students")
        }

        async fn instructor_stats(&self) -> Result<InstructorStats> {
            self.record("GET /instructor/stats");
            Self::answer(self.stats.as_ref(), "GET /instructor/stats")
        }
    }

    pub(crate) fn course(id: &str, instructor: &str, status: Option<&str>) -> Course {
        Course {
            id: id.to_string(),
            title: format!("Course {id}"),
            category: "Science".to_string(),
            description: format!("About {id}"),
            instructor: Some(lms_core::types::InstructorRef::Id(instructor.to_string())),
            enrolled_students: Some(vec![serde_json::json!("s1"), serde_json::json!("s2")]),
            duration: None,
            status: status.map(str::to_string),
        }
    }
}
