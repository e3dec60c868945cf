//! Data transfer objects returned by the LMS backend
//!
//! These mirror the backend's JSON (camelCase, Mongo-style `_id`) and are
//! displayed as-is. The only logic here is display defaulting.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a user as issued by the backend
pub type UserId = String;

/// Identifier of a course as issued by the backend
pub type CourseId = String;

/// Course status value that renders with the "published" badge
pub const PUBLISHED_STATUS: &str = "published";

/// Label shown for courses without a status
pub const DRAFT_LABEL: &str = "Draft";

/// Label shown for courses without a duration
pub const SELF_PACED_LABEL: &str = "Self-paced";

/// Label shown for students without recorded activity
pub const NEVER_ACTIVE_LABEL: &str = "Never";

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// System health snapshot shown on the admin page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemHealth {
    /// Overall status, e.g. `healthy`
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Uptime as a display string
    #[serde(deserialize_with = "null_as_default")]
    pub uptime: String,
    /// When the last backup ran, as a display string
    #[serde(deserialize_with = "null_as_default")]
    pub last_backup: String,
    /// Number of users currently active
    #[serde(deserialize_with = "null_as_default")]
    pub active_users: u64,
}

impl Default for SystemHealth {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
            uptime: "99.9%".to_string(),
            last_backup: "2 hours ago".to_string(),
            active_users: 0,
        }
    }
}

/// One entry of the admin audit feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditLogEntry {
    /// What happened, e.g. `login`
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    /// Who did it
    #[serde(deserialize_with = "null_as_default")]
    pub user_email: String,
    /// When, as a display string
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
}

impl AuditLogEntry {
    /// Login entries get the success icon; everything else the warning icon
    #[must_use]
    pub fn is_login(&self) -> bool {
        self.action == "login"
    }
}

/// The instructor of a course, either a bare id or a populated user document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstructorRef {
    /// Bare user id
    Id(UserId),
    /// Populated user document
    Populated {
        /// User id
        #[serde(rename = "_id")]
        id: UserId,
        /// Display name, when populated
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl InstructorRef {
    /// The instructor's user id
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) | Self::Populated { id, .. } => id,
        }
    }
}

/// A course in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course id
    #[serde(rename = "_id")]
    pub id: CourseId,
    /// Title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Category
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Free-text description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Owning instructor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<InstructorRef>,
    /// Enrolled students; only the count is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolled_students: Option<Vec<serde_json::Value>>,
    /// Duration as a display string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Publication status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Course {
    /// Owning instructor's id, if known
    #[must_use]
    pub fn instructor_id(&self) -> Option<&str> {
        self.instructor.as_ref().map(InstructorRef::id)
    }

    /// Number of enrolled students (0 when the list is missing)
    #[must_use]
    pub fn enrolled_count(&self) -> usize {
        self.enrolled_students.as_ref().map_or(0, Vec::len)
    }

    /// Duration label, `Self-paced` when missing
    #[must_use]
    pub fn duration_label(&self) -> &str {
        self.duration
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(SELF_PACED_LABEL)
    }

    /// Status label, `Draft` when missing
    #[must_use]
    pub fn status_label(&self) -> &str {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DRAFT_LABEL)
    }

    /// Badge styling for the status label
    #[must_use]
    pub fn badge(&self) -> StatusBadge {
        if self.status.as_deref() == Some(PUBLISHED_STATUS) {
            StatusBadge::Published
        } else {
            StatusBadge::Draft
        }
    }
}

/// Visual style of a course status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    /// Green
    Published,
    /// Yellow; anything that is not `published`
    Draft,
}

impl StatusBadge {
    /// CSS classes for the badge
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Published => "badge badge-green",
            Self::Draft => "badge badge-yellow",
        }
    }
}

/// A student row on the instructor page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Student {
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Email address
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    /// Course the student is enrolled in
    #[serde(deserialize_with = "null_as_default")]
    pub course_name: String,
    /// Completion percentage (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    /// Last activity as a display string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<String>,
}

impl Student {
    /// Progress clamped to 0..=100, 0 when missing
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.progress
            .filter(|p| p.is_finite())
            .map_or(0.0, |p| p.clamp(0.0, 100.0))
    }

    /// Last activity label, `Never` when missing
    #[must_use]
    pub fn last_activity_label(&self) -> &str {
        self.last_activity
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or(NEVER_ACTIVE_LABEL)
    }

    /// Avatar initial: first character of the name, `S` when there is none
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('S')
    }
}

/// Aggregate numbers for the instructor page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstructorStats {
    /// Courses taught
    #[serde(deserialize_with = "null_as_default")]
    pub total_courses: u64,
    /// Students across all courses
    #[serde(deserialize_with = "null_as_default")]
    pub total_students: u64,
    /// Completion rate in percent
    #[serde(deserialize_with = "null_as_default")]
    pub completion_rate: f64,
    /// Average rating on a 0-5 scale
    #[serde(deserialize_with = "null_as_default")]
    pub avg_rating: f64,
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn course(json: serde_json::Value) -> Course {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_course_deserializes_backend_shape() {
        let course = course(serde_json::json!({
            "_id": "c1",
            "title": "Rust 101",
            "category": "Programming",
            "description": "Ownership and borrowing",
            "instructor": "u7",
            "enrolledStudents": ["s1", "s2", "s3"],
            "duration": "6 weeks",
            "status": "published"
        }));

        assert_eq!(course.id, "c1");
        assert_eq!(course.instructor_id(), Some("u7"));
        assert_eq!(course.enrolled_count(), 3);
        assert_eq!(course.duration_label(), "6 weeks");
        assert_eq!(course.status_label(), "published");
        assert_eq!(course.badge(), StatusBadge::Published);
    }

    #[test]
    fn test_course_with_populated_instructor() {
        let course = course(serde_json::json!({
            "_id": "c2",
            "instructor": {"_id": "u9", "name": "Ada"}
        }));

        assert_eq!(course.instructor_id(), Some("u9"));
    }

    #[test]
    fn test_course_display_defaults() {
        let course = course(serde_json::json!({"_id": "c3"}));

        assert_eq!(course.enrolled_count(), 0);
        assert_eq!(course.duration_label(), "Self-paced");
        assert_eq!(course.status_label(), "Draft");
        assert_eq!(course.badge(), StatusBadge::Draft);
        assert_eq!(course.badge().css_class(), "badge badge-yellow");
        assert!(course.instructor_id().is_none());
    }

    #[rstest]
    #[case(Some("published"), "badge badge-green")]
    #[case(Some("archived"), "badge badge-yellow")]
    #[case(Some("Published"), "badge badge-yellow")]
    #[case(None, "badge badge-yellow")]
    fn test_badge_styling(#[case] status: Option<&str>, #[case] expected: &str) {
        let course = course(serde_json::json!({"_id": "c", "status": status}));
        assert_eq!(course.badge().css_class(), expected);
    }

    #[rstest]
    #[case(Some(67.0), 67.0)]
    #[case(None, 0.0)]
    #[case(Some(140.0), 100.0)]
    #[case(Some(-5.0), 0.0)]
    #[case(Some(f64::NAN), 0.0)]
    fn test_progress_percent(#[case] progress: Option<f64>, #[case] expected: f64) {
        let student = Student {
            progress,
            ..Student::default()
        };
        assert_eq!(student.progress_percent(), expected);
    }

    #[test]
    fn test_student_defaults() {
        let student: Student = serde_json::from_value(serde_json::json!({
            "email": "anon@example.com"
        }))
        .unwrap();

        assert_eq!(student.initial(), 'S');
        assert_eq!(student.last_activity_label(), "Never");
        assert_eq!(student.progress_percent(), 0.0);

        let named = Student {
            name: "Grace".to_string(),
            last_activity: Some("yesterday".to_string()),
            ..Student::default()
        };
        assert_eq!(named.initial(), 'G');
        assert_eq!(named.last_activity_label(), "yesterday");
    }

    #[test]
    fn test_system_health_fills_missing_fields() {
        let health: SystemHealth =
            serde_json::from_value(serde_json::json!({"status": "degraded", "activeUsers": 12}))
                .unwrap();

        assert_eq!(health.status, "degraded");
        assert_eq!(health.active_users, 12);
        assert_eq!(health.uptime, "99.9%");
        assert_eq!(health.last_backup, "2 hours ago");
    }

    #[test]
    fn test_audit_log_entry() {
        let entry: AuditLogEntry = serde_json::from_value(serde_json::json!({
            "action": "login",
            "userEmail": "admin@example.com",
            "timestamp": "2024-05-01 10:00"
        }))
        .unwrap();

        assert!(entry.is_login());
        assert_eq!(entry.user_email, "admin@example.com");

        let other = AuditLogEntry {
            action: "course.delete".to_string(),
            ..AuditLogEntry::default()
        };
        assert!(!other.is_login());
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let courses: Vec<Course> = serde_json::from_value(serde_json::json!([
            {"_id": "c1", "title": null, "category": null, "description": null},
            {"_id": "c2", "title": "Art"}
        ]))
        .unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].title, "");
        assert_eq!(courses[1].title, "Art");

        let students: Vec<Student> = serde_json::from_value(serde_json::json!([
            {"name": null, "email": null, "courseName": null, "progress": null},
            {"name": "Grace", "email": "grace@example.com"}
        ]))
        .unwrap();
        assert_eq!(students[0].initial(), 'S');
        assert_eq!(students[0].progress_percent(), 0.0);
        assert_eq!(students[1].initial(), 'G');

        let health: SystemHealth =
            serde_json::from_value(serde_json::json!({"status": "healthy", "activeUsers": null}))
                .unwrap();
        assert_eq!(health.active_users, 0);

        let entry: AuditLogEntry =
            serde_json::from_value(serde_json::json!({"action": "login", "userEmail": null}))
                .unwrap();
        assert_eq!(entry.user_email, "");

        let stats: InstructorStats =
            serde_json::from_value(serde_json::json!({"totalCourses": 2, "avgRating": null}))
                .unwrap();
        assert_eq!(stats.avg_rating, 0.0);
    }

    #[test]
    fn test_instructor_stats_defaults() {
        let stats: InstructorStats =
            serde_json::from_value(serde_json::json!({"totalCourses": 4, "avgRating": 4.5}))
                .unwrap();

        assert_eq!(stats.total_courses, 4);
        assert_eq!(stats.total_students, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.avg_rating, 4.5);
    }
}
