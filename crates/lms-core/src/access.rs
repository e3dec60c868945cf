//! Role-based visibility of page controls
//!
//! The dashboard only hides controls; the backend enforces authorization.
//! Everything here is a pure function of the viewer and the course.

use crate::types::{Course, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of the signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full control over every course
    Admin,
    /// Controls over the courses they own
    Instructor,
    /// Read-only
    Student,
    /// Any role string the dashboard does not recognize
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Parse a role as sent by the auth proxy; unrecognized values map to [`Role::Unknown`]
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "instructor" => Self::Instructor,
            "student" => Self::Student,
            _ => Self::Unknown,
        }
    }

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Instructor => "instructor",
            Self::Student => "student",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user a page is rendered for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Backend user id
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Role
    pub role: Role,
}

impl CurrentUser {
    /// Create a user
    pub fn new(id: impl Into<UserId>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    /// Whether this user is the course's instructor
    #[must_use]
    pub fn owns(&self, course: &Course) -> bool {
        course.instructor_id() == Some(self.id.as_str())
    }
}

/// Per-course controls visible to a viewer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseActions {
    /// Edit button
    pub edit: bool,
    /// Delete button
    pub delete: bool,
}

impl CourseActions {
    /// Every control visible
    pub const ALL: Self = Self {
        edit: true,
        delete: true,
    };

    /// Nothing visible
    pub const NONE: Self = Self {
        edit: false,
        delete: false,
    };

    /// Whether any control is visible
    #[must_use]
    pub const fn any(self) -> bool {
        self.edit || self.delete
    }
}

/// Whether the viewer sees the Create Course button
#[must_use]
pub fn can_create_course(user: Option<&CurrentUser>) -> bool {
    matches!(user.map(|u| u.role), Some(Role::Admin | Role::Instructor))
}

/// Controls the viewer sees on a course card
#[must_use]
pub fn course_actions(user: Option<&CurrentUser>, course: &Course) -> CourseActions {
    match user {
        Some(u) if u.role == Role::Admin => CourseActions::ALL,
        Some(u) if u.role == Role::Instructor && u.owns(course) => CourseActions::ALL,
        _ => CourseActions::NONE,
    }
}
