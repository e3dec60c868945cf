//! Page view state, action notices and confirmations

use serde::{Deserialize, Serialize};

/// Lifecycle of a page's fetched data
///
/// A page starts in `Loading`; its fetch-on-mount moves it to `Ready` or
/// `Failed` exactly once. A failed fetch never keeps partial data around.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Fetch in flight
    Loading,
    /// Data available
    Ready(T),
    /// Fetch failed; holds the banner message
    Failed(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ViewState<T> {
    /// Whether the fetch is still pending
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Data, when ready
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Mutable data, when ready
    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Banner message, when failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Blocking message shown after an action, carried across the redirect as
/// `?notice=<kebab-case>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notice {
    /// Backup request accepted
    BackupStarted,
    /// Backup request rejected
    BackupFailed,
    /// Export download failed
    ExportFailed,
    /// Course delete request failed
    DeleteFailed,
}

impl Notice {
    /// Text shown in the dialog
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BackupStarted => "Backup initiated successfully",
            Self::BackupFailed => "Failed to initiate backup",
            Self::ExportFailed => "Failed to export data",
            Self::DeleteFailed => "Failed to delete course",
        }
    }

    /// Whether the notice reports a failure
    #[must_use]
    pub const fn is_failure(self) -> bool {
        !matches!(self, Self::BackupStarted)
    }

    /// Query-string value
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::BackupStarted => "backup-started",
            Self::BackupFailed => "backup-failed",
            Self::ExportFailed => "export-failed",
            Self::DeleteFailed => "delete-failed",
        }
    }
}

/// Outcome of the confirmation asked before a destructive action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confirmation {
    /// The user agreed
    #[serde(rename = "confirm")]
    Confirmed,
    /// The user backed out
    #[serde(rename = "cancel")]
    Cancelled,
}

/// Optional `?notice=` query parameter
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct NoticeQuery {
    /// Notice to display, if any
    #[serde(default)]
    pub notice: Option<Notice>,
}
