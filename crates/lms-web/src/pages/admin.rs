//! Administrative page: system health, audit feed, backup and export

use super::Layout;
use crate::{
    api_client::DashboardApi,
    view_state::{Notice, ViewState},
};
use askama::Template;
use bytes::Bytes;
use chrono::NaiveDate;
use lms_core::{AuditLogEntry, SystemHealth, config::DashboardConfig};
use tracing::{error, info};

/// Data behind the admin page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminData {
    /// Health snapshot
    pub health: SystemHealth,
    /// Audit feed, most recent first
    pub audit_logs: Vec<AuditLogEntry>,
}

/// A system setting shown on the page; the switches are display-only
#[derive(Debug, Clone, Copy)]
pub struct SettingToggle {
    /// Setting name
    pub label: &'static str,
    /// One-line explanation
    pub description: &'static str,
    /// Initial switch position
    pub enabled: bool,
}

const SETTING_TOGGLES: [SettingToggle; 3] = [
    SettingToggle {
        label: "User Registration",
        description: "Allow new user registrations",
        enabled: true,
    },
    SettingToggle {
        label: "Email Verification",
        description: "Require email verification for new accounts",
        enabled: true,
    },
    SettingToggle {
        label: "Maintenance Mode",
        description: "Enable system maintenance mode",
        enabled: false,
    },
];

/// A file handed to the browser as an attachment
#[derive(Debug, Clone)]
pub struct Download {
    /// Suggested file name
    pub filename: String,
    /// MIME type
    pub content_type: &'static str,
    /// File contents
    pub bytes: Bytes,
}

/// Name of the CSV export for a given day
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("system-data-{}.csv", date.format("%Y-%m-%d"))
}

/// Download the system data export
///
/// # Errors
///
/// Returns [`Notice::ExportFailed`] if the backend request fails.
pub async fn export(api: &dyn DashboardApi, today: NaiveDate) -> Result<Download, Notice> {
    match api.export_data().await {
        Ok(bytes) => {
            let filename = export_filename(today);
            info!(%filename, size = bytes.len(), "Export downloaded");
            Ok(Download {
                filename,
                content_type: "text/csv",
                bytes,
            })
        }
        Err(e) => {
            error!("Error exporting data: {e}");
            Err(Notice::ExportFailed)
        }
    }
}

/// Admin page view-model
#[derive(Debug)]
pub struct AdminPage {
    state: ViewState<AdminData>,
    audit_log_limit: usize,
}

impl AdminPage {
    /// Fresh page in the loading state
    #[must_use]
    pub fn new(settings: &DashboardConfig) -> Self {
        Self {
            state: ViewState::Loading,
            audit_log_limit: settings.audit_log_limit,
        }
    }

    /// Current view state
    #[must_use]
    pub const fn state(&self) -> &ViewState<AdminData> {
        &self.state
    }

    /// Fetch health and audit logs together; either failing fails the page
    pub async fn load(&mut self, api: &dyn DashboardApi) {
        self.state = match tokio::try_join!(api.system_health(), api.audit_logs()) {
            Ok((health, audit_logs)) => ViewState::Ready(AdminData { health, audit_logs }),
            Err(e) => {
                error!("Error fetching system data: {e}");
                ViewState::Failed("Failed to fetch system data".to_string())
            }
        };
    }

    /// Trigger a backup and refetch on success
    pub async fn backup(&mut self, api: &dyn DashboardApi) -> Notice {
        match api.trigger_backup().await {
            Ok(()) => {
                info!("Backup initiated");
                self.load(api).await;
                Notice::BackupStarted
            }
            Err(e) => {
                error!("Error initiating backup: {e}");
                Notice::BackupFailed
            }
        }
    }

    /// Template for the current state
    #[must_use]
    pub fn template(&self, layout: Layout) -> AdminTemplate {
        let data = self.state.data().map(|d| AdminData {
            health: d.health.clone(),
            audit_logs: d
                .audit_logs
                .iter()
                .take(self.audit_log_limit)
                .cloned()
                .collect(),
        });

        AdminTemplate {
            layout: layout.at("/admin"),
            loading: self.state.is_loading(),
            error: self.state.error().map(str::to_string),
            data,
            toggles: &SETTING_TOGGLES,
        }
    }
}

/// Rendered admin page
#[derive(Debug, Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    /// Page chrome
    pub layout: Layout,
    /// Show only the loading indicator
    pub loading: bool,
    /// Error banner
    pub error: Option<String>,
    /// Health and the truncated audit feed
    pub data: Option<AdminData>,
    /// Display-only settings
    pub toggles: &'static [SettingToggle],
}
