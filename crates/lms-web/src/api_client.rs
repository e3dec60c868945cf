//! HTTP client for the LMS REST backend

use async_trait::async_trait;
use bytes::Bytes;
use lms_core::{
    AuditLogEntry, Course, Error, InstructorStats, Result, Student, SystemHealth,
    config::BackendConfig,
};
use reqwest::{Client, Method, RequestBuilder, Response, header};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Backend operations the dashboard pages depend on
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// GET `/admin/system-health`
    async fn system_health(&self) -> Result<SystemHealth>;

    /// GET `/admin/audit-logs`, most recent first
    async fn audit_logs(&self) -> Result<Vec<AuditLogEntry>>;

    /// POST `/admin/backup`; the job itself is not tracked
    async fn trigger_backup(&self) -> Result<()>;

    /// GET `/admin/export-data` as raw CSV bytes
    async fn export_data(&self) -> Result<Bytes>;

    /// GET `/courses`
    async fn courses(&self) -> Result<Vec<Course>>;

    /// DELETE `/courses/:id`
    async fn delete_course(&self, course_id: &str) -> Result<()>;

    /// GET `/instructor/courses`
    async fn instructor_courses(&self) -> Result<Vec<Course>>;

    /// GET `/instructor/students`
    async fn instructor_students(&self) -> Result<Vec<Student>>;

    /// GET `/instructor/stats`
    async fn instructor_stats(&self) -> Result<InstructorStats>;
}

/// API client for making HTTP requests to the LMS backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    authorization: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            authorization: None,
        }
    }

    /// Build a client from the backend configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| Error::Configuration {
            message: format!("Failed to build HTTP client: {e}"),
        })?;

        let mut api = Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorization: None,
        };
        if let Some(ref token) = config.api_token {
            api = api.with_bearer_token(token);
        }
        Ok(api)
    }

    /// Set a bearer token sent with every request
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl AsRef<str>) -> Self {
        self.authorization = Some(format!("Bearer {}", token.as_ref()));
        self
    }

    /// Client acting on behalf of a caller; their `Authorization` header wins
    /// over the configured token
    #[must_use]
    pub fn for_caller(&self, authorization: Option<&str>) -> Self {
        let mut client = self.clone();
        if let Some(value) = authorization {
            client.authorization = Some(value.to_string());
        }
        client
    }

    /// Backend base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.client.request(method, url);

        if let Some(ref authorization) = self.authorization {
            request = request.header(header::AUTHORIZATION, authorization);
        }

        request
    }

    async fn send(&self, method: Method, path: &str) -> Result<Response> {
        let what = format!("{method} {path}");
        debug!("Calling backend: {what}");

        let response = self
            .request(method, path)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("{what}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                message: what,
            });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, path)
            .await?
            .json::<T>()
            .await
            .map_err(|e| Error::Decode(format!("GET {path}: {e}")))
    }
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn system_health(&self) -> Result<SystemHealth> {
        self.get_json("/admin/system-health").await
    }

    async fn audit_logs(&self) -> Result<Vec<AuditLogEntry>> {
        self.get_json("/admin/audit-logs").await
    }

    async fn trigger_backup(&self) -> Result<()> {
        self.send(Method::POST, "/admin/backup").await.map(drop)
    }

    async fn export_data(&self) -> Result<Bytes> {
        let path = "/admin/export-data";
        self.send(Method::GET, path)
            .await?
            .bytes()
            .await
            .map_err(|e| Error::Decode(format!("GET {path}: {e}")))
    }

    async fn courses(&self) -> Result<Vec<Course>> {
        self.get_json("/courses").await
    }

    async fn delete_course(&self, course_id: &str) -> Result<()> {
        let path = format!("/courses/{}", urlencoding::encode(course_id));
        self.send(Method::DELETE, &path).await.map(drop)
    }

    async fn instructor_courses(&self) -> Result<Vec<Course>> {
        self.get_json("/instructor/courses").await
    }

    async fn instructor_students(&self) -> Result<Vec<Student>> {
        self.get_json("/instructor/students").await
    }

    async fn instructor_stats(&self) -> Result<InstructorStats> {
        self.get_json("/instructor/stats").await
    }
}
