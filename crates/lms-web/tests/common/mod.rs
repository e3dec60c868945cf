//! Shared helpers for dashboard integration tests

#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use lms_core::Config;
use serde_json::json;
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Dashboard router pointed at a mock backend
pub fn app_for(backend: &MockServer) -> Router {
    let mut config = Config::default();
    config.backend.base_url = backend.uri();
    config.backend.request_timeout_secs = Some(5);
    lms_web::build_app(config).unwrap()
}

/// Identity headers as the auth proxy sends them
pub fn as_user(
    builder: axum::http::request::Builder,
    id: &str,
    role: &str,
) -> axum::http::request::Builder {
    builder.header("x-user-id", id).header("x-user-role", role)
}

/// Send one request and collect the response body as text
pub async fn send(
    app: Router,
    request: Request<Body>,
) -> (StatusCode, axum::http::HeaderMap, String) {
    let response: Response<Body> = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8_lossy(&bytes).into_owned())
}

/// GET with optional identity
pub fn get(uri: &str, user: Option<(&str, &str)>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some((id, role)) = user {
        builder = as_user(builder, id, role);
    }
    builder.body(Body::empty()).unwrap()
}

/// Form POST with optional identity
pub fn post_form(uri: &str, form: &str, user: Option<(&str, &str)>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded");
    if let Some((id, role)) = user {
        builder = as_user(builder, id, role);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

/// Mount a JSON response for `GET <route>`
pub async fn mock_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Backend catalog with one course per instructor
pub fn catalog() -> serde_json::Value {
    json!([
        {
            "_id": "c1",
            "title": "Intro to Rust",
            "category": "Programming",
            "description": "Ownership and borrowing",
            "instructor": "u1",
            "enrolledStudents": ["s1", "s2", "s3"],
            "duration": "6 weeks",
            "status": "published"
        },
        {
            "_id": "c2",
            "title": "Art History",
            "category": "Humanities",
            "description": "From caves to canvas",
            "instructor": "u2"
        }
    ])
}
