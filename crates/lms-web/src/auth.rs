//! Auth context extractor
//!
//! Identity is supplied by the fronting auth proxy as `X-User-Id` and
//! `X-User-Role` headers. The caller's `Authorization` header is kept so
//! backend calls are made on their behalf.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use lms_core::{CurrentUser, Role};

/// Header carrying the signed-in user's id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Header carrying the signed-in user's role
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Who is asking, as far as the dashboard can tell
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    /// Signed-in user, `None` when either identity header is missing
    pub user: Option<CurrentUser>,
    /// Raw `Authorization` header to forward to the backend
    pub authorization: Option<String>,
}

impl AuthContext {
    /// Read the context from request headers
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let text = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        let user = match (text(USER_ID_HEADER), text(USER_ROLE_HEADER)) {
            (Some(id), Some(role)) => Some(CurrentUser::new(id, Role::parse(role))),
            _ => None,
        };

        Self {
            user,
            authorization: text(header::AUTHORIZATION.as_str()).map(String::from),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
