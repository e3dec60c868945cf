//! LMS dashboard web interface
//!
//! Server-rendered admin, course catalog and instructor pages backed by the
//! LMS REST API.

#![forbid(unsafe_code)]

pub mod api_client;
pub mod auth;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;
pub mod view_state;

// Re-export the main entry points
pub use api_client::{ApiClient, DashboardApi};
pub use server::{build_app, serve};
pub use state::AppState;
