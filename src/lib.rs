//! Competitions - server-rendered competition management
//!
//! Admins create, edit and delete competitions; signed-in users apply to
//! them; admins record a score ("bodovi") for each applicant.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (validation, rendering decisions)
//! - **Services**: Row-count checks and the unified `AppResult` outcome
//! - **Store / Repositories**: Database access, one statement per call
//! - **Views**: Template payloads and the built-in HTML renderer

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

#[cfg(test)]
mod test_utils;

use std::time::Duration;

use axum::{middleware::from_fn, Router};
use tower_http::{
    compression::CompressionLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::constants::MAX_REQUEST_BODY_BYTES;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the application router with its middleware stack
pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config().server.request_timeout_secs);

    Router::new()
        .merge(handlers::routes(state.clone()))
        .layer(from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .layer(CompressionLayer::new())
        .with_state(state)
}
