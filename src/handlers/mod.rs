//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod competitions;
pub mod health;

use axum::Router;

use crate::{constants::COMPETITIONS_PATH, state::AppState};

/// Create all page routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest(COMPETITIONS_PATH, competitions::routes(state))
}
