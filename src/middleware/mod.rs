//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::{admin_middleware, auth_middleware, AuthenticatedUser};
pub use logging::logging_middleware;
