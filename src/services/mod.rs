//! Business logic services

pub mod auth_service;
pub mod competition_service;

pub use auth_service::AuthService;
pub use competition_service::CompetitionService;
