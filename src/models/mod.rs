//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod competition;
pub mod competitor;

pub use competition::*;
pub use competitor::*;
