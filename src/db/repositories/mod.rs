//! Database repositories
//!
//! Repositories handle all direct database interactions. Every method issues
//! exactly one statement.

pub mod competition_repo;
pub mod competitor_repo;

pub use competition_repo::CompetitionRepository;
pub use competitor_repo::CompetitorRepository;
