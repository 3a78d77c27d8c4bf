//! Competitor (application) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user's application to a competition, optionally scored
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Competitor {
    pub id: i64,
    pub id_users: i64,
    pub id_competitions: i64,
    /// Unset until an admin records a score
    pub bodovi: Option<f64>,
}

/// Row of the applicants list for one competition
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct AppliedItem {
    /// Competitor row id
    pub id: i64,
    /// Competition name
    pub name: String,
    /// Applicant's user name
    pub korisnik: String,
    pub bodovi: Option<f64>,
}
