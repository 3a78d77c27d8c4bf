//! Competition model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Competition database model
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Competition {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub author_id: i64,
    pub apply_till: NaiveDate,
}

/// Row of the competitions list, with the author's name resolved
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct CompetitionListItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub author: String,
    pub apply_till: NaiveDate,
}

/// Validated competition fields, shared by add and edit
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionInput {
    pub name: String,
    pub description: String,
    pub apply_till: NaiveDate,
}
