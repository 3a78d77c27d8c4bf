//! Storage seam used by the service layer
//!
//! `CompetitionStore` is the only way services reach persisted state. The
//! production implementation wraps the repositories around a shared `PgPool`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{AppliedItem, Competition, CompetitionInput, CompetitionListItem, Competitor},
};

use super::repositories::{CompetitionRepository, CompetitorRepository};

/// Persistence operations for competitions and their applicants.
///
/// Write methods report affected row counts; interpreting them is up to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompetitionStore: Send + Sync {
    /// Check that the backing storage answers
    async fn ping(&self) -> AppResult<()>;

    async fn list_competitions(&self) -> AppResult<Vec<CompetitionListItem>>;

    async fn find_competition(&self, id: i64) -> AppResult<Option<Competition>>;

    async fn insert_competition(&self, input: &CompetitionInput, author_id: i64) -> AppResult<u64>;

    async fn update_competition(&self, id: i64, input: &CompetitionInput) -> AppResult<u64>;

    async fn delete_competition(&self, id: i64) -> AppResult<u64>;

    async fn has_applied(&self, user_id: i64, competition_id: i64) -> AppResult<bool>;

    async fn insert_competitor(&self, user_id: i64, competition_id: i64) -> AppResult<u64>;

    async fn list_applied(&self, competition_id: i64) -> AppResult<Vec<AppliedItem>>;

    async fn find_competitor(&self, id: i64) -> AppResult<Option<Competitor>>;

    /// Returns the competitor's competition id when a row was updated
    async fn set_score(&self, id: i64, bodovi: f64) -> AppResult<Option<i64>>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgCompetitionStore {
    pool: PgPool,
}

impl PgCompetitionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CompetitionStore for PgCompetitionStore {
    async fn ping(&self) -> AppResult<()> {
        super::connection::ping(&self.pool).await?;
        Ok(())
    }

    async fn list_competitions(&self) -> AppResult<Vec<CompetitionListItem>> {
        CompetitionRepository::list(&self.pool).await
    }

    async fn find_competition(&self, id: i64) -> AppResult<Option<Competition>> {
        CompetitionRepository::find_by_id(&self.pool, id).await
    }

    async fn insert_competition(&self, input: &CompetitionInput, author_id: i64) -> AppResult<u64> {
        CompetitionRepository::create(&self.pool, input, author_id).await
    }

    async fn update_competition(&self, id: i64, input: &CompetitionInput) -> AppResult<u64> {
        CompetitionRepository::update(&self.pool, id, input).await
    }

    async fn delete_competition(&self, id: i64) -> AppResult<u64> {
        CompetitionRepository::delete(&self.pool, id).await
    }

    async fn has_applied(&self, user_id: i64, competition_id: i64) -> AppResult<bool> {
        CompetitorRepository::exists(&self.pool, user_id, competition_id).await
    }

    async fn insert_competitor(&self, user_id: i64, competition_id: i64) -> AppResult<u64> {
        CompetitorRepository::create(&self.pool, user_id, competition_id).await
    }

    async fn list_applied(&self, competition_id: i64) -> AppResult<Vec<AppliedItem>> {
        CompetitorRepository::list_for_competition(&self.pool, competition_id).await
    }

    async fn find_competitor(&self, id: i64) -> AppResult<Option<Competitor>> {
        CompetitorRepository::find_by_id(&self.pool, id).await
    }

    async fn set_score(&self, id: i64, bodovi: f64) -> AppResult<Option<i64>> {
        CompetitorRepository::set_score(&self.pool, id, bodovi).await
    }
}
