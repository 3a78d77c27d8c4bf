//! Competition service
//!
//! Each operation issues the statements of one request against the store and
//! turns row counts into `AppResult` outcomes. Rendering is left to handlers.

use tracing::{debug, info, warn};

use crate::{
    constants::messages,
    db::CompetitionStore,
    error::{AppError, AppResult},
    models::{AppliedItem, Competition, CompetitionInput, CompetitionListItem, Competitor},
};

/// Competition service for business logic
pub struct CompetitionService;

impl CompetitionService {
    /// List all competitions, earliest deadline first
    pub async fn list_competitions(
        store: &dyn CompetitionStore,
    ) -> AppResult<Vec<CompetitionListItem>> {
        store.list_competitions().await
    }

    /// Get a competition for the edit form
    pub async fn get_competition(store: &dyn CompetitionStore, id: i64) -> AppResult<Competition> {
        store
            .find_competition(id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::INVALID_CALL.to_string()))
    }

    /// Create a competition authored by `author_id`
    pub async fn create_competition(
        store: &dyn CompetitionStore,
        author_id: i64,
        input: &CompetitionInput,
    ) -> AppResult<()> {
        let inserted = store.insert_competition(input, author_id).await?;
        expect_single_row(inserted, "insert competition")?;

        info!(author_id, name = %input.name, apply_till = %input.apply_till, "Competition created");
        Ok(())
    }

    /// Update an existing competition
    pub async fn update_competition(
        store: &dyn CompetitionStore,
        id: i64,
        input: &CompetitionInput,
    ) -> AppResult<()> {
        let updated = store.update_competition(id, input).await?;
        expect_single_row(updated, "update competition")?;

        info!(competition_id = id, "Competition updated");
        Ok(())
    }

    /// Delete a competition
    pub async fn delete_competition(store: &dyn CompetitionStore, id: i64) -> AppResult<()> {
        let deleted = store.delete_competition(id).await?;
        expect_single_row(deleted, "delete competition")?;

        info!(competition_id = id, "Competition deleted");
        Ok(())
    }

    /// Apply the user to a competition
    pub async fn apply(
        store: &dyn CompetitionStore,
        user_id: i64,
        competition_id: i64,
    ) -> AppResult<()> {
        if store.has_applied(user_id, competition_id).await? {
            return Err(AppError::Conflict(messages::ALREADY_APPLIED.to_string()));
        }

        // Zero rows here means a concurrent request won the unique constraint
        let inserted = store.insert_competitor(user_id, competition_id).await?;
        if inserted == 0 {
            warn!(user_id, competition_id, "Concurrent duplicate application rejected");
            return Err(AppError::Conflict(messages::ALREADY_APPLIED.to_string()));
        }
        expect_single_row(inserted, "insert competitor")?;

        info!(user_id, competition_id, "Application recorded");
        Ok(())
    }

    /// List applicants of a competition, lowest score first
    pub async fn list_applied(
        store: &dyn CompetitionStore,
        competition_id: i64,
    ) -> AppResult<Vec<AppliedItem>> {
        let items = store.list_applied(competition_id).await?;
        debug!(competition_id, count = items.len(), "Loaded applicants");
        Ok(items)
    }

    /// Get a competitor for the score form
    pub async fn get_competitor(store: &dyn CompetitionStore, id: i64) -> AppResult<Competitor> {
        store
            .find_competitor(id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::INVALID_CALL.to_string()))
    }

    /// Record a score, returning the competition the competitor belongs to
    pub async fn set_score(store: &dyn CompetitionStore, id: i64, bodovi: f64) -> AppResult<i64> {
        let competition_id = store
            .set_score(id, bodovi)
            .await?
            .ok_or_else(|| AppError::OperationFailed(messages::OPERATION_FAILED.to_string()))?;

        info!(competitor_id = id, competition_id, bodovi, "Score recorded");
        Ok(competition_id)
    }
}

fn expect_single_row(affected: u64, operation: &str) -> AppResult<()> {
    if affected == 1 {
        Ok(())
    } else {
        debug!(operation, affected, "Unexpected number of affected rows");
        Err(AppError::OperationFailed(messages::OPERATION_FAILED.to_string()))
    }
}
