//! Competitor repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{AppliedItem, Competitor},
};

/// Repository for competition applications
pub struct CompetitorRepository;

impl CompetitorRepository {
    /// Check whether the user already applied to the competition
    pub async fn exists(pool: &PgPool, user_id: i64, competition_id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM competitors WHERE id_users = $1 AND id_competitions = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(competition_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Record an application. A duplicate (user, competition) pair inserts nothing.
    pub async fn create(pool: &PgPool, user_id: i64, competition_id: i64) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO competitors (id_users, id_competitions)
            VALUES ($1, $2)
            ON CONFLICT (id_users, id_competitions) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(competition_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// List applicants of a competition, unscored first, then lowest score first
    pub async fn list_for_competition(
        pool: &PgPool,
        competition_id: i64,
    ) -> AppResult<Vec<AppliedItem>> {
        let items = sqlx::query_as::<_, AppliedItem>(
            r#"
            SELECT a.id, c.name, u.name AS korisnik, a.bodovi
            FROM competitors a
            JOIN competitions c ON a.id_competitions = c.id
            JOIN users u ON a.id_users = u.id
            WHERE c.id = $1
            ORDER BY a.bodovi ASC NULLS FIRST, a.id
            "#,
        )
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        Ok(items)
    }

    /// Find competitor by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Competitor>> {
        let competitor =
            sqlx::query_as::<_, Competitor>(r#"SELECT * FROM competitors WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(competitor)
    }

    /// Set the score of one competitor.
    ///
    /// Returns the competition the competitor belongs to, or `None` when no row matched.
    pub async fn set_score(pool: &PgPool, id: i64, bodovi: f64) -> AppResult<Option<i64>> {
        let competition_id = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE competitors
            SET bodovi = $1
            WHERE id = $2
            RETURNING id_competitions
            "#,
        )
        .bind(bodovi)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(competition_id)
    }
}
