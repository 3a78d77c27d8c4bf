//! Competition repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Competition, CompetitionInput, CompetitionListItem},
};

/// Repository for competition database operations
pub struct CompetitionRepository;

impl CompetitionRepository {
    /// List all competitions with the author's name, earliest deadline first
    pub async fn list(pool: &PgPool) -> AppResult<Vec<CompetitionListItem>> {
        let items = sqlx::query_as::<_, CompetitionListItem>(
            r#"
            SELECT c.id, c.name, c.description, u.name AS author, c.apply_till
            FROM competitions c
            JOIN users u ON c.author_id = u.id
            ORDER BY c.apply_till
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(items)
    }

    /// Find competition by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Competition>> {
        let competition =
            sqlx::query_as::<_, Competition>(r#"SELECT * FROM competitions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(competition)
    }

    /// Create a new competition, returning the number of inserted rows
    pub async fn create(
        pool: &PgPool,
        input: &CompetitionInput,
        author_id: i64,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO competitions (name, description, author_id, apply_till)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(author_id)
        .bind(input.apply_till)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Update competition, returning the number of updated rows
    pub async fn update(pool: &PgPool, id: i64, input: &CompetitionInput) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE competitions
            SET name = $1, description = $2, apply_till = $3
            WHERE id = $4
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.apply_till)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete competition, returning the number of deleted rows
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<u64> {
        let result = sqlx::query(r#"DELETE FROM competitions WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
