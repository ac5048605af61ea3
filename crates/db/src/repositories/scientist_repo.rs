//! Repository for the `scientists` table.

use cosmos_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::scientist::{NewScientist, Scientist, ScientistChanges, ScientistDetail};
use crate::repositories::MissionRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, field_of_study";

/// Provides CRUD operations for scientists.
pub struct ScientistRepo;

impl ScientistRepo {
    /// Insert a new scientist, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &NewScientist) -> Result<Scientist, sqlx::Error> {
        let query = format!(
            "INSERT INTO scientists (name, field_of_study)
             VALUES (?1, ?2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scientist>(&query)
            .bind(&input.name)
            .bind(&input.field_of_study)
            .fetch_one(pool)
            .await
    }

    /// List all scientists ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Scientist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scientists ORDER BY id ASC");
        sqlx::query_as::<_, Scientist>(&query).fetch_all(pool).await
    }

    /// Find a scientist by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Scientist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scientists WHERE id = ?1");
        sqlx::query_as::<_, Scientist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a scientist together with its missions and their planets.
    pub async fn find_detail_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<ScientistDetail>, sqlx::Error> {
        let Some(scientist) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let missions = MissionRepo::list_by_scientist(pool, scientist.id).await?;
        Ok(Some(ScientistDetail {
            scientist,
            missions,
        }))
    }

    /// Update a scientist. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &ScientistChanges,
    ) -> Result<Option<Scientist>, sqlx::Error> {
        let query = format!(
            "UPDATE scientists SET
                name = COALESCE(?2, name),
                field_of_study = COALESCE(?3, field_of_study)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scientist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.field_of_study)
            .fetch_optional(pool)
            .await
    }

    /// Delete a scientist by ID. Its missions go with it through the
    /// `ON DELETE CASCADE` foreign key. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scientists WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Scientists with at least one mission on a planet, each listed once.
    pub async fn list_for_planet(
        pool: &SqlitePool,
        planet_id: DbId,
    ) -> Result<Vec<Scientist>, sqlx::Error> {
        sqlx::query_as::<_, Scientist>(
            "SELECT s.id, s.name, s.field_of_study
             FROM scientists s
             WHERE s.id IN (SELECT scientist_id FROM missions WHERE planet_id = ?1)
             ORDER BY s.id ASC",
        )
        .bind(planet_id)
        .fetch_all(pool)
        .await
    }
}
