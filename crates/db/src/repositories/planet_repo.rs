//! Repository for the `planets` table.

use cosmos_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::planet::{CreatePlanet, Planet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, distance_from_earth, nearest_star";

/// Provides read access to planets plus inserts for seeding.
pub struct PlanetRepo;

impl PlanetRepo {
    /// Insert a new planet, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreatePlanet) -> Result<Planet, sqlx::Error> {
        let query = format!(
            "INSERT INTO planets (name, distance_from_earth, nearest_star)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .bind(input.distance_from_earth)
            .bind(&input.nearest_star)
            .fetch_one(pool)
            .await
    }

    /// List all planets ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id ASC");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }

    /// Find a planet by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = ?1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Planets a scientist has at least one mission on, each listed once.
    pub async fn list_for_scientist(
        pool: &SqlitePool,
        scientist_id: DbId,
    ) -> Result<Vec<Planet>, sqlx::Error> {
        sqlx::query_as::<_, Planet>(
            "SELECT p.id, p.name, p.distance_from_earth, p.nearest_star
             FROM planets p
             WHERE p.id IN (SELECT planet_id FROM missions WHERE scientist_id = ?1)
             ORDER BY p.id ASC",
        )
        .bind(scientist_id)
        .fetch_all(pool)
        .await
    }
}
