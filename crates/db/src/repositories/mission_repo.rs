//! Repository for the `missions` table.

use cosmos_core::types::DbId;
use sqlx::{FromRow, SqlitePool};

use crate::models::mission::{Mission, MissionDetail, NewMission, ScientistMission};
use crate::models::planet::Planet;
use crate::models::scientist::Scientist;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, scientist_id, planet_id";

/// A mission joined with its planet, flattened for `FromRow`.
#[derive(FromRow)]
struct MissionPlanetRow {
    id: DbId,
    name: String,
    scientist_id: DbId,
    planet_id: DbId,
    planet_name: Option<String>,
    planet_distance_from_earth: Option<i64>,
    planet_nearest_star: Option<String>,
}

impl From<MissionPlanetRow> for ScientistMission {
    fn from(row: MissionPlanetRow) -> Self {
        Self {
            mission: Mission {
                id: row.id,
                name: row.name,
                scientist_id: row.scientist_id,
                planet_id: row.planet_id,
            },
            planet: Planet {
                id: row.planet_id,
                name: row.planet_name,
                distance_from_earth: row.planet_distance_from_earth,
                nearest_star: row.planet_nearest_star,
            },
        }
    }
}

/// A mission joined with both its scientist and planet.
#[derive(FromRow)]
struct MissionDetailRow {
    id: DbId,
    name: String,
    scientist_id: DbId,
    planet_id: DbId,
    scientist_name: String,
    scientist_field_of_study: String,
    planet_name: Option<String>,
    planet_distance_from_earth: Option<i64>,
    planet_nearest_star: Option<String>,
}

impl From<MissionDetailRow> for MissionDetail {
    fn from(row: MissionDetailRow) -> Self {
        Self {
            mission: Mission {
                id: row.id,
                name: row.name,
                scientist_id: row.scientist_id,
                planet_id: row.planet_id,
            },
            scientist: Scientist {
                id: row.scientist_id,
                name: row.scientist_name,
                field_of_study: row.scientist_field_of_study,
            },
            planet: Planet {
                id: row.planet_id,
                name: row.planet_name,
                distance_from_earth: row.planet_distance_from_earth,
                nearest_star: row.planet_nearest_star,
            },
        }
    }
}

/// Provides create and read operations for missions.
pub struct MissionRepo;

impl MissionRepo {
    /// Insert a new mission, returning the created row.
    ///
    /// Fails with a foreign-key violation when the scientist or planet does
    /// not exist.
    pub async fn create(pool: &SqlitePool, input: &NewMission) -> Result<Mission, sqlx::Error> {
        let query = format!(
            "INSERT INTO missions (name, scientist_id, planet_id)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(&input.name)
            .bind(input.scientist_id)
            .bind(input.planet_id)
            .fetch_one(pool)
            .await
    }

    /// Find a mission with its scientist and planet nested.
    pub async fn find_detail_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<MissionDetail>, sqlx::Error> {
        let row = sqlx::query_as::<_, MissionDetailRow>(
            "SELECT m.id, m.name, m.scientist_id, m.planet_id,
                    s.name AS scientist_name,
                    s.field_of_study AS scientist_field_of_study,
                    p.name AS planet_name,
                    p.distance_from_earth AS planet_distance_from_earth,
                    p.nearest_star AS planet_nearest_star
             FROM missions m
             JOIN scientists s ON s.id = m.scientist_id
             JOIN planets p ON p.id = m.planet_id
             WHERE m.id = ?1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(MissionDetail::from))
    }

    /// List a scientist's missions with their planets, ordered by id.
    pub async fn list_by_scientist(
        pool: &SqlitePool,
        scientist_id: DbId,
    ) -> Result<Vec<ScientistMission>, sqlx::Error> {
        let rows = sqlx::query_as::<_, MissionPlanetRow>(
            "SELECT m.id, m.name, m.scientist_id, m.planet_id,
                    p.name AS planet_name,
                    p.distance_from_earth AS planet_distance_from_earth,
                    p.nearest_star AS planet_nearest_star
             FROM missions m
             JOIN planets p ON p.id = m.planet_id
             WHERE m.scientist_id = ?1
             ORDER BY m.id ASC",
        )
        .bind(scientist_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(ScientistMission::from).collect())
    }

    /// Count the missions referencing a scientist.
    pub async fn count_by_scientist(pool: &SqlitePool, scientist_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM missions WHERE scientist_id = ?1")
            .bind(scientist_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
