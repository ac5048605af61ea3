//! Planet entity model and DTOs.

use cosmos_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A planet row from the `planets` table.
///
/// This is also the listing form: it never carries a `missions` key.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Planet {
    pub id: DbId,
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}

/// DTO for inserting a planet. Planets have no field-level validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlanet {
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}
