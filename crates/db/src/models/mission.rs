//! Mission entity model, DTOs and the nested views used when a mission is
//! rendered under its scientist or on its own.

use cosmos_core::error::CoreError;
use cosmos_core::types::DbId;
use cosmos_core::validation::{require_reference, require_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::planet::Planet;
use crate::models::scientist::Scientist;

/// A mission row from the `missions` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Mission {
    pub id: DbId,
    pub name: String,
    pub scientist_id: DbId,
    pub planet_id: DbId,
}

/// A mission as listed inside its scientist: nests the planet, omits the
/// scientist.
#[derive(Debug, Clone, Serialize)]
pub struct ScientistMission {
    #[serde(flatten)]
    pub mission: Mission,
    pub planet: Planet,
}

/// Full mission representation: nests its scientist and planet, neither of
/// which carries a `missions` list.
#[derive(Debug, Clone, Serialize)]
pub struct MissionDetail {
    #[serde(flatten)]
    pub mission: Mission,
    pub scientist: Scientist,
    pub planet: Planet,
}

/// Request body for creating a mission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMission {
    pub name: Option<String>,
    pub scientist_id: Option<DbId>,
    pub planet_id: Option<DbId>,
}

impl CreateMission {
    /// Check required fields and produce the row to insert.
    ///
    /// Whether the referenced scientist and planet exist is enforced by the
    /// store's foreign keys.
    pub fn validate(self) -> Result<NewMission, CoreError> {
        Ok(NewMission {
            name: require_text("name", self.name)?,
            scientist_id: require_reference("scientist id", self.scientist_id)?,
            planet_id: require_reference("planet id", self.planet_id)?,
        })
    }
}

/// A validated mission ready for insertion.
#[derive(Debug, Clone)]
pub struct NewMission {
    pub name: String,
    pub scientist_id: DbId,
    pub planet_id: DbId,
}
