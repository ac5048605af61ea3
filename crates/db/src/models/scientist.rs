//! Scientist entity model and DTOs.

use cosmos_core::error::CoreError;
use cosmos_core::types::DbId;
use cosmos_core::validation::require_text;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::mission::ScientistMission;
use crate::models::present;

/// A scientist row from the `scientists` table.
///
/// Serialized as-is this is the listing form (no `missions` key).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Scientist {
    pub id: DbId,
    pub name: String,
    pub field_of_study: String,
}

/// Full scientist representation: the row plus its missions, each mission
/// nesting its planet but not the scientist again.
#[derive(Debug, Clone, Serialize)]
pub struct ScientistDetail {
    #[serde(flatten)]
    pub scientist: Scientist,
    pub missions: Vec<ScientistMission>,
}

/// Request body for creating a scientist.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateScientist {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

impl CreateScientist {
    /// Check required fields and produce the row to insert.
    pub fn validate(self) -> Result<NewScientist, CoreError> {
        Ok(NewScientist {
            name: require_text("name", self.name)?,
            field_of_study: require_text("field of study", self.field_of_study)?,
        })
    }
}

/// A validated scientist ready for insertion.
#[derive(Debug, Clone)]
pub struct NewScientist {
    pub name: String,
    pub field_of_study: String,
}

/// Request body for a partial scientist update.
///
/// Only the listed keys may appear. A key that is present is validated the
/// same way as on create, so `null` or `""` is rejected rather than ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateScientist {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub field_of_study: Option<Option<String>>,
}

impl UpdateScientist {
    /// Validate every supplied key and produce the column changes.
    pub fn validate(self) -> Result<ScientistChanges, CoreError> {
        Ok(ScientistChanges {
            name: self.name.map(|v| require_text("name", v)).transpose()?,
            field_of_study: self
                .field_of_study
                .map(|v| require_text("field of study", v))
                .transpose()?,
        })
    }
}

/// Validated column changes. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct ScientistChanges {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}
