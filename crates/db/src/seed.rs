//! Fixed sample data for local development.
//!
//! Planets have no HTTP create endpoint, so this is how they get into a
//! fresh database.

use sqlx::SqlitePool;

use crate::models::mission::NewMission;
use crate::models::planet::CreatePlanet;
use crate::models::scientist::NewScientist;
use crate::repositories::{MissionRepo, PlanetRepo, ScientistRepo};

/// (name, distance_from_earth, nearest_star)
const PLANETS: &[(&str, i64, &str)] = &[
    ("TauCeti E", 1_234_567, "TauCeti"),
    ("Maxxor", 9_876_543, "Canus Minor"),
    ("Xen", 44_987_654, "Hubble"),
    ("Kepler-452b", 1_400, "Kepler-452"),
];

/// (name, field_of_study)
const SCIENTISTS: &[(&str, &str)] = &[
    ("Mel T. Valent", "xenobiology"),
    ("P. Legrange", "orbits"),
    ("Vera Rubin", "galaxy rotation"),
];

/// (name, scientist index, planet index)
const MISSIONS: &[(&str, usize, usize)] = &[
    ("Explore Planet X", 0, 0),
    ("Survey Maxxor", 1, 1),
    ("Map Xen", 0, 2),
];

/// Row counts inserted by [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub planets: usize,
    pub scientists: usize,
    pub missions: usize,
}

/// Clear all three tables and insert the sample data.
pub async fn run(pool: &SqlitePool) -> Result<SeedSummary, sqlx::Error> {
    sqlx::query("DELETE FROM missions").execute(pool).await?;
    sqlx::query("DELETE FROM scientists").execute(pool).await?;
    sqlx::query("DELETE FROM planets").execute(pool).await?;
    tracing::debug!("Cleared existing rows");

    let mut planet_ids = Vec::with_capacity(PLANETS.len());
    for &(name, distance, star) in PLANETS {
        let planet = PlanetRepo::create(
            pool,
            &CreatePlanet {
                name: Some(name.to_string()),
                distance_from_earth: Some(distance),
                nearest_star: Some(star.to_string()),
            },
        )
        .await?;
        planet_ids.push(planet.id);
    }

    let mut scientist_ids = Vec::with_capacity(SCIENTISTS.len());
    for &(name, field) in SCIENTISTS {
        let scientist = ScientistRepo::create(
            pool,
            &NewScientist {
                name: name.to_string(),
                field_of_study: field.to_string(),
            },
        )
        .await?;
        scientist_ids.push(scientist.id);
    }

    for &(name, scientist, planet) in MISSIONS {
        MissionRepo::create(
            pool,
            &NewMission {
                name: name.to_string(),
                scientist_id: scientist_ids[scientist],
                planet_id: planet_ids[planet],
            },
        )
        .await?;
    }

    Ok(SeedSummary {
        planets: PLANETS.len(),
        scientists: SCIENTISTS.len(),
        missions: MISSIONS.len(),
    })
}
