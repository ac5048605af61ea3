//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod mission_repo;
pub mod planet_repo;
pub mod scientist_repo;

pub use mission_repo::MissionRepo;
pub use planet_repo::PlanetRepo;
pub use scientist_repo::ScientistRepo;
