//! Domain model structs, DTOs and serialization views.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO that validates into an insert struct
//! - Detail views that nest related rows without back-references

use serde::{Deserialize, Deserializer};

pub mod mission;
pub mod planet;
pub mod scientist;

/// Deserialize a key that is present in the payload as `Some(value)`, so
/// `{"name": null}` becomes `Some(None)` while a missing key stays `None`
/// through `#[serde(default)]`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
