//! Domain primitives shared by the store and HTTP layers: error taxonomy,
//! id types and field validation rules.

pub mod error;
pub mod types;
pub mod validation;
