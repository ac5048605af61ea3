//! Request handlers, one module per resource.

pub mod mission;
pub mod planet;
pub mod scientist;
