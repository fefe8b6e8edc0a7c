//! Domain building blocks shared by the villa service crates.
//!
//! Nothing in here touches the database or HTTP: errors, id types,
//! field validation helpers and the edit-operation applier.

pub mod error;
pub mod patch;
pub mod types;
pub mod validation;
