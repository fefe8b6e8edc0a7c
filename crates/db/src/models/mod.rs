//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` request DTOs
//! - `From` conversions between the row and each transfer shape

pub mod villa;
