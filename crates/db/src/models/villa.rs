//! Villa entity model, transfer shapes, and the conversions between them.
//!
//! - [`Villa`] is the `villas` row, timestamps included.
//! - [`CreateVilla`] / [`UpdateVilla`] are request bodies.
//! - [`VillaDto`] is what responses expose (no timestamps).
//! - [`VillaRecord`] is the writable column set handed to the repository.
//!
//! Omitted writable attributes default to their zero value; nothing is
//! merged with the stored row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use villa_core::types::{DbId, Timestamp};

/// A villa row from the `villas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Villa {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub occupants: i32,
    pub image_url: String,
    pub nightly_rate: f64,
    pub square_meters: i32,
    pub amenities: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Read shape returned by every endpoint that yields a villa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillaDto {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub occupants: i32,
    pub image_url: String,
    pub nightly_rate: f64,
    pub square_meters: i32,
    pub amenities: Vec<String>,
}

/// DTO for creating a villa.
///
/// `id` exists only so a client-supplied identity can be rejected; it must
/// be absent or `0`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateVilla {
    #[serde(default)]
    #[validate(custom(function = "villa_core::validation::unassigned_id"))]
    pub id: DbId,
    #[validate(
        length(min = 1, max = 30, message = "name must be between 1 and 30 characters"),
        custom(function = "villa_core::validation::no_nul")
    )]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "villa_core::validation::no_nul"))]
    pub description: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "occupants must not be negative"))]
    pub occupants: i32,
    #[serde(default)]
    #[validate(custom(function = "villa_core::validation::no_nul"))]
    pub image_url: String,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "nightly_rate must not be negative"))]
    pub nightly_rate: f64,
    #[serde(default)]
    #[validate(range(min = 0, message = "square_meters must not be negative"))]
    pub square_meters: i32,
    #[serde(default)]
    #[validate(custom(function = "villa_core::validation::no_nul_items"))]
    pub amenities: Vec<String>,
}

/// DTO for replacing a villa, and the editable shape a patch is applied to.
///
/// Unknown keys are rejected so a patch cannot introduce fields the row
/// does not have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateVilla {
    pub id: DbId,
    #[validate(
        length(min = 1, max = 30, message = "name must be between 1 and 30 characters"),
        custom(function = "villa_core::validation::no_nul")
    )]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "villa_core::validation::no_nul"))]
    pub description: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "occupants must not be negative"))]
    pub occupants: i32,
    #[serde(default)]
    #[validate(custom(function = "villa_core::validation::no_nul"))]
    pub image_url: String,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "nightly_rate must not be negative"))]
    pub nightly_rate: f64,
    #[serde(default)]
    #[validate(range(min = 0, message = "square_meters must not be negative"))]
    pub square_meters: i32,
    #[serde(default)]
    #[validate(custom(function = "villa_core::validation::no_nul_items"))]
    pub amenities: Vec<String>,
}

/// Writable columns of a villa row. Identity and timestamps are the
/// store's business.
#[derive(Debug, Clone, PartialEq)]
pub struct VillaRecord {
    pub name: String,
    pub description: String,
    pub occupants: i32,
    pub image_url: String,
    pub nightly_rate: f64,
    pub square_meters: i32,
    pub amenities: Vec<String>,
}

impl From<Villa> for VillaDto {
    fn from(villa: Villa) -> Self {
        Self {
            id: villa.id,
            name: villa.name,
            description: villa.description,
            occupants: villa.occupants,
            image_url: villa.image_url,
            nightly_rate: villa.nightly_rate,
            square_meters: villa.square_meters,
            amenities: villa.amenities,
        }
    }
}

impl From<Villa> for UpdateVilla {
    fn from(villa: Villa) -> Self {
        Self {
            id: villa.id,
            name: villa.name,
            description: villa.description,
            occupants: villa.occupants,
            image_url: villa.image_url,
            nightly_rate: villa.nightly_rate,
            square_meters: villa.square_meters,
            amenities: villa.amenities,
        }
    }
}

impl From<CreateVilla> for VillaRecord {
    fn from(input: CreateVilla) -> Self {
        Self {
            name: input.name,
            description: input.description,
            occupants: input.occupants,
            image_url: input.image_url,
            nightly_rate: input.nightly_rate,
            square_meters: input.square_meters,
            amenities: input.amenities,
        }
    }
}

impl From<UpdateVilla> for VillaRecord {
    fn from(input: UpdateVilla) -> Self {
        Self {
            name: input.name,
            description: input.description,
            occupants: input.occupants,
            image_url: input.image_url,
            nightly_rate: input.nightly_rate,
            square_meters: input.square_meters,
            amenities: input.amenities,
        }
    }
}

impl From<VillaDto> for VillaRecord {
    fn from(dto: VillaDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            occupants: dto.occupants,
            image_url: dto.image_url,
            nightly_rate: dto.nightly_rate,
            square_meters: dto.square_meters,
            amenities: dto.amenities,
        }
    }
}
