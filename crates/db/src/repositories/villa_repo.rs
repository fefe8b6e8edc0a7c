//! Repository for the `villas` table.

use sqlx::PgPool;
use villa_core::types::DbId;

use crate::models::villa::{Villa, VillaRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, occupants, image_url, nightly_rate, \
                       square_meters, amenities, created_at, updated_at";

/// Provides CRUD operations for villas.
pub struct VillaRepo;

impl VillaRepo {
    /// List every villa ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Villa>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM villas ORDER BY id");
        sqlx::query_as::<_, Villa>(&query).fetch_all(pool).await
    }

    /// Find a villa by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Villa>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM villas WHERE id = $1");
        sqlx::query_as::<_, Villa>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a villa whose name matches `name` ignoring case.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Villa>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM villas WHERE LOWER(name) = LOWER($1)");
        sqlx::query_as::<_, Villa>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new villa, returning the created row with its assigned ID.
    ///
    /// A case-insensitive name collision fails with a unique violation on
    /// `uq_villas_name_lower`.
    pub async fn insert(pool: &PgPool, record: &VillaRecord) -> Result<Villa, sqlx::Error> {
        let query = format!(
            "INSERT INTO villas
                (name, description, occupants, image_url, nightly_rate, square_meters, amenities)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Villa>(&query)
            .bind(&record.name)
            .bind(&record.description)
            .bind(record.occupants)
            .bind(&record.image_url)
            .bind(record.nightly_rate)
            .bind(record.square_meters)
            .bind(&record.amenities)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every writable column of a villa and refresh `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        record: &VillaRecord,
    ) -> Result<Option<Villa>, sqlx::Error> {
        let query = format!(
            "UPDATE villas SET
                name = $2,
                description = $3,
                occupants = $4,
                image_url = $5,
                nightly_rate = $6,
                square_meters = $7,
                amenities = $8,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Villa>(&query)
            .bind(id)
            .bind(&record.name)
            .bind(&record.description)
            .bind(record.occupants)
            .bind(&record.image_url)
            .bind(record.nightly_rate)
            .bind(record.square_meters)
            .bind(&record.amenities)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a villa by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM villas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of villas.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM villas")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
