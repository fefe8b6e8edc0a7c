//! Demo data for local development.

use sqlx::PgPool;

use crate::models::villa::VillaRecord;
use crate::repositories::VillaRepo;

/// The two villas a fresh development database starts with.
pub fn demo_villas() -> Vec<VillaRecord> {
    vec![
        VillaRecord {
            name: "Villa Real".to_string(),
            description: "Detalle de la villa...".to_string(),
            occupants: 5,
            image_url: String::new(),
            nightly_rate: 200.0,
            square_meters: 50,
            amenities: Vec::new(),
        },
        VillaRecord {
            name: "Premium vista a la piscina".to_string(),
            description: "Detalle de la villa...".to_string(),
            occupants: 4,
            image_url: String::new(),
            nightly_rate: 150.0,
            square_meters: 40,
            amenities: Vec::new(),
        },
    ]
}

/// Insert [`demo_villas`] when the table is empty.
///
/// Returns the number of rows inserted (0 if the table already had data).
pub async fn seed_demo_villas(pool: &PgPool) -> Result<usize, sqlx::Error> {
    if VillaRepo::count(pool).await? > 0 {
        tracing::debug!("Villas table not empty, skipping demo seed");
        return Ok(0);
    }

    let villas = demo_villas();
    for villa in &villas {
        VillaRepo::insert(pool, villa).await?;
    }
    tracing::info!(count = villas.len(), "Seeded demo villas");
    Ok(villas.len())
}
