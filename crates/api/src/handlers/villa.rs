//! Handlers for the `/villas` resource.
//!
//! Identity `0` is never a valid villa and is rejected before the store is
//! touched. Replace and patch treat a missing target row as a client error
//! (400), while get and delete answer 404.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use json_patch::PatchOperation;
use villa_core::error::CoreError;
use villa_core::patch::apply_patch;
use villa_core::types::DbId;
use villa_db::models::villa::{CreateVilla, UpdateVilla, VillaDto, VillaRecord};
use villa_db::repositories::VillaRepo;
use villa_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody, ValidatedJson};
use crate::state::AppState;

const ENTITY: &str = "Villa";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ensure_id(id: DbId) -> AppResult<()> {
    if id == 0 {
        tracing::warn!(id, "Rejected request with zero villa id");
        return Err(AppError::BadRequest("Villa id must be non-zero".into()));
    }
    Ok(())
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

fn missing_target(id: DbId) -> AppError {
    tracing::warn!(id, "Update target does not exist");
    AppError::BadRequest(format!("{ENTITY} with id {id} does not exist"))
}

/// Fail with a conflict if another villa already uses `name` (ignoring case).
///
/// `owner` is the villa being written, which may keep its own name.
async fn ensure_name_available(pool: &DbPool, name: &str, owner: Option<DbId>) -> AppResult<()> {
    match VillaRepo::find_by_name(pool, name).await? {
        Some(existing) if Some(existing.id) != owner => {
            tracing::warn!(name, existing_id = existing.id, "Villa name already taken");
            Err(AppError::Core(CoreError::Conflict(format!(
                "A villa named '{name}' already exists"
            ))))
        }
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/villas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<VillaDto>>> {
    let villas = VillaRepo::list(&state.pool).await?;
    tracing::info!(count = villas.len(), "Listed villas");
    Ok(Json(villas.into_iter().map(VillaDto::from).collect()))
}

/// GET /api/v1/villas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<VillaDto>> {
    ensure_id(id)?;
    let villa = VillaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(villa.into()))
}

/// POST /api/v1/villas
///
/// Responds 201 with the created villa and a `Location` header pointing at it.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateVilla>,
) -> AppResult<impl IntoResponse> {
    ensure_name_available(&state.pool, &input.name, None).await?;

    let villa = VillaRepo::insert(&state.pool, &VillaRecord::from(input)).await?;
    tracing::info!(id = villa.id, name = %villa.name, "Villa created");

    let location = format!("/api/v1/villas/{}", villa.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(VillaDto::from(villa)),
    ))
}

/// PUT /api/v1/villas/{id}
///
/// Full replace: attributes omitted from the body are reset to their zero
/// value.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateVilla>,
) -> AppResult<StatusCode> {
    ensure_id(id)?;
    if input.id != id {
        tracing::warn!(path_id = id, body_id = input.id, "Villa id mismatch on replace");
        return Err(AppError::BadRequest(format!(
            "Body id {} does not match path id {id}",
            input.id
        )));
    }
    ensure_name_available(&state.pool, &input.name, Some(id)).await?;

    VillaRepo::update(&state.pool, id, &VillaRecord::from(input))
        .await?
        .ok_or_else(|| missing_target(id))?;
    tracing::info!(id, "Villa replaced");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/villas/{id}
///
/// Applies an RFC 6902 operation list to the villa's editable shape, then
/// validates and stores the result as a full replace. Nothing is written
/// unless every step succeeds.
pub async fn patch(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(operations): JsonBody<Vec<PatchOperation>>,
) -> AppResult<StatusCode> {
    if operations.is_empty() {
        return Err(AppError::BadRequest(
            "Patch document must contain at least one operation".into(),
        ));
    }
    ensure_id(id)?;

    let villa = VillaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| missing_target(id))?;

    let patched = apply_patch(&UpdateVilla::from(villa), &operations).inspect_err(|err| {
        tracing::warn!(id, error = %err, "Villa patch rejected");
    })?;

    if patched.id != id {
        return Err(AppError::BadRequest(
            "Patch must not change the villa id".into(),
        ));
    }
    ensure_name_available(&state.pool, &patched.name, Some(id)).await?;

    VillaRepo::update(&state.pool, id, &VillaRecord::from(patched))
        .await?
        .ok_or_else(|| missing_target(id))?;
    tracing::info!(id, operations = operations.len(), "Villa patched");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/villas/{id}
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    ensure_id(id)?;
    if VillaRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Villa deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
