//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values. The unique-index
//! case gets its error from a real insert.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use sqlx::PgPool;
use villa_api::error::AppError;
use villa_core::error::CoreError;
use villa_db::models::villa::VillaRecord;
use villa_db::repositories::VillaRepo;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Villa",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Villa with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("Villa id must be non-zero".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Villa id must be non-zero");
    assert!(json.get("fields").is_none());
}

// ---------------------------------------------------------------------------
// Test: CoreError::Conflict maps to 400 with CONFLICT code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn conflict_error_returns_400_with_conflict_code() {
    let err = AppError::Core(CoreError::Conflict("duplicate name".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "duplicate name");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Invalid patch operation".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Invalid patch operation");
}

// ---------------------------------------------------------------------------
// Test: CoreError::InvalidFields lists every field
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_fields_error_lists_fields() {
    let mut fields = BTreeMap::new();
    fields.insert(
        "name".to_string(),
        vec!["name must be between 1 and 30 characters".to_string()],
    );
    fields.insert(
        "occupants".to_string(),
        vec!["occupants must not be negative".to_string()],
    );
    let err = AppError::Core(CoreError::InvalidFields(fields));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["fields"]["name"][0],
        "name must be between 1 and 30 characters"
    );
    assert_eq!(
        json["fields"]["occupants"][0],
        "occupants must not be negative"
    );
}

// ---------------------------------------------------------------------------
// Test: CoreError::Internal maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn core_internal_error_returns_500_and_sanitizes() {
    let err = AppError::Core(CoreError::Internal("serializer stack trace here".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");

    let body_text = json.to_string();
    assert!(
        !body_text.contains("stack trace"),
        "Core internal error must not leak details"
    );
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: sqlx RowNotFound maps to 404, other sqlx errors to a sanitized 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn pool_timeout_returns_500() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: a unique-index violation from Postgres maps to 400 CONFLICT
// ---------------------------------------------------------------------------

fn record(name: &str) -> VillaRecord {
    VillaRecord {
        name: name.into(),
        description: String::new(),
        occupants: 0,
        image_url: String::new(),
        nightly_rate: 0.0,
        square_meters: 0,
        amenities: Vec::new(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unique_name_violation_returns_400_conflict(pool: PgPool) {
    VillaRepo::insert(&pool, &record("Casa Azul")).await.unwrap();
    let err = VillaRepo::insert(&pool, &record("CASA AZUL"))
        .await
        .unwrap_err();

    let (status, json) = error_to_response(AppError::Database(err)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "CONFLICT");
}
