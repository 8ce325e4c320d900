//! Brand collection handlers

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use brandstore_core::{Brand, BrandRepository, BrandUpdate, NewBrand};

use crate::error::ApiError;
use crate::extract::{JsonBody, PathId};
use crate::routes::brand_location;
use crate::state::AppState;

/// `GET /api/brands`
pub async fn list_brands<R: BrandRepository + 'static>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Brand>>, ApiError> {
    let brands = state.with_store(|store| store.list()).await?;
    Ok(Json(brands))
}

/// `GET /api/brands/:id`
pub async fn get_brand<R: BrandRepository + 'static>(
    State(state): State<AppState<R>>,
    PathId(id): PathId<i64>,
) -> Result<Json<Brand>, ApiError> {
    let brand = state.with_store(move |store| store.get(id)).await?;
    Ok(Json(brand))
}

/// `POST /api/brands` responds 201 with the record and its address.
pub async fn create_brand<R: BrandRepository + 'static>(
    State(state): State<AppState<R>>,
    JsonBody(candidate): JsonBody<NewBrand>,
) -> Result<impl IntoResponse, ApiError> {
    let brand = state
        .with_store(move |store| store.create(&candidate))
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, brand_location(brand.id))],
        Json(brand),
    ))
}

/// `PUT /api/brands/:id`
pub async fn update_brand<R: BrandRepository + 'static>(
    State(state): State<AppState<R>>,
    PathId(id): PathId<i64>,
    JsonBody(update): JsonBody<BrandUpdate>,
) -> Result<StatusCode, ApiError> {
    state
        .with_store(move |store| store.update(id, &update))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/brands/:id`
pub async fn delete_brand<R: BrandRepository + 'static>(
    State(state): State<AppState<R>>,
    PathId(id): PathId<i64>,
) -> Result<StatusCode, ApiError> {
    state.with_store(move |store| store.delete(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
