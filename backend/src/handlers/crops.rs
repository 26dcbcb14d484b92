//! HTTP handlers for the crop catalog

use axum::{extract::Path, Json};

use crate::error::{AppError, AppResult};
use crate::models::{crop_catalog, find_crop, CropProfile};

/// Look up a catalog crop by name, ignoring case
pub fn resolve_crop(name: &str) -> AppResult<CropProfile> {
    find_crop(name).ok_or_else(|| AppError::NotFound(format!("Crop '{}'", name.trim())))
}

/// List all catalog crops
pub async fn list_crops() -> Json<Vec<CropProfile>> {
    Json(crop_catalog())
}

/// Get one crop profile
pub async fn get_crop(Path(crop): Path<String>) -> AppResult<Json<CropProfile>> {
    Ok(Json(resolve_crop(&crop)?))
}
