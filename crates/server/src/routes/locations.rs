use axum::{extract::{Path, State}, Json};
use tracing::info;

use models::housing_location::HousingLocation;

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// 列出全部房源记录
#[utoipa::path(
    get, path = "/locations", tag = "locations",
    responses((status = 200, description = "List OK", body = [crate::openapi::HousingLocationDoc]))
)]
pub async fn list_locations(State(state): State<ServerState>) -> Json<Vec<HousingLocation>> {
    let items = state.locations.list().await;
    info!(count = items.len(), "list housing locations");
    Json(items)
}

/// 获取指定房源记录
#[utoipa::path(
    get, path = "/locations/{id}", tag = "locations",
    params(("id" = u32, Path, description = "housing location id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::HousingLocationDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_location(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
) -> Result<Json<HousingLocation>, JsonApiError> {
    match state.locations.get(id).await {
        Some(loc) => Ok(Json(loc)),
        None => Err(JsonApiError::not_found(Some(format!(
            "housing location {} not found",
            id
        )))),
    }
}
