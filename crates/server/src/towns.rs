//! Town catalog endpoint.

use api_types::{ApiResponse, town::TownView};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<Vec<TownView>>>, ServerError> {
    let towns = state.engine.towns().await?;
    let views = towns
        .into_iter()
        .map(|town| TownView {
            id: town.id,
            town_name: town.name,
            postal_code: town.postal_code,
        })
        .collect();

    Ok(Json(ApiResponse::success(
        "Towns retrieved successfully",
        views,
    )))
}
