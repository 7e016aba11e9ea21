//! Campaign CRUD endpoints.
//!
//! Each write settles against the ledger account configured on the server
//! state; the engine performs the debit or credit atomically with the
//! campaign row.

use api_types::{
    ApiResponse,
    campaign::{CampaignUpsert, CampaignView},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};
use engine::{Campaign, CampaignDraft, Money};

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<ApiResponse<Vec<CampaignView>>>, ServerError> {
    let campaigns = state.engine.campaigns().await?;
    let views = campaigns.into_iter().map(view).collect();
    Ok(Json(ApiResponse::success(
        "Campaigns retrieved successfully",
        views,
    )))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<CampaignView>>, ServerError> {
    let campaign = state.engine.campaign(id).await?;
    Ok(Json(ApiResponse::success("Campaign found", view(campaign))))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CampaignUpsert>,
) -> Result<(StatusCode, Json<ApiResponse<CampaignView>>), ServerError> {
    let draft = draft_from(payload)?;
    let campaign = state
        .engine
        .create_campaign(&state.account_name, draft)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Campaign created successfully",
            view(campaign),
        )),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CampaignUpsert>,
) -> Result<Json<ApiResponse<CampaignView>>, ServerError> {
    let draft = draft_from(payload)?;
    let campaign = state
        .engine
        .update_campaign(&state.account_name, id, draft)
        .await?;

    Ok(Json(ApiResponse::success(
        "Campaign updated successfully",
        view(campaign),
    )))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ServerError> {
    state.engine.delete_campaign(&state.account_name, id).await?;
    Ok(Json(ApiResponse {
        success: true,
        message: "Campaign deleted successfully".to_string(),
        data: None,
    }))
}

fn draft_from(payload: CampaignUpsert) -> Result<CampaignDraft, ServerError> {
    let bid_amount: Money = payload
        .bid_amount
        .parse()
        .map_err(|_| ServerError::Generic("invalid bid amount".to_string()))?;
    let campaign_fund: Money = payload
        .campaign_fund
        .parse()
        .map_err(|_| ServerError::Generic("invalid campaign fund".to_string()))?;

    Ok(CampaignDraft {
        name: payload.campaign_name,
        bid_amount,
        campaign_fund,
        status: status_from(payload.status),
        town_id: payload.town_id,
        radius: payload.radius,
        keyword_ids: payload.keyword_ids,
    })
}

fn view(campaign: Campaign) -> CampaignView {
    CampaignView {
        id: campaign.id,
        campaign_name: campaign.name,
        bid_amount: campaign.bid_amount.to_string(),
        campaign_fund: campaign.campaign_fund.to_string(),
        status: status_to(campaign.status),
        town_id: campaign.town_id,
        town_name: campaign.town_name,
        radius: campaign.radius,
        keyword_ids: campaign.keyword_ids,
        keyword_texts: campaign.keyword_texts,
        created_at: campaign.created_at,
        updated_at: campaign.updated_at,
    }
}

fn status_from(status: api_types::CampaignStatus) -> engine::CampaignStatus {
    match status {
        api_types::CampaignStatus::On => engine::CampaignStatus::On,
        api_types::CampaignStatus::Off => engine::CampaignStatus::Off,
    }
}

fn status_to(status: engine::CampaignStatus) -> api_types::CampaignStatus {
    match status {
        engine::CampaignStatus::On => api_types::CampaignStatus::On,
        engine::CampaignStatus::Off => api_types::CampaignStatus::Off,
    }
}
