use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::Campaign;

use crate::{
    model::{
        api::ErrorDto,
        campaign::{CampaignPatchDto, NewCampaignDto},
        page::{Page, PageQuery},
    },
    server::{error::Error, model::app::AppState, service::campaign::CampaignService},
};

pub static CAMPAIGN_TAG: &str = "campaign";

/// List one page of campaigns
#[utoipa::path(
    get,
    path = "/api/campaigns",
    tag = CAMPAIGN_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of campaigns", body = Page<Campaign>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campaigns(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = CampaignService::new(&state).get_all(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a campaign by id
#[utoipa::path(
    get,
    path = "/api/campaigns/{id}",
    tag = CAMPAIGN_TAG,
    params(("id" = i32, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "The campaign", body = Campaign),
        (status = 404, description = "Campaign not found", body = ErrorDto)
    ),
)]
pub async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let campaign = CampaignService::new(&state).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(campaign)))
}

/// Create a campaign
#[utoipa::path(
    post,
    path = "/api/campaigns",
    tag = CAMPAIGN_TAG,
    request_body = NewCampaignDto,
    responses(
        (status = 201, description = "Created campaign", body = Campaign),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_campaign(
    State(state): State<AppState>,
    Json(campaign): Json<NewCampaignDto>,
) -> Result<impl IntoResponse, Error> {
    let campaign = CampaignService::new(&state).create(campaign).await?;

    Ok((StatusCode::CREATED, Json(campaign)))
}

/// Update the given fields of a campaign
#[utoipa::path(
    patch,
    path = "/api/campaigns/{id}",
    tag = CAMPAIGN_TAG,
    params(("id" = i32, Path, description = "Campaign id")),
    request_body = CampaignPatchDto,
    responses(
        (status = 200, description = "Updated campaign", body = Campaign),
        (status = 404, description = "Campaign not found", body = ErrorDto)
    ),
)]
pub async fn update_campaign(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<CampaignPatchDto>,
) -> Result<impl IntoResponse, Error> {
    let campaign = CampaignService::new(&state).update(id, patch).await?;

    Ok((StatusCode::OK, Json(campaign)))
}

/// Delete a campaign
#[utoipa::path(
    delete,
    path = "/api/campaigns/{id}",
    tag = CAMPAIGN_TAG,
    params(("id" = i32, Path, description = "Campaign id")),
    responses(
        (status = 204, description = "Campaign deleted"),
        (status = 404, description = "Campaign not found", body = ErrorDto)
    ),
)]
pub async fn delete_campaign(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    CampaignService::new(&state).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Accept a campaign offer
#[utoipa::path(
    post,
    path = "/api/campaigns/{id}/accept",
    tag = CAMPAIGN_TAG,
    params(("id" = i32, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Accepted campaign", body = Campaign),
        (status = 404, description = "Campaign not found", body = ErrorDto)
    ),
)]
pub async fn accept_campaign(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let campaign = CampaignService::new(&state).accept(id).await?;

    Ok((StatusCode::OK, Json(campaign)))
}

/// Decline a campaign offer
#[utoipa::path(
    post,
    path = "/api/campaigns/{id}/decline",
    tag = CAMPAIGN_TAG,
    params(("id" = i32, Path, description = "Campaign id")),
    responses(
        (status = 200, description = "Declined campaign", body = Campaign),
        (status = 404, description = "Campaign not found", body = ErrorDto)
    ),
)]
pub async fn decline_campaign(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let campaign = CampaignService::new(&state).decline(id).await?;

    Ok((StatusCode::OK, Json(campaign)))
}
