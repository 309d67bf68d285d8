use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::{Affiliate, Commission, Payout, Referral};
use serde::Deserialize;

use crate::{
    model::{
        affiliate::{
            AffiliatePatchDto, AffiliatePayoutRequestDto, AffiliateStatsDto, ConvertReferralDto,
            NewAffiliateDto, NewReferralDto, ReferralConversionDto, ReferralLinkDto,
            TOP_PERFORMER_LIMIT,
        },
        api::ErrorDto,
        page::{Page, PageQuery},
    },
    server::{
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::affiliate::AffiliateService,
    },
};

pub static AFFILIATE_TAG: &str = "affiliate";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct TopPerformersParams {
    /// Number of affiliates to return, defaults to 5
    pub limit: Option<usize>,
}

/// List one page of affiliates
#[utoipa::path(
    get,
    path = "/api/affiliates",
    tag = AFFILIATE_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of affiliates", body = Page<Affiliate>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_affiliates(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let page = AffiliateService::new(&state).get_all(query).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get an affiliate by id
#[utoipa::path(
    get,
    path = "/api/affiliates/{id}",
    tag = AFFILIATE_TAG,
    params(("id" = i32, Path, description = "Affiliate id")),
    responses(
        (status = 200, description = "The affiliate", body = Affiliate),
        (status = 404, description = "Affiliate not found", body = ErrorDto)
    ),
)]
pub async fn get_affiliate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let affiliate = AffiliateService::new(&state)
        .get_by_id(id)
        .await?
        .ok_or(ResourceError::AffiliateNotFound(id))?;

    Ok((StatusCode::OK, Json(affiliate)))
}

/// Enrol a new affiliate with a generated referral code
#[utoipa::path(
    post,
    path = "/api/affiliates",
    tag = AFFILIATE_TAG,
    request_body = NewAffiliateDto,
    responses(
        (status = 201, description = "Created affiliate", body = Affiliate),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_affiliate(
    State(state): State<AppState>,
    Json(affiliate): Json<NewAffiliateDto>,
) -> Result<impl IntoResponse, Error> {
    let affiliate = AffiliateService::new(&state).create(affiliate).await?;

    Ok((StatusCode::CREATED, Json(affiliate)))
}

/// Update the given fields of an affiliate
#[utoipa::path(
    patch,
    path = "/api/affiliates/{id}",
    tag = AFFILIATE_TAG,
    params(("id" = i32, Path, description = "Affiliate id")),
    request_body = AffiliatePatchDto,
    responses(
        (status = 200, description = "Updated affiliate", body = Affiliate),
        (status = 404, description = "Affiliate not found", body = ErrorDto)
    ),
)]
pub async fn update_affiliate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<AffiliatePatchDto>,
) -> Result<impl IntoResponse, Error> {
    let affiliate = AffiliateService::new(&state).update(id, patch).await?;

    Ok((StatusCode::OK, Json(affiliate)))
}

/// Remove an affiliate
#[utoipa::path(
    delete,
    path = "/api/affiliates/{id}",
    tag = AFFILIATE_TAG,
    params(("id" = i32, Path, description = "Affiliate id")),
    responses(
        (status = 204, description = "Affiliate deleted"),
        (status = 404, description = "Affiliate not found", body = ErrorDto)
    ),
)]
pub async fn delete_affiliate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    AffiliateService::new(&state).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Referral, commission and payout totals of an affiliate
#[utoipa::path(
    get,
    path = "/api/affiliates/{id}/stats",
    tag = AFFILIATE_TAG,
    params(("id" = i32, Path, description = "Affiliate id")),
    responses(
        (status = 200, description = "Affiliate statistics", body = AffiliateStatsDto),
        (status = 404, description = "Affiliate not found", body = ErrorDto)
    ),
)]
pub async fn get_affiliate_stats(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let stats = AffiliateService::new(&state).get_affiliate_stats(id).await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Signup link carrying an affiliate's referral code
#[utoipa::path(
    get,
    path = "/api/affiliates/{id}/link",
    tag = AFFILIATE_TAG,
    params(("id" = i32, Path, description = "Affiliate id")),
    responses(
        (status = 200, description = "Referral link", body = ReferralLinkDto),
        (status = 404, description = "Affiliate not found", body = ErrorDto)
    ),
)]
pub async fn get_referral_link(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let affiliate_service = AffiliateService::new(&state);
    let affiliate = affiliate_service
        .get_by_id(id)
        .await?
        .ok_or(ResourceError::AffiliateNotFound(id))?;

    let link = affiliate_service.generate_referral_link(&affiliate.referral_code);

    Ok((StatusCode::OK, Json(link)))
}

/// Referrals brought in by an affiliate
#[utoipa::path(
    get,
    path = "/api/affiliates/{id}/referrals",
    tag = AFFILIATE_TAG,
    params(("id" = i32, Path, description = "Affiliate id")),
    responses(
        (status = 200, description = "Referrals of the affiliate", body = Vec<Referral>)
    ),
)]
pub async fn get_affiliate_referrals(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let referrals = AffiliateService::new(&state)
        .get_referrals_by_affiliate(id)
        .await?;

    Ok((StatusCode::OK, Json(referrals)))
}

/// Commissions earned by an affiliate
#[utoipa::path(
    get,
    path = "/api/affiliates/{id}/commissions",
    tag = AFFILIATE_TAG,
    params(("id" = i32, Path, description = "Affiliate id")),
    responses(
        (status = 200, description = "Commissions of the affiliate", body = Vec<Commission>)
    ),
)]
pub async fn get_affiliate_commissions(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let commissions = AffiliateService::new(&state)
        .get_commissions_by_affiliate(id)
        .await?;

    Ok((StatusCode::OK, Json(commissions)))
}

/// Payouts made to an affiliate
#[utoipa::path(
    get,
    path = "/api/affiliates/{id}/payouts",
    tag = AFFILIATE_TAG,
    params(("id" = i32, Path, description = "Affiliate id")),
    responses(
        (status = 200, description = "Payouts of the affiliate", body = Vec<Payout>)
    ),
)]
pub async fn get_affiliate_payouts(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let payouts = AffiliateService::new(&state)
        .get_payouts_by_affiliate(id)
        .await?;

    Ok((StatusCode::OK, Json(payouts)))
}

/// Pay out an affiliate's pending commissions
#[utoipa::path(
    post,
    path = "/api/affiliates/{id}/payouts",
    tag = AFFILIATE_TAG,
    params(("id" = i32, Path, description = "Affiliate id")),
    request_body = AffiliatePayoutRequestDto,
    responses(
        (status = 201, description = "Payout completed", body = Payout),
        (status = 400, description = "Invalid payout amount", body = ErrorDto),
        (status = 404, description = "Affiliate not found", body = ErrorDto)
    ),
)]
pub async fn create_payout(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<AffiliatePayoutRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let payout = AffiliateService::new(&state).create_payout(id, request).await?;

    Ok((StatusCode::CREATED, Json(payout)))
}

/// Affiliates with the highest total earnings
#[utoipa::path(
    get,
    path = "/api/affiliates/top",
    tag = AFFILIATE_TAG,
    params(TopPerformersParams),
    responses(
        (status = 200, description = "Top earning affiliates", body = Vec<Affiliate>)
    ),
)]
pub async fn get_top_performers(
    State(state): State<AppState>,
    Query(params): Query<TopPerformersParams>,
) -> Result<impl IntoResponse, Error> {
    let affiliates = AffiliateService::new(&state)
        .get_top_performers(params.limit.unwrap_or(TOP_PERFORMER_LIMIT))
        .await?;

    Ok((StatusCode::OK, Json(affiliates)))
}

/// Look up the active affiliate owning a referral code
///
/// Responds with `null` when no active affiliate uses the code.
#[utoipa::path(
    get,
    path = "/api/affiliates/validate/{code}",
    tag = AFFILIATE_TAG,
    params(("code" = String, Path, description = "Referral code")),
    responses(
        (status = 200, description = "The affiliate or null", body = Option<Affiliate>)
    ),
)]
pub async fn validate_referral_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let affiliate = AffiliateService::new(&state)
        .validate_referral_code(&code)
        .await?;

    Ok((StatusCode::OK, Json(affiliate)))
}

/// List every referral
#[utoipa::path(
    get,
    path = "/api/referrals",
    tag = AFFILIATE_TAG,
    responses(
        (status = 200, description = "All referrals", body = Vec<Referral>)
    ),
)]
pub async fn get_referrals(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let referrals = AffiliateService::new(&state).get_all_referrals().await?;

    Ok((StatusCode::OK, Json(referrals)))
}

/// Record a signup referred by an affiliate
#[utoipa::path(
    post,
    path = "/api/referrals",
    tag = AFFILIATE_TAG,
    request_body = NewReferralDto,
    responses(
        (status = 201, description = "Pending referral", body = Referral),
        (status = 404, description = "Affiliate not found", body = ErrorDto)
    ),
)]
pub async fn create_referral(
    State(state): State<AppState>,
    Json(referral): Json<NewReferralDto>,
) -> Result<impl IntoResponse, Error> {
    let referral = AffiliateService::new(&state).create_referral(referral).await?;

    Ok((StatusCode::CREATED, Json(referral)))
}

/// Convert a referral into a paying subscriber, crediting a pending commission
#[utoipa::path(
    post,
    path = "/api/referrals/{id}/convert",
    tag = AFFILIATE_TAG,
    params(("id" = i32, Path, description = "Referral id")),
    request_body = ConvertReferralDto,
    responses(
        (status = 200, description = "Converted referral", body = ReferralConversionDto),
        (status = 400, description = "Referral already converted", body = ErrorDto),
        (status = 404, description = "Referral or affiliate not found", body = ErrorDto)
    ),
)]
pub async fn convert_referral(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(conversion): Json<ConvertReferralDto>,
) -> Result<impl IntoResponse, Error> {
    let conversion = AffiliateService::new(&state)
        .convert_referral(id, conversion)
        .await?;

    Ok((StatusCode::OK, Json(conversion)))
}

/// List every commission
#[utoipa::path(
    get,
    path = "/api/commissions",
    tag = AFFILIATE_TAG,
    responses(
        (status = 200, description = "All commissions", body = Vec<Commission>)
    ),
)]
pub async fn get_commissions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let commissions = AffiliateService::new(&state).get_all_commissions().await?;

    Ok((StatusCode::OK, Json(commissions)))
}

/// Get a commission by id
#[utoipa::path(
    get,
    path = "/api/commissions/{id}",
    tag = AFFILIATE_TAG,
    params(("id" = i32, Path, description = "Commission id")),
    responses(
        (status = 200, description = "The commission", body = Commission),
        (status = 404, description = "Commission not found", body = ErrorDto)
    ),
)]
pub async fn get_commission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let commission = AffiliateService::new(&state)
        .get_commission_by_id(id)
        .await?
        .ok_or(ResourceError::CommissionNotFound(id))?;

    Ok((StatusCode::OK, Json(commission)))
}

/// List every payout
#[utoipa::path(
    get,
    path = "/api/payouts",
    tag = AFFILIATE_TAG,
    responses(
        (status = 200, description = "All payouts", body = Vec<Payout>)
    ),
)]
pub async fn get_payouts(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let payouts = AffiliateService::new(&state).get_all_payouts().await?;

    Ok((StatusCode::OK, Json(payouts)))
}
