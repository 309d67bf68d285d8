use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::{Settings, SocialPlatform};

use crate::{
    model::{
        api::ErrorDto,
        settings::{
            PasswordChangeDto, ProfileImageDto, SettingsPatchDto, SlotUpdateDto, SlotUsageDto,
            SocialAccountChangeDto, SubscriptionChangeDto, SubscriptionTierDto,
        },
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::settings::SettingsService,
    },
};

pub static SETTINGS_TAG: &str = "settings";

/// Get the account settings
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Account settings", body = Settings)
    ),
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let settings = SettingsService::new(&state).get_settings().await?;

    Ok((StatusCode::OK, Json(settings)))
}

/// Update the given profile and notification settings
#[utoipa::path(
    patch,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    request_body = SettingsPatchDto,
    responses(
        (status = 200, description = "Updated settings", body = Settings)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(patch): Json<SettingsPatchDto>,
) -> Result<impl IntoResponse, Error> {
    let settings = SettingsService::new(&state).update_settings(patch).await?;

    Ok((StatusCode::OK, Json(settings)))
}

/// Change the account password
#[utoipa::path(
    put,
    path = "/api/settings/password",
    tag = SETTINGS_TAG,
    request_body = PasswordChangeDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Wrong or weak password", body = ErrorDto)
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    Json(change): Json<PasswordChangeDto>,
) -> Result<impl IntoResponse, Error> {
    SettingsService::new(&state)
        .update_password(&change.current_password, change.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Set the profile image
#[utoipa::path(
    put,
    path = "/api/settings/profile-image",
    tag = SETTINGS_TAG,
    request_body = ProfileImageDto,
    responses(
        (status = 200, description = "Updated settings", body = Settings),
        (status = 400, description = "Empty image url", body = ErrorDto)
    ),
)]
pub async fn upload_profile_image(
    State(state): State<AppState>,
    Json(image): Json<ProfileImageDto>,
) -> Result<impl IntoResponse, Error> {
    let settings = SettingsService::new(&state)
        .upload_profile_image(image.image_url)
        .await?;

    Ok((StatusCode::OK, Json(settings)))
}

/// Change the subscription plan
#[utoipa::path(
    put,
    path = "/api/settings/subscription",
    tag = SETTINGS_TAG,
    request_body = SubscriptionChangeDto,
    responses(
        (status = 200, description = "Updated settings", body = Settings),
        (status = 400, description = "Unknown plan", body = ErrorDto)
    ),
)]
pub async fn update_subscription_tier(
    State(state): State<AppState>,
    Json(change): Json<SubscriptionChangeDto>,
) -> Result<impl IntoResponse, Error> {
    let settings = SettingsService::new(&state)
        .update_subscription_tier(&change.tier)
        .await?;

    Ok((StatusCode::OK, Json(settings)))
}

/// List the subscription plans
#[utoipa::path(
    get,
    path = "/api/settings/subscription/tiers",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Plan catalogue", body = Vec<SubscriptionTierDto>)
    ),
)]
pub async fn get_subscription_tiers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let tiers = SettingsService::new(&state).get_subscription_tiers().await?;

    Ok((StatusCode::OK, Json(tiers)))
}

/// Get campaign slot usage
#[utoipa::path(
    get,
    path = "/api/settings/slots",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Slot usage", body = SlotUsageDto)
    ),
)]
pub async fn get_slot_usage(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let usage = SettingsService::new(&state).get_slot_usage().await?;

    Ok((StatusCode::OK, Json(usage)))
}

/// Set the number of campaign slots in use
#[utoipa::path(
    put,
    path = "/api/settings/slots",
    tag = SETTINGS_TAG,
    request_body = SlotUpdateDto,
    responses(
        (status = 200, description = "Slot usage", body = SlotUsageDto),
        (status = 400, description = "Above the plan's slot limit", body = ErrorDto)
    ),
)]
pub async fn update_slot_usage(
    State(state): State<AppState>,
    Json(update): Json<SlotUpdateDto>,
) -> Result<impl IntoResponse, Error> {
    let usage = SettingsService::new(&state)
        .update_slot_usage(update.used_slots)
        .await?;

    Ok((StatusCode::OK, Json(usage)))
}

/// Connect a social media account
#[utoipa::path(
    post,
    path = "/api/settings/social/{platform}",
    tag = SETTINGS_TAG,
    params(("platform" = String, Path, description = "Platform name such as youtube or tiktok")),
    responses(
        (status = 200, description = "Connected account", body = SocialAccountChangeDto),
        (status = 400, description = "Unsupported platform", body = ErrorDto)
    ),
)]
pub async fn connect_social_account(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let platform = parse_platform(&platform)?;
    let change = SettingsService::new(&state)
        .connect_social_account(platform)
        .await?;

    Ok((StatusCode::OK, Json(change)))
}

/// Disconnect a social media account
#[utoipa::path(
    delete,
    path = "/api/settings/social/{platform}",
    tag = SETTINGS_TAG,
    params(("platform" = String, Path, description = "Platform name such as youtube or tiktok")),
    responses(
        (status = 200, description = "Disconnected account", body = SocialAccountChangeDto),
        (status = 400, description = "Unsupported platform", body = ErrorDto)
    ),
)]
pub async fn disconnect_social_account(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let platform = parse_platform(&platform)?;
    let change = SettingsService::new(&state)
        .disconnect_social_account(platform)
        .await?;

    Ok((StatusCode::OK, Json(change)))
}

fn parse_platform(platform: &str) -> Result<SocialPlatform, ValidationError> {
    SocialPlatform::parse(platform)
        .ok_or_else(|| ValidationError::UnsupportedPlatform(platform.to_string()))
}
