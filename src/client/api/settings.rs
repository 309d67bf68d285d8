use entity::prelude::{Settings, SocialPlatform};

use super::Method;
use crate::model::settings::{
    PasswordChangeDto, ProfileImageDto, SettingsPatchDto, SlotUsageDto, SocialAccountChangeDto,
    SubscriptionChangeDto, SubscriptionTierDto,
};

pub async fn get_settings() -> Result<Settings, String> {
    super::get("/api/settings").await
}

pub async fn update_settings(patch: &SettingsPatchDto) -> Result<Settings, String> {
    super::send(Method::Patch, "/api/settings", patch).await
}

pub async fn update_password(change: &PasswordChangeDto) -> Result<(), String> {
    super::call_empty(Method::Put, "/api/settings/password", Some(change)).await
}

pub async fn upload_profile_image(image_url: String) -> Result<Settings, String> {
    super::send(
        Method::Put,
        "/api/settings/profile-image",
        &ProfileImageDto { image_url },
    )
    .await
}

pub async fn update_subscription_tier(tier: &str) -> Result<Settings, String> {
    let change = SubscriptionChangeDto {
        tier: tier.to_string(),
    };
    super::send(Method::Put, "/api/settings/subscription", &change).await
}

pub async fn get_subscription_tiers() -> Result<Vec<SubscriptionTierDto>, String> {
    super::get("/api/settings/subscription/tiers").await
}

pub async fn get_slot_usage() -> Result<SlotUsageDto, String> {
    super::get("/api/settings/slots").await
}

pub async fn connect_social_account(
    platform: SocialPlatform,
) -> Result<SocialAccountChangeDto, String> {
    super::call(
        Method::Post,
        &format!("/api/settings/social/{}", platform.as_str()),
    )
    .await
}

pub async fn disconnect_social_account(
    platform: SocialPlatform,
) -> Result<SocialAccountChangeDto, String> {
    super::call(
        Method::Delete,
        &format!("/api/settings/social/{}", platform.as_str()),
    )
    .await
}
