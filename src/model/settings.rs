use chrono::{DateTime, Utc};
use entity::prelude::{Settings, SocialAccount, SocialPlatform, SubscriptionTier};
use serde::{Deserialize, Serialize};

/// Shortest password accepted by the password change form.
pub const MINIMUM_PASSWORD_LENGTH: usize = 8;

/// Body of `PATCH /api/settings`, absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatchDto {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub business_name: Option<String>,
    pub bio: Option<String>,
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub campaign_updates: Option<bool>,
    pub show_activity_status: Option<bool>,
}

impl SettingsPatchDto {
    pub fn apply(self, settings: &mut Settings) {
        if let Some(full_name) = self.full_name {
            settings.full_name = full_name;
        }
        if let Some(email) = self.email {
            settings.email = email;
        }
        if let Some(phone) = self.phone {
            settings.phone = phone;
        }
        if let Some(business_name) = self.business_name {
            settings.business_name = business_name;
        }
        if let Some(bio) = self.bio {
            settings.bio = bio;
        }
        if let Some(email_notifications) = self.email_notifications {
            settings.email_notifications = email_notifications;
        }
        if let Some(push_notifications) = self.push_notifications {
            settings.push_notifications = push_notifications;
        }
        if let Some(campaign_updates) = self.campaign_updates {
            settings.campaign_updates = campaign_updates;
        }
        if let Some(show_activity_status) = self.show_activity_status {
            settings.show_activity_status = show_activity_status;
        }
    }

    /// Patch carrying every profile field of `settings`.
    pub fn profile(settings: &Settings) -> Self {
        Self {
            full_name: Some(settings.full_name.clone()),
            email: Some(settings.email.clone()),
            phone: Some(settings.phone.clone()),
            business_name: Some(settings.business_name.clone()),
            bio: Some(settings.bio.clone()),
            ..Default::default()
        }
    }

    /// Patch carrying every notification toggle of `settings`.
    pub fn notifications(settings: &Settings) -> Self {
        Self {
            email_notifications: Some(settings.email_notifications),
            push_notifications: Some(settings.push_notifications),
            campaign_updates: Some(settings.campaign_updates),
            show_activity_status: Some(settings.show_activity_status),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeDto {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProfileImageDto {
    pub image_url: String,
}

/// Body of `PUT /api/settings/subscription`.
///
/// The tier stays a string so that unknown tiers reach the service and are rejected with a
/// readable message instead of a deserialization failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SubscriptionChangeDto {
    pub tier: String,
}

/// A plan of the subscription catalogue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SubscriptionTierDto {
    pub tier: SubscriptionTier,
    pub name: String,
    /// Monthly price in dollars
    pub price: f64,
    pub slots: u32,
    pub features: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SlotUsageDto {
    pub used: u32,
    pub total: u32,
    pub remaining: u32,
    pub percentage: f64,
}

impl SlotUsageDto {
    pub fn from_settings(settings: &Settings) -> Self {
        let percentage = if settings.total_slots == 0 {
            0.0
        } else {
            f64::from(settings.used_slots) / f64::from(settings.total_slots) * 100.0
        };

        Self {
            used: settings.used_slots,
            total: settings.total_slots,
            remaining: settings.total_slots.saturating_sub(settings.used_slots),
            percentage,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SlotUpdateDto {
    pub used_slots: u32,
}

/// Result of connecting or disconnecting a social account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SocialAccountChangeDto {
    pub platform: SocialPlatform,
    pub account: SocialAccount,
    /// Whether at least two platforms are still connected
    pub meets_verification_minimum: bool,
}

/// Next billing date shown on the billing tab.
pub fn billing_label(next_billing_date: Option<DateTime<Utc>>) -> String {
    match next_billing_date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => "No upcoming charge".to_string(),
    }
}
