use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Starter,
    Growth,
    Pro,
}

impl SubscriptionTier {
    pub const ALL: [SubscriptionTier; 4] = [
        SubscriptionTier::Free,
        SubscriptionTier::Starter,
        SubscriptionTier::Growth,
        SubscriptionTier::Pro,
    ];

    /// Campaign slots included in the tier.
    pub fn slot_limit(&self) -> u32 {
        match self {
            SubscriptionTier::Free => 2,
            SubscriptionTier::Starter => 5,
            SubscriptionTier::Growth => 10,
            SubscriptionTier::Pro => 999,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "free",
            SubscriptionTier::Starter => "starter",
            SubscriptionTier::Growth => "growth",
            SubscriptionTier::Pro => "pro",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "Free",
            SubscriptionTier::Starter => "Starter",
            SubscriptionTier::Growth => "Growth",
            SubscriptionTier::Pro => "Pro",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
    Youtube,
    Tiktok,
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 6] = [
        SocialPlatform::Youtube,
        SocialPlatform::Tiktok,
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Twitter,
        SocialPlatform::Linkedin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Tiktok => "tiktok",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Linkedin => "linkedin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SocialPlatform::Youtube => "YouTube",
            SocialPlatform::Tiktok => "TikTok",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Linkedin => "LinkedIn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|platform| platform.as_str() == value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SocialAccount {
    pub connected: bool,
    pub verified: bool,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub follower_count: u64,
}

/// Social media accounts linked to the profile, one slot per supported platform.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct SocialAccounts {
    pub youtube: SocialAccount,
    pub tiktok: SocialAccount,
    pub facebook: SocialAccount,
    pub instagram: SocialAccount,
    pub twitter: SocialAccount,
    pub linkedin: SocialAccount,
}

impl SocialAccounts {
    /// Minimum number of connected platforms for a creator to keep verified status.
    pub const VERIFICATION_MINIMUM: usize = 2;

    pub fn get(&self, platform: SocialPlatform) -> &SocialAccount {
        match platform {
            SocialPlatform::Youtube => &self.youtube,
            SocialPlatform::Tiktok => &self.tiktok,
            SocialPlatform::Facebook => &self.facebook,
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::Linkedin => &self.linkedin,
        }
    }

    pub fn get_mut(&mut self, platform: SocialPlatform) -> &mut SocialAccount {
        match platform {
            SocialPlatform::Youtube => &mut self.youtube,
            SocialPlatform::Tiktok => &mut self.tiktok,
            SocialPlatform::Facebook => &mut self.facebook,
            SocialPlatform::Instagram => &mut self.instagram,
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::Linkedin => &mut self.linkedin,
        }
    }

    pub fn connected_platforms(&self) -> Vec<SocialPlatform> {
        SocialPlatform::ALL
            .into_iter()
            .filter(|platform| self.get(*platform).connected)
            .collect()
    }

    pub fn meets_verification_minimum(&self) -> bool {
        self.connected_platforms().len() >= Self::VERIFICATION_MINIMUM
    }
}

/// Profile, notification and billing preferences of the signed in user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub campaign_updates: bool,
    pub show_activity_status: bool,
    pub subscription_tier: SubscriptionTier,
    pub used_slots: u32,
    pub total_slots: u32,
    #[serde(default)]
    pub next_billing_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub social_accounts: SocialAccounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_platforms_follow_account_flags() {
        let mut accounts = SocialAccounts::default();
        assert!(accounts.connected_platforms().is_empty());

        accounts.get_mut(SocialPlatform::Tiktok).connected = true;
        assert_eq!(accounts.connected_platforms(), vec![SocialPlatform::Tiktok]);
        assert!(!accounts.meets_verification_minimum());

        accounts.get_mut(SocialPlatform::Youtube).connected = true;
        assert!(accounts.meets_verification_minimum());
    }

    #[test]
    fn tier_slot_limits() {
        assert_eq!(SubscriptionTier::Free.slot_limit(), 2);
        assert_eq!(SubscriptionTier::Starter.slot_limit(), 5);
        assert_eq!(SubscriptionTier::Growth.slot_limit(), 10);
        assert_eq!(SubscriptionTier::Pro.slot_limit(), 999);
    }
}
