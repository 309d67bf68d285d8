//! Account settings service.
//!
//! Profile, notification, billing, security and social account settings of the signed in user.
//! Settings are a single record, every change is applied to a copy and stored only when it
//! passes validation.

#[cfg(test)]
mod tests;

use chrono::Utc;
use entity::prelude::{Settings, SocialAccount, SocialPlatform, SubscriptionTier};

use crate::{
    model::settings::{
        SettingsPatchDto, SlotUsageDto, SocialAccountChangeDto, SubscriptionTierDto,
        MINIMUM_PASSWORD_LENGTH,
    },
    server::{
        data::settings::SettingsRepository,
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::latency::Latency,
        util::time::one_month_after,
    },
};

pub struct SettingsService<'a> {
    state: &'a AppState,
}

impl<'a> SettingsService<'a> {
    /// Creates a new instance of [`SettingsService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub async fn get_settings(&self) -> Result<Settings, Error> {
        Latency::Query.simulate(&self.state.config).await;

        Ok(SettingsRepository::new(&self.state.db).get().await)
    }

    /// Merges the fields present in `patch` into the stored settings.
    pub async fn update_settings(&self, patch: SettingsPatchDto) -> Result<Settings, Error> {
        Latency::Compute.simulate(&self.state.config).await;

        SettingsRepository::new(&self.state.db)
            .update(|settings| {
                patch.apply(settings);
                Ok::<(), Error>(())
            })
            .await
    }

    /// Replaces the account password.
    ///
    /// # Returns
    /// - `Ok(())` - The new password is stored
    /// - `Err(Error::ValidationError)` - The new password is shorter than 8 characters or the
    ///   current password does not match
    pub async fn update_password(&self, current: &str, new_password: String) -> Result<(), Error> {
        Latency::Write.simulate(&self.state.config).await;

        if new_password.chars().count() < MINIMUM_PASSWORD_LENGTH {
            return Err(ValidationError::WeakPassword(MINIMUM_PASSWORD_LENGTH).into());
        }

        let replaced = SettingsRepository::new(&self.state.db)
            .replace_password(current, new_password)
            .await;
        if !replaced {
            return Err(ValidationError::IncorrectPassword.into());
        }

        Ok(())
    }

    pub async fn upload_profile_image(&self, image_url: String) -> Result<Settings, Error> {
        Latency::Heavy.simulate(&self.state.config).await;

        let image_url = image_url.trim().to_string();
        if image_url.is_empty() {
            return Err(ValidationError::EmptyImageUrl.into());
        }

        SettingsRepository::new(&self.state.db)
            .update(|settings| {
                settings.profile_image = Some(image_url);
                Ok::<(), Error>(())
            })
            .await
    }

    /// Moves the account to another plan.
    ///
    /// Slots follow the plan and used slots are clamped to the new limit. Paid plans bill again
    /// one month from now, the free plan has no billing date.
    pub async fn update_subscription_tier(&self, tier: &str) -> Result<Settings, Error> {
        Latency::Write.simulate(&self.state.config).await;

        let tier = SubscriptionTier::parse(tier)
            .ok_or_else(|| ValidationError::InvalidSubscriptionTier(tier.to_string()))?;
        let now = Utc::now();

        SettingsRepository::new(&self.state.db)
            .update(|settings| {
                settings.subscription_tier = tier;
                settings.total_slots = tier.slot_limit();
                settings.used_slots = settings.used_slots.min(settings.total_slots);
                settings.next_billing_date = match tier {
                    SubscriptionTier::Free => None,
                    _ => Some(one_month_after(now)),
                };
                Ok::<(), Error>(())
            })
            .await
    }

    /// The plan catalogue, cheapest first.
    pub async fn get_subscription_tiers(&self) -> Result<Vec<SubscriptionTierDto>, Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        Ok(SubscriptionTier::ALL.into_iter().map(tier_details).collect())
    }

    pub async fn get_slot_usage(&self) -> Result<SlotUsageDto, Error> {
        Latency::Lookup.simulate(&self.state.config).await;

        let settings = SettingsRepository::new(&self.state.db).get().await;

        Ok(SlotUsageDto::from_settings(&settings))
    }

    /// Sets the number of campaign slots in use, which may not exceed the plan's slots.
    pub async fn update_slot_usage(&self, used_slots: u32) -> Result<SlotUsageDto, Error> {
        Latency::Query.simulate(&self.state.config).await;

        let settings = SettingsRepository::new(&self.state.db)
            .update(|settings| {
                if used_slots > settings.total_slots {
                    return Err(Error::from(ValidationError::SlotLimitExceeded));
                }
                settings.used_slots = used_slots;
                Ok(())
            })
            .await?;

        Ok(SlotUsageDto::from_settings(&settings))
    }

    /// Links a social account, handled by a name derived from the profile's full name.
    ///
    /// New connections start unverified with no followers.
    pub async fn connect_social_account(
        &self,
        platform: SocialPlatform,
    ) -> Result<SocialAccountChangeDto, Error> {
        Latency::Query.simulate(&self.state.config).await;

        let settings = SettingsRepository::new(&self.state.db)
            .update(|settings| {
                let username = social_handle(&settings.full_name);
                *settings.social_accounts.get_mut(platform) = SocialAccount {
                    connected: true,
                    verified: false,
                    username,
                    follower_count: 0,
                };
                Ok::<(), Error>(())
            })
            .await?;

        Ok(social_change(platform, &settings))
    }

    pub async fn disconnect_social_account(
        &self,
        platform: SocialPlatform,
    ) -> Result<SocialAccountChangeDto, Error> {
        Latency::Query.simulate(&self.state.config).await;

        let settings = SettingsRepository::new(&self.state.db)
            .update(|settings| {
                *settings.social_accounts.get_mut(platform) = SocialAccount::default();
                Ok::<(), Error>(())
            })
            .await?;

        Ok(social_change(platform, &settings))
    }
}

/// Price and features of a plan.
pub fn tier_details(tier: SubscriptionTier) -> SubscriptionTierDto {
    let (price, features): (f64, &[&str]) = match tier {
        SubscriptionTier::Free => (
            0.0,
            &["Basic Analytics", "Email Support", "Campaign Templates"],
        ),
        SubscriptionTier::Starter => (
            29.0,
            &[
                "Advanced Analytics",
                "Priority Support",
                "Campaign Templates",
                "API Access",
            ],
        ),
        SubscriptionTier::Growth => (
            59.0,
            &[
                "Real-time Analytics",
                "24/7 Support",
                "API Access",
                "Team Collaboration",
                "Custom Integrations",
            ],
        ),
        SubscriptionTier::Pro => (
            99.0,
            &[
                "AI-Powered Analytics",
                "Dedicated Manager",
                "Custom Integrations",
                "White-label Options",
                "Priority Processing",
            ],
        ),
    };

    SubscriptionTierDto {
        tier,
        name: tier.display_name().to_string(),
        price,
        slots: tier.slot_limit(),
        features: features.iter().map(|feature| feature.to_string()).collect(),
    }
}

/// Lowercase handle with whitespace removed, `Alex Morgan` becomes `alexmorgan`.
fn social_handle(full_name: &str) -> String {
    full_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn social_change(platform: SocialPlatform, settings: &Settings) -> SocialAccountChangeDto {
    SocialAccountChangeDto {
        platform,
        account: settings.social_accounts.get(platform).clone(),
        meets_verification_minimum: settings.social_accounts.meets_verification_minimum(),
    }
}
