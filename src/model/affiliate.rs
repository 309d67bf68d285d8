use chrono::{DateTime, Utc};
use entity::prelude::{
    Affiliate, AffiliateStatus, Commission, CommissionStatus, Referral, ReferralStatus,
};
use serde::{Deserialize, Serialize};

/// Default size of the affiliate list page.
pub const AFFILIATE_PAGE_LIMIT: usize = 50;

/// Default number of affiliates on the leaderboard.
pub const TOP_PERFORMER_LIMIT: usize = 5;

pub const DEFAULT_PAYOUT_METHOD: &str = "bank_transfer";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewAffiliateDto {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AffiliatePatchDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<AffiliateStatus>,
    pub commission_rate: Option<f64>,
}

impl AffiliatePatchDto {
    pub fn apply(self, affiliate: &mut Affiliate) {
        if let Some(name) = self.name {
            affiliate.name = name;
        }
        if let Some(email) = self.email {
            affiliate.email = email;
        }
        if let Some(status) = self.status {
            affiliate.status = status;
        }
        if let Some(commission_rate) = self.commission_rate {
            affiliate.commission_rate = commission_rate;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewReferralDto {
    pub affiliate_id: i32,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Body of `POST /api/referrals/{id}/convert`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ConvertReferralDto {
    pub subscription_plan: String,
    pub subscription_value: f64,
}

/// A converted referral and the commission it generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReferralConversionDto {
    pub referral: Referral,
    pub commission: Commission,
}

/// Body of `POST /api/affiliates/{id}/payouts`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AffiliatePayoutRequestDto {
    pub amount: f64,
    #[serde(default)]
    pub method: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AffiliateStatsDto {
    pub total_referrals: usize,
    pub converted_referrals: usize,
    pub pending_referrals: usize,
    /// Converted referrals as a percentage of all referrals
    pub conversion_rate: f64,
    pub total_commissions: f64,
    pub paid_commissions: f64,
    pub pending_commissions: f64,
    pub avg_commission_value: f64,
    pub total_payouts: f64,
    pub last_payout_date: Option<DateTime<Utc>>,
}

/// Shareable signup link for a referral code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReferralLinkDto {
    pub referral_code: String,
    pub link: String,
}

/// Build the public signup link carrying a referral code.
pub fn referral_link(code: &str) -> String {
    format!("https://influencehub.com/signup?ref={}", code)
}

/// Search box and status dropdown of the referrals page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferralFilter {
    pub search: String,
    pub status: Option<ReferralStatus>,
}

impl ReferralFilter {
    pub fn apply(&self, referrals: &[Referral]) -> Vec<Referral> {
        let search = self.search.trim().to_lowercase();

        referrals
            .iter()
            .filter(|referral| {
                search.is_empty()
                    || referral.name.to_lowercase().contains(&search)
                    || referral.email.to_lowercase().contains(&search)
            })
            .filter(|referral| self.status.is_none_or(|status| referral.status == status))
            .cloned()
            .collect()
    }
}

/// Search box and status dropdown of the commissions page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommissionFilter {
    pub search: String,
    pub status: Option<CommissionStatus>,
}

impl CommissionFilter {
    pub fn apply(&self, commissions: &[Commission]) -> Vec<Commission> {
        let search = self.search.trim().to_lowercase();

        commissions
            .iter()
            .filter(|commission| {
                search.is_empty()
                    || commission.customer_name.to_lowercase().contains(&search)
                    || commission
                        .subscription_plan
                        .as_deref()
                        .is_some_and(|plan| plan.to_lowercase().contains(&search))
            })
            .filter(|commission| self.status.is_none_or(|status| commission.status == status))
            .cloned()
            .collect()
    }
}
