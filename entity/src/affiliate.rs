use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum AffiliateStatus {
    #[default]
    Active,
    Inactive,
}

/// A member of the referral program earning commission on referred subscriptions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Affiliate {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub referral_code: String,
    #[serde(default)]
    pub status: AffiliateStatus,
    pub join_date: DateTime<Utc>,
    pub total_earnings: f64,
    pub pending_commissions: f64,
    pub total_referrals: u32,
    #[serde(default)]
    pub successful_referrals: u32,
    /// Share of a referred subscription's value paid out, between 0 and 1.
    pub commission_rate: f64,
    #[serde(default)]
    pub last_payout_date: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ReferralStatus {
    #[default]
    Pending,
    Converted,
    Expired,
}

impl ReferralStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferralStatus::Pending => "pending",
            ReferralStatus::Converted => "converted",
            ReferralStatus::Expired => "expired",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    pub id: i32,
    pub affiliate_id: i32,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub signup_date: DateTime<Utc>,
    pub status: ReferralStatus,
    pub subscription_plan: Option<String>,
    pub subscription_value: f64,
    pub commission_earned: f64,
    #[serde(default)]
    pub conversion_date: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum CommissionStatus {
    #[default]
    Pending,
    Processing,
    Paid,
}

impl CommissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionStatus::Pending => "pending",
            CommissionStatus::Processing => "processing",
            CommissionStatus::Paid => "paid",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub id: i32,
    pub affiliate_id: i32,
    pub referral_id: i32,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub status: CommissionStatus,
    pub payout_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub subscription_plan: Option<String>,
    #[serde(default)]
    pub customer_name: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Pending,
    #[default]
    Completed,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub id: i32,
    pub affiliate_id: i32,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub status: PayoutStatus,
    pub method: String,
    pub transaction_id: String,
    #[serde(default)]
    pub commissions_included: u32,
}
