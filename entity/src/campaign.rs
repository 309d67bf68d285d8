use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{CommissionType, Niche};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    #[default]
    Pending,
    Accepted,
    Completed,
    Declined,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Pending => "pending",
            CampaignStatus::Accepted => "accepted",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Declined => "declined",
        }
    }
}

/// A collaboration offer from a store to influencers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: i32,
    pub product_name: String,
    pub store_name: String,
    pub niche: Niche,
    pub commission_type: CommissionType,
    pub commission_value: f64,
    pub status: CampaignStatus,
    pub deadline: Option<DateTime<Utc>>,
    pub description: String,
    #[serde(default)]
    pub product_image: Option<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub applications: u32,
    pub created_at: DateTime<Utc>,
}
