use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{CommissionType, ContentStyle, EngagementTier, Niche};

/// A store product that influencers can promote.
///
/// The SmartMatch fields describe the kind of creator the store is looking for and are only
/// meaningful when `smart_match` is enabled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub niche: Niche,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub commission_type: CommissionType,
    pub commission_value: f64,
    #[serde(default)]
    pub smart_match: bool,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub content_style: Option<ContentStyle>,
    #[serde(default)]
    pub engagement_tier: Option<EngagementTier>,
    #[serde(default)]
    pub quality_score: Option<u8>,
    #[serde(default)]
    pub boost_active: bool,
    #[serde(default = "default_boost_multiplier")]
    pub boost_multiplier: f64,
    #[serde(default)]
    pub boost_activated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub active_campaigns: u32,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub total_sales: u64,
}

fn default_boost_multiplier() -> f64 {
    1.0
}
