use serde::{Deserialize, Serialize};

/// Thirty day baseline the analytics service scales by the requested time range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsBase {
    pub total_revenue: f64,
    pub total_earnings: f64,
    pub active_campaigns: u32,
    pub completed_campaigns: u32,
    pub total_views: u64,
    pub total_engagement: u64,
    pub conversion_rate: f64,
    pub success_rate: f64,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
    #[serde(default)]
    pub top_influencers: Vec<TopInfluencer>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub name: String,
    pub revenue: f64,
    pub campaigns: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TopInfluencer {
    pub name: String,
    pub followers: String,
    pub engagement: f64,
    pub campaigns: u32,
}
