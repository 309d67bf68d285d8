use chrono::NaiveDate;
use entity::prelude::{TopInfluencer, TopProduct};
use serde::{Deserialize, Serialize};

/// Reporting window of the analytics page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Quarter,
        TimeRange::Year,
    ];

    /// Factor applied to the thirty day baseline totals.
    pub fn multiplier(&self) -> f64 {
        match self {
            TimeRange::Week => 0.25,
            TimeRange::Month => 1.0,
            TimeRange::Quarter => 3.0,
            TimeRange::Year => 12.0,
        }
    }

    /// Number of chart points, one per day.
    pub fn days(&self) -> u32 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
            TimeRange::Year => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
            TimeRange::Year => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Week => "Last 7 days",
            TimeRange::Month => "Last 30 days",
            TimeRange::Quarter => "Last 90 days",
            TimeRange::Year => "Last year",
        }
    }

    /// Parse a range, falling back to thirty days for unknown values.
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|range| range.as_str() == value)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
pub struct AnalyticsQuery {
    /// `7d`, `30d`, `90d` or `1y`
    pub range: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChartPointDto {
    pub date: NaiveDate,
    pub revenue: u32,
    pub views: u32,
    pub conversions: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDto {
    pub time_range: TimeRange,
    pub total_revenue: f64,
    pub total_earnings: f64,
    pub active_campaigns: u64,
    pub completed_campaigns: u64,
    pub total_views: u64,
    pub total_engagement: u64,
    pub conversion_rate: f64,
    pub success_rate: f64,
    pub chart_data: Vec<ChartPointDto>,
    pub top_products: Vec<TopProduct>,
    pub top_influencers: Vec<TopInfluencer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_round_trip_their_wire_names() {
        for range in TimeRange::ALL {
            assert_eq!(TimeRange::parse(range.as_str()), range);
        }
        assert_eq!(TimeRange::parse("2w"), TimeRange::Month);
    }

    #[test]
    fn ranges_scale_and_size_charts() {
        assert_eq!(TimeRange::Week.multiplier(), 0.25);
        assert_eq!(TimeRange::Year.days(), 365);
    }
}
