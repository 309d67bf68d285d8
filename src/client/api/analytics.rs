use crate::model::analytics::{AnalyticsDto, TimeRange};

pub async fn get_analytics(range: TimeRange) -> Result<AnalyticsDto, String> {
    super::get(&format!("/api/analytics?range={}", range.as_str())).await
}
