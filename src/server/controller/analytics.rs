use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::analytics::{AnalyticsDto, AnalyticsQuery},
    server::{error::Error, model::app::AppState, service::analytics::AnalyticsService},
};

pub static ANALYTICS_TAG: &str = "analytics";

/// Performance report for a time range
///
/// Unknown ranges report the last 30 days.
#[utoipa::path(
    get,
    path = "/api/analytics",
    tag = ANALYTICS_TAG,
    params(AnalyticsQuery),
    responses(
        (status = 200, description = "Analytics report", body = AnalyticsDto)
    ),
)]
pub async fn get_analytics(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<impl IntoResponse, Error> {
    let report = AnalyticsService::new(&state)
        .get_analytics(query.range.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(report)))
}
