//! Analytics service.
//!
//! Reports are generated from a thirty day baseline scaled to the requested range. The daily
//! chart is synthetic.


use chrono::{Days, NaiveDate, Utc};
use entity::prelude::AnalyticsBase;
use rand::Rng;

use crate::{
    model::analytics::{AnalyticsDto, ChartPointDto, TimeRange},
    server::{
        data::analytics::AnalyticsRepository, error::Error, model::app::AppState,
        service::latency::Latency,
    },
};

pub struct AnalyticsService<'a> {
    state: &'a AppState,
}

impl<'a> AnalyticsService<'a> {
    /// Creates a new instance of [`AnalyticsService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Builds the analytics report for `range`, unknown ranges report the last 30 days.
    pub async fn get_analytics(&self, range: Option<&str>) -> Result<AnalyticsDto, Error> {
        Latency::Compute.simulate(&self.state.config).await;

        let range = range.map(TimeRange::parse).unwrap_or_default();
        let base = AnalyticsRepository::new(&self.state.db).get_base();
        let chart_data = chart_data(range, Utc::now().date_naive(), &mut rand::rng());

        Ok(report(&base, range, chart_data))
    }
}

/// Scale the baseline totals to `range`, rounding counts and amounts down.
///
/// Rates and the top lists are passed through unchanged.
pub fn report(
    base: &AnalyticsBase,
    range: TimeRange,
    chart_data: Vec<ChartPointDto>,
) -> AnalyticsDto {
    let multiplier = range.multiplier();
    let scale = |value: f64| (value * multiplier).floor();
    let scale_count = |value: u64| scale(value as f64) as u64;

    AnalyticsDto {
        time_range: range,
        total_revenue: scale(base.total_revenue),
        total_earnings: scale(base.total_earnings),
        active_campaigns: scale_count(u64::from(base.active_campaigns)),
        completed_campaigns: scale_count(u64::from(base.completed_campaigns)),
        total_views: scale_count(base.total_views),
        total_engagement: scale_count(base.total_engagement),
        conversion_rate: base.conversion_rate,
        success_rate: base.success_rate,
        chart_data,
        top_products: base.top_products.clone(),
        top_influencers: base.top_influencers.clone(),
    }
}

/// One random point per day of `range`, oldest first and ending the day before `today`.
pub fn chart_data<R: Rng + ?Sized>(
    range: TimeRange,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<ChartPointDto> {
    let days = range.days();

    (0..days)
        .filter_map(|i| {
            let date = today.checked_sub_days(Days::new(u64::from(days - i)))?;

            Some(ChartPointDto {
                date,
                revenue: rng.random_range(500..1500),
                views: rng.random_range(1000..6000),
                conversions: rng.random_range(10..60),
            })
        })
        .collect()
}
