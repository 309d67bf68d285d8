//! Application state construction and background job startup.

use dioxus_logger::tracing;
use entity::prelude::Fixtures;

use crate::server::{
    config::{AppConfig, Config},
    error::Error,
    model::app::AppState,
    scheduler::Scheduler,
};

/// Parse the embedded seed data and build the application state from it
///
/// Generates the SmartMatch influencer pool, seeded when `SMART_MATCH_SEED` is set.
pub fn build_state(config: Config) -> Result<AppState, Error> {
    let fixtures = Fixtures::seed()?;
    let config = AppConfig::from(config);

    tracing::info!(
        "Loaded {} campaigns, {} products and {} affiliates from seed data",
        fixtures.campaigns.len(),
        fixtures.products.len(),
        fixtures.affiliates.len()
    );

    let state = AppState::new(fixtures, config);

    tracing::info!(
        "Generated SmartMatch pool of {} influencers",
        state.influencers.len()
    );

    Ok(state)
}

/// Register the maintenance jobs and start the cron scheduler
pub async fn start_scheduler(state: &AppState) -> Result<(), Error> {
    let scheduler = Scheduler::new(state.clone()).await?;
    scheduler.start().await?;

    Ok(())
}
