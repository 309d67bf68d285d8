//! Job bodies run by the [`Scheduler`](super::Scheduler).
//!
//! Each job takes its own clone of the application state and reports how many records it
//! touched.

use chrono::Utc;

use crate::server::{error::Error, model::app::AppState, service::message::MessageService};

/// Drop expired entries from every response cache.
pub async fn sweep_caches(state: AppState) -> Result<usize, Error> {
    Ok(state.cache.sweep(Utc::now()).await)
}

/// Re-roll the online status of every conversation partner, returning how many are online.
pub async fn refresh_presence(state: AppState) -> Result<usize, Error> {
    Ok(MessageService::new(&state).refresh_presence().await)
}
