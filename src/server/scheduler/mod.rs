//! Scheduler for periodic in-memory maintenance tasks.
//!
//! This module provides a cron-based job scheduler that keeps the application state tidy while
//! the server runs. Expired response cache entries are swept every minute and the simulated
//! presence of conversation partners is refreshed every 30 seconds. The scheduler owns its jobs,
//! nothing runs before [`Scheduler::start`] is called.

use std::sync::Arc;

use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::Error, model::app::AppState};

pub mod config;
pub mod jobs;

#[cfg(test)]
mod tests;

use self::config::{cache_sweep as cache_sweep_config, presence as presence_config};

/// Job scheduler for managing background maintenance tasks.
pub struct Scheduler {
    state: AppState,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(state: AppState) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { state, sched })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    ///
    /// The following jobs are registered:
    /// - Response cache sweep
    /// - Conversation partner presence refresh
    ///
    /// # Returns
    /// - `Ok(())` - All jobs successfully registered and scheduler started
    /// - `Err(Error)` - Failed to register a job or start the scheduler
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            cache_sweep_config::CRON_EXPRESSION,
            "expired cache entries swept",
            jobs::sweep_caches,
        )
        .await?;

        self.schedule_job(
            presence_config::CRON_EXPRESSION,
            "conversation partners online",
            jobs::refresh_presence,
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The function receives a clone of the application state on every run. Its count is logged
    /// at debug level after `name`; failures are logged as errors and do not stop the schedule.
    ///
    /// # Arguments
    /// - `cron` - Cron expression with seconds (e.g., "0 * * * * *" for every minute)
    /// - `name` - What the returned count measures (used in log messages)
    /// - `function` - Async job body returning a count
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Failed to create or add the job, e.g. an invalid cron expression
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(AppState) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let state = self.state.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let state = state.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(state).await {
                        Ok(count) => tracing::debug!("{} {}", count, name),
                        Err(e) => tracing::error!("Error running job ({}): {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
