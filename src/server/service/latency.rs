//! Artificial response delays.
//!
//! The marketplace behaves like a remote API even though every table lives in memory, so each
//! service call sleeps for a short, fixed time before touching any table. Delays are skipped
//! entirely when `SIMULATE_LATENCY` is off, which is also the default for tests.

use std::time::Duration;

use crate::server::config::AppConfig;

/// Delay classes used by the services.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Latency {
    /// Cheap reads such as unread message pages
    Instant,
    /// Paginated list reads
    List,
    /// Single record lookups
    Lookup,
    /// Reads that aggregate several tables
    Query,
    /// Scoring and report generation
    Compute,
    /// Writes
    Write,
    /// Payouts and uploads
    Heavy,
}

impl Latency {
    pub fn duration(&self) -> Duration {
        let millis = match self {
            Latency::Instant => 100,
            Latency::List => 150,
            Latency::Lookup => 200,
            Latency::Query => 300,
            Latency::Compute => 400,
            Latency::Write => 500,
            Latency::Heavy => 600,
        };

        Duration::from_millis(millis)
    }

    /// Sleep for this delay class unless latency simulation is disabled.
    pub async fn simulate(self, config: &AppConfig) {
        if config.simulate_latency {
            tokio::time::sleep(self.duration()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect the delay to be skipped when simulation is disabled
    #[tokio::test(start_paused = true)]
    async fn skips_sleep_when_disabled() {
        let config = AppConfig::default();
        let started = tokio::time::Instant::now();

        Latency::Heavy.simulate(&config).await;

        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    /// Expect the configured delay to elapse when simulation is enabled
    #[tokio::test(start_paused = true)]
    async fn sleeps_when_enabled() {
        let config = AppConfig {
            simulate_latency: true,
            ..Default::default()
        };
        let started = tokio::time::Instant::now();

        Latency::Write.simulate(&config).await;

        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
