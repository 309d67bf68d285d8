//! Cron schedules of the background jobs.

pub mod cache_sweep {
    /// Cron expression for dropping expired response cache entries
    /// Runs every minute at second 0
    pub const CRON_EXPRESSION: &str = "0 * * * * *";
}

pub mod presence {
    /// Cron expression for refreshing simulated partner presence
    /// Runs every 30 seconds (:00 and :30)
    pub const CRON_EXPRESSION: &str = "*/30 * * * * *";
}
