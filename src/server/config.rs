use std::str::FromStr;

use crate::server::{error::config::ConfigError, service::smart_match::MatchWeights};

/// Size of the synthetic SmartMatch influencer pool unless overridden.
pub const DEFAULT_POOL_SIZE: usize = 500;

/// Settings read from the environment at startup.
pub struct Config {
    pub paypal_client_id: Option<String>,
    pub simulate_latency: bool,
    pub smart_match_seed: Option<u64>,
    pub smart_match_pool_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            paypal_client_id: optional_var("PAYPAL_CLIENT_ID"),
            simulate_latency: parse_var("SIMULATE_LATENCY")?.unwrap_or(true),
            smart_match_seed: parse_var("SMART_MATCH_SEED")?,
            smart_match_pool_size: parse_var("SMART_MATCH_POOL_SIZE")?
                .unwrap_or(DEFAULT_POOL_SIZE),
        })
    }
}

fn optional_var(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_var<T>(var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = optional_var(var) else {
        return Ok(None);
    };

    value
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Runtime settings carried by the application state.
///
/// The default is what tests run with: no artificial latency, no PayPal and a random pool.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub paypal_client_id: Option<String>,
    pub simulate_latency: bool,
    pub smart_match_seed: Option<u64>,
    pub smart_match_pool_size: usize,
    pub match_weights: MatchWeights,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paypal_client_id: None,
            simulate_latency: false,
            smart_match_seed: None,
            smart_match_pool_size: DEFAULT_POOL_SIZE,
            match_weights: MatchWeights::default(),
        }
    }
}

impl From<Config> for AppConfig {
    fn from(config: Config) -> Self {
        Self {
            paypal_client_id: config.paypal_client_id,
            simulate_latency: config.simulate_latency,
            smart_match_seed: config.smart_match_seed,
            smart_match_pool_size: config.smart_match_pool_size,
            match_weights: MatchWeights::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_set_variables_and_skips_blank_ones() {
        std::env::set_var("INFLUENCEHUB_TEST_POOL_SIZE", "120");
        std::env::set_var("INFLUENCEHUB_TEST_BLANK", "  ");

        let size: Option<usize> = parse_var("INFLUENCEHUB_TEST_POOL_SIZE").unwrap();
        let blank: Option<usize> = parse_var("INFLUENCEHUB_TEST_BLANK").unwrap();

        assert_eq!(size, Some(120));
        assert_eq!(blank, None);
    }

    #[test]
    fn rejects_unparseable_values() {
        std::env::set_var("INFLUENCEHUB_TEST_SEED", "not-a-number");

        let result: Result<Option<u64>, ConfigError> = parse_var("INFLUENCEHUB_TEST_SEED");

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == "INFLUENCEHUB_TEST_SEED"
        ));
    }

    #[test]
    fn invalid_value_error_names_variable_and_reason() {
        std::env::set_var("INFLUENCEHUB_TEST_LATENCY", "sometimes");

        let result: Result<Option<bool>, ConfigError> = parse_var("INFLUENCEHUB_TEST_LATENCY");
        let message = result.err().map(|e| e.to_string()).unwrap_or_default();

        assert!(message
            .starts_with("Invalid value for environment variable INFLUENCEHUB_TEST_LATENCY"));
        assert!(message.ends_with("provided string was not `true` or `false`"));
    }

    #[test]
    fn default_app_config_disables_latency() {
        let config = AppConfig::default();

        assert!(!config.simulate_latency);
        assert_eq!(config.smart_match_pool_size, 500);
        assert!(config.paypal_client_id.is_none());
    }
}
