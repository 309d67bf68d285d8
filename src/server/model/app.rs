use std::sync::Arc;

use entity::Fixtures;

use crate::{
    model::product::InfluencerProfile,
    server::{
        config::AppConfig,
        data::MemoryDb,
        service::{cache::ServiceCache, smart_match},
    },
};

/// Everything a request or a scheduled job needs, cheap to clone.
///
/// Each `AppState` owns its own tables, caches and SmartMatch pool, so two states never
/// observe each other's writes.
#[derive(Clone)]
pub struct AppState {
    pub db: MemoryDb,
    pub cache: Arc<ServiceCache>,
    pub config: Arc<AppConfig>,
    pub influencers: Arc<Vec<InfluencerProfile>>,
}

impl AppState {
    /// Seed the tables from `fixtures` and generate the SmartMatch pool described by `config`.
    pub fn new(fixtures: Fixtures, config: AppConfig) -> Self {
        let influencers =
            smart_match::generate_pool(config.smart_match_pool_size, config.smart_match_seed);

        Self {
            db: MemoryDb::from(fixtures),
            cache: Arc::new(ServiceCache::default()),
            config: Arc::new(config),
            influencers: Arc::new(influencers),
        }
    }
}

impl From<Fixtures> for AppState {
    fn from(fixtures: Fixtures) -> Self {
        Self::new(fixtures, AppConfig::default())
    }
}
