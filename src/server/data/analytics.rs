use entity::prelude::AnalyticsBase;

use crate::server::data::MemoryDb;

pub struct AnalyticsRepository<'a> {
    db: &'a MemoryDb,
}

impl<'a> AnalyticsRepository<'a> {
    /// Creates a new instance of [`AnalyticsRepository`]
    pub fn new(db: &'a MemoryDb) -> Self {
        Self { db }
    }

    /// Thirty day baseline totals
    pub fn get_base(&self) -> AnalyticsBase {
        self.db.analytics.clone()
    }
}
