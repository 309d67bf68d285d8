use entity::prelude::Settings;

use crate::server::data::MemoryDb;

pub struct SettingsRepository<'a> {
    db: &'a MemoryDb,
}

impl<'a> SettingsRepository<'a> {
    /// Creates a new instance of [`SettingsRepository`]
    pub fn new(db: &'a MemoryDb) -> Self {
        Self { db }
    }

    pub async fn get(&self) -> Settings {
        self.db.settings.read().await.clone()
    }

    /// Apply `change` to the stored settings and return the updated copy
    ///
    /// `change` may refuse the update by returning an error, in which case nothing is stored.
    pub async fn update<F, E>(&self, change: F) -> Result<Settings, E>
    where
        F: FnOnce(&mut Settings) -> Result<(), E>,
    {
        let mut settings = self.db.settings.write().await;
        let mut updated = settings.clone();
        change(&mut updated)?;
        *settings = updated;

        Ok(settings.clone())
    }

    /// Replace the password if `current` matches the stored one, returning whether it did
    pub async fn replace_password(&self, current: &str, new_password: String) -> bool {
        let mut password = self.db.password.write().await;
        if *password != current {
            return false;
        }
        *password = new_password;

        true
    }
}
