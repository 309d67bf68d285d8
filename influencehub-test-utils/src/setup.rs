use entity::Fixtures;

use crate::error::TestError;

pub struct TestSetup {
    pub fixtures: Fixtures,
}

impl TestSetup {
    /// Setup holding the bundled seed data, as the application starts with.
    pub fn seeded() -> Result<Self, TestError> {
        Ok(Self {
            fixtures: Fixtures::seed()?,
        })
    }

    /// Convert the fixtures into any type that can be constructed from them.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// Every call builds fresh state, so writes through one state are not seen by another.
    ///
    /// # Example
    /// ```ignore
    /// let state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<Fixtures>,
    {
        T::from(self.fixtures.clone())
    }
}
