use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    FixtureError(#[from] serde_json::Error),
    #[error("Invalid test fixture: {0}")]
    InvalidFixture(String),
}
