//! Helpers shared by the integration tests.

use axum::{body::to_bytes, response::Response, Router};
use influencehub::server::{model::app::AppState, router};
use influencehub_test_utils::TestSetup;
use serde::de::DeserializeOwned;

/// Fresh application state seeded from the test's fixtures.
pub fn app_state(test: &TestSetup) -> AppState {
    test.state()
}

/// The `/api` router bound to fresh state seeded from the test's fixtures.
pub fn app(test: &TestSetup) -> Router {
    router::routes().with_state(app_state(test))
}

/// Deserialize a response body as JSON.
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");

    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}
