//! Test utilities for building AppState and reading response bodies

use axum::{body::to_bytes, response::Response};
use recipebox::server::{model::app::AppState, service::short_code::ShortCodeStrategy};
use recipebox_test_utils::TestSetup;

/// Extension trait for TestSetup to create AppState
pub trait TestSetupExt {
    /// AppState using the default random short code strategy
    fn into_app_state(&self) -> AppState;

    fn into_app_state_with(&self, strategy: ShortCodeStrategy, secure_proxy_ssl: bool)
        -> AppState;
}

impl TestSetupExt for TestSetup {
    fn into_app_state(&self) -> AppState {
        self.into_app_state_with(ShortCodeStrategy::Random, false)
    }

    fn into_app_state_with(
        &self,
        strategy: ShortCodeStrategy,
        secure_proxy_ssl: bool,
    ) -> AppState {
        AppState::new(self.state.db.clone(), strategy, secure_proxy_ssl)
    }
}

/// Reads a response body into a string
pub async fn body_string(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}
