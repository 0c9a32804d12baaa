//! Kept apart from the other config tests: this binary mutates the process
//! environment, so it holds a single test.

use catalogqa::constants::MODEL_API_KEY_ENV_NAME;
use catalogqa::{CatalogError, InferenceConfig};
use spectral::prelude::*;

#[test]
fn missing_api_key_fails_fast() {
    // SAFETY: no other thread in this test binary reads the environment.
    unsafe { std::env::remove_var(MODEL_API_KEY_ENV_NAME) };

    let result = InferenceConfig::from_env("google://gemini-1.5-pro");

    match result {
        Err(CatalogError::Config { message }) => {
            assert_that(&message.contains(MODEL_API_KEY_ENV_NAME)).is_true();
        }
        other => panic!("Expected config error, got {other:?}"),
    }
}
