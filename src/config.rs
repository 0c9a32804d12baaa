//! Configuration for the inference service used by the `ask` pipeline.

use std::str::FromStr;

use llm::LLMProvider;
use llm::builder::{LLMBackend, LLMBuilder};
use log::debug;
use url::Url;

use crate::constants::MODEL_API_KEY_ENV_NAME;
use crate::error::{CatalogError, Result};

/// Settings needed to reach the text generation service.
#[derive(Clone, PartialEq, Eq)]
pub struct InferenceConfig {
    /// API credential for the provider. Required.
    pub api_key: String,
    /// Model URL in `backend://model` form, e.g. `google://gemini-1.5-pro`.
    pub model: String,
}

impl std::fmt::Debug for InferenceConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("InferenceConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

impl InferenceConfig {
    /// Creates a configuration, rejecting an empty API key up front.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if `api_key` is blank.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CatalogError::config(format!(
                "an API key is required, set {MODEL_API_KEY_ENV_NAME}"
            )));
        }

        Ok(Self {
            api_key,
            model: model.into(),
        })
    }

    /// Reads the API key from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the variable is unset, not unicode or blank.
    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var(MODEL_API_KEY_ENV_NAME)
            .map_err(|err| CatalogError::config(format!("{MODEL_API_KEY_ENV_NAME}: {err}")))?;
        Self::new(api_key, model)
    }

    /// Prepares an LLM builder from the model URL and API key.
    ///
    /// The URL scheme picks the backend; host and username form the model name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if the model URL is invalid, names an
    /// unknown backend or carries no model name.
    pub fn llm_builder(&self) -> Result<LLMBuilder> {
        let model_url = Url::parse(&self.model)
            .map_err(|e| CatalogError::config(format!("Invalid model URL: {e}")))?;
        let backend = LLMBackend::from_str(model_url.scheme())
            .map_err(|e| CatalogError::config(format!("Invalid LLM backend: {e}")))?;
        let host = model_url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| CatalogError::config("Specify model name as host URL."))?;

        let model_name = [host, model_url.username()]
            .iter()
            .filter(|x| !x.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(":");
        debug!("Using model {model_name} on {}", model_url.scheme());

        Ok(LLMBuilder::new()
            .backend(backend)
            .model(model_name)
            .api_key(self.api_key.clone()))
    }

    /// Builds the chat provider described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] for an invalid model URL and
    /// [`CatalogError::Inference`] if the provider cannot be constructed.
    pub fn build_provider(&self) -> Result<Box<dyn LLMProvider>> {
        self.llm_builder()?
            .build()
            .map_err(|e| CatalogError::Inference(format!("Failed to build LLM model: {e}")))
    }
}
