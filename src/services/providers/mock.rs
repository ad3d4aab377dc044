//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;

/// Mock text provider for testing. Returns a canned raw response, or fails
/// every call when built with [`MockTextProvider::disabled`].
pub struct MockTextProvider {
    response: Option<String>,
}

impl MockTextProvider {
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
        }
    }

    pub fn disabled() -> Self {
        Self { response: None }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.response.is_some() {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ))
        }
    }
}
