//! Boundary to the vision-capable language model that reads scorecard images.

use async_trait::async_trait;

use crate::errors::domain::DomainError;

/// An image ready to send to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorecardImage {
    pub media_type: String,
    /// Standard base64 of the raw image bytes.
    pub data_base64: String,
}

/// Sends one image plus an instruction prompt and returns the model's text answer.
#[async_trait]
pub trait VisionClient: Send + Sync {
    async fn describe(&self, image: &ScorecardImage, prompt: &str) -> Result<String, DomainError>;
}
