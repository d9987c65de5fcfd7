//! `VisionClient` over a messages-style HTTP API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::VisionSettings;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::vision::{ScorecardImage, VisionClient};

const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4096;

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: [ContentBlock<'a>; 2],
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ContentBlock<'a> {
    Image { source: ImageSource<'a> },
    Text { text: &'a str },
}

#[derive(Serialize)]
struct ImageSource<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    media_type: &'a str,
    data: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ResponseBlock>,
}

#[derive(Deserialize)]
struct ResponseBlock {
    #[serde(default)]
    text: Option<String>,
}

pub struct HttpVisionClient {
    http: reqwest::Client,
    settings: VisionSettings,
}

impl HttpVisionClient {
    pub fn new(settings: VisionSettings) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| {
                DomainError::infra(
                    InfraErrorKind::Other("http_client".into()),
                    format!("Failed to build HTTP client: {e}"),
                )
            })?;
        Ok(Self { http, settings })
    }
}

fn upstream(detail: String) -> DomainError {
    DomainError::infra(InfraErrorKind::VisionUpstream, detail)
}

#[async_trait]
impl VisionClient for HttpVisionClient {
    async fn describe(&self, image: &ScorecardImage, prompt: &str) -> Result<String, DomainError> {
        let body = MessagesRequest {
            model: &self.settings.model,
            max_tokens: MAX_TOKENS,
            messages: [Message {
                role: "user",
                content: [
                    ContentBlock::Image {
                        source: ImageSource {
                            kind: "base64",
                            media_type: &image.media_type,
                            data: &image.data_base64,
                        },
                    },
                    ContentBlock::Text { text: prompt },
                ],
            }],
        };

        debug!(
            model = %self.settings.model,
            media_type = %image.media_type,
            image_b64_len = image.data_base64.len(),
            "Sending scorecard image to vision model"
        );

        let response = self
            .http
            .post(&self.settings.api_url)
            .header("x-api-key", &self.settings.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::infra(InfraErrorKind::Timeout, "Vision model timed out")
                } else {
                    upstream(format!("Vision model request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Vision model answered with an error status");
            return Err(upstream(format!(
                "Vision model answered with status {}",
                status.as_u16()
            )));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| upstream(format!("Unreadable vision model response: {e}")))?;

        parsed
            .content
            .into_iter()
            .find_map(|block| block.text)
            .ok_or_else(|| upstream("Vision model response carried no text".to_string()))
    }
}
