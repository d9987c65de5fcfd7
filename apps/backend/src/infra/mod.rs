//! Infrastructure layer - outbound integrations.

pub mod vision;
pub mod vision_http;

pub use vision::{ScorecardImage, VisionClient};
pub use vision_http::HttpVisionClient;
