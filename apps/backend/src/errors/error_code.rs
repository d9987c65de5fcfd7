//! Error codes for the Golf Shot backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in HTTP responses.

use core::fmt;

/// Centralized error codes for the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Player tee box does not exist on the course
    TeeNotFound,
    /// Round update carried no fields
    NoFieldsToUpdate,
    /// Uploaded image has an unsupported media type
    InvalidImageType,
    /// Uploaded image is not valid base64
    InvalidImageData,
    /// Uploaded image exceeds the size limit
    ImageTooLarge,
    /// Vision model answer could not be parsed
    ScorecardParse,

    // Resource Not Found
    /// Course not found
    CourseNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Vision model is not configured
    VisionNotConfigured,
    /// Vision model call failed
    VisionUpstream,
    /// Upstream timeout
    UpstreamTimeout,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::TeeNotFound => "TEE_NOT_FOUND",
            Self::NoFieldsToUpdate => "NO_FIELDS_TO_UPDATE",
            Self::InvalidImageType => "INVALID_IMAGE_TYPE",
            Self::InvalidImageData => "INVALID_IMAGE_DATA",
            Self::ImageTooLarge => "IMAGE_TOO_LARGE",
            Self::ScorecardParse => "SCORECARD_PARSE",

            Self::CourseNotFound => "COURSE_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::VisionNotConfigured => "VISION_NOT_CONFIGURED",
            Self::VisionUpstream => "VISION_UPSTREAM",
            Self::UpstreamTimeout => "UPSTREAM_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
