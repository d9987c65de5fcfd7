//! Scorecard image import: validate the upload, ask the vision model to read
//! it, and repair the answer into engine types.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::course::Course;
use crate::domain::scorecard::{normalize_course, normalize_round, parse_model_answer, ExtractedRound};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::infra::vision::{ScorecardImage, VisionClient};

pub const ALLOWED_MEDIA_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Decoded image size limit.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

const COURSE_PROMPT: &str = r#"Analyze this golf scorecard image and extract ALL data in JSON format.

Look carefully for:
1. Course name, usually at the top.
2. Every tee row. Each row of distances is a different tee, often marked by colour
   (Negras, Blancas, Amarillas, Azules, Rojas). Each tee has a slope and a rating,
   often shown as "Slope: XXX" and "Valor: XX.X" or "Rating: XX.X".
3. For each hole (1-18 or 1-9): number, par (3, 4 or 5), stroke index (HCP or S.I.,
   1-18) and the distance in meters for every tee.

Return ONLY valid JSON in this exact format:
{
  "name": "Course Name",
  "holes": 18,
  "holes_data": [
    {"number": 1, "par": 4, "handicap": 7, "distances": {"Amarillas": 350, "Blancas": 380}},
    {"number": 2, "par": 3, "handicap": 15, "distances": {"Amarillas": 150, "Blancas": 165}}
  ],
  "tees": [
    {"name": "Amarillas", "slope": 128, "rating": 71.5},
    {"name": "Blancas", "slope": 135, "rating": 73.2}
  ],
  "total_par": 72
}

Rules:
- Extract every tee colour you can identify.
- If slope or rating is not visible for a tee, estimate it from the distances.
- If front 9 and back 9 are shown separately, combine them.
- Return ONLY the JSON, no extra text or markdown code blocks."#;

const ROUND_PROMPT: &str = r#"Analyze this golf scorecard/round image and extract ALL data in JSON format.

This is a historical round from a golf app. Extract:
1. Course: name, location if visible, tee played with slope and rating if visible.
2. Round: date (YYYY-MM-DD), player name, handicap index if visible.
3. For each hole (1-18 or 1-9): number, par, stroke index if visible, strokes taken
   and distance in meters.

Return ONLY valid JSON in this exact format:
{
  "course": {
    "name": "Course Name",
    "location": "City, Country",
    "tee_played": {"name": "Yellow", "slope": 125, "rating": 69.7}
  },
  "round": {"date": "2025-11-23", "player_name": "Player Name", "handicap_index": 14.2},
  "holes_data": [
    {"number": 1, "par": 5, "handicap": 8, "strokes": 6, "distance": 492},
    {"number": 2, "par": 3, "handicap": 18, "strokes": 2, "distance": 126}
  ],
  "totals": {"strokes": 86, "par": 71, "stableford_points": 35}
}

Rules:
- Extract the ACTUAL strokes taken on each hole; coloured cells (green birdie,
  blue/grey par, red bogey or worse) help validate them.
- Par values are 3, 4 or 5 only. Stroke indexes are 1-18 for 18 holes.
- Convert any other date format to YYYY-MM-DD.
- Return ONLY the JSON, no extra text or markdown code blocks."#;

/// Upload body shared by both import endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ScorecardUpload {
    pub image_base64: String,
    pub media_type: String,
}

pub struct ScorecardImportService {
    client: Option<Arc<dyn VisionClient>>,
}

impl ScorecardImportService {
    pub fn new(client: Option<Arc<dyn VisionClient>>) -> Self {
        Self { client }
    }

    /// Read a course definition off a scorecard image.
    pub async fn import_course(&self, upload: &ScorecardUpload) -> Result<Course, DomainError> {
        let answer = self.ask(upload, COURSE_PROMPT).await?;
        let course = normalize_course(&parse_model_answer(&answer)?);
        info!(
            course = %course.name,
            holes = course.holes,
            tees = course.tees.len(),
            "Course extracted from scorecard"
        );
        Ok(course)
    }

    /// Read a played round off a scorecard image.
    pub async fn import_round(&self, upload: &ScorecardUpload) -> Result<ExtractedRound, DomainError> {
        let answer = self.ask(upload, ROUND_PROMPT).await?;
        let round = normalize_round(&parse_model_answer(&answer)?);
        info!(
            course = %round.course.name,
            holes = round.holes,
            strokes = round.totals.strokes,
            "Round extracted from scorecard"
        );
        Ok(round)
    }

    async fn ask(&self, upload: &ScorecardUpload, prompt: &str) -> Result<String, DomainError> {
        let client = self.client.as_ref().ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::VisionNotConfigured,
                "AI service not configured. Set VISION_API_KEY to enable scorecard import",
            )
        })?;
        let image = validate_upload(upload)?;
        let answer = client.describe(&image, prompt).await?;
        debug!(answer_len = answer.len(), "Vision model answered");
        Ok(answer)
    }
}

/// Check media type, base64 and size of an upload.
pub fn validate_upload(upload: &ScorecardUpload) -> Result<ScorecardImage, DomainError> {
    let media_type = upload.media_type.trim().to_ascii_lowercase();
    if !ALLOWED_MEDIA_TYPES.contains(&media_type.as_str()) {
        return Err(DomainError::validation(
            ValidationKind::InvalidImageType,
            format!("Invalid file type. Allowed: {}", ALLOWED_MEDIA_TYPES.join(", ")),
        ));
    }

    // tolerate data URLs as produced by FileReader.readAsDataURL
    let raw = upload.image_base64.trim();
    let payload = match raw.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or(rest, |(_, data)| data),
        None => raw,
    };

    let bytes = STANDARD.decode(payload).map_err(|e| {
        warn!(error = %e, "Rejected scorecard upload with invalid base64");
        DomainError::validation(
            ValidationKind::InvalidImageData,
            "Image data is not valid base64",
        )
    })?;
    if bytes.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidImageData,
            "Image data is empty",
        ));
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(DomainError::validation(
            ValidationKind::ImageTooLarge,
            "File too large. Maximum size is 10MB",
        ));
    }

    Ok(ScorecardImage {
        media_type,
        data_base64: STANDARD.encode(&bytes),
    })
}
