//! Normalisation of scorecard data read off an image by the vision model.
//!
//! The model answer is loosely structured JSON. Everything here repairs it
//! into engine types: out-of-range values fall back to defaults instead of
//! failing, so a partly legible card still imports.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::course::{Course, HoleInfo, Tee, NEUTRAL_SLOPE};
use crate::domain::round_setup::DEFAULT_HANDICAP_INDEX;
use crate::errors::domain::{DomainError, ValidationKind};

pub const DEFAULT_COURSE_NAME: &str = "Campo Importado";
pub const DEFAULT_TEE_NAME: &str = "Standard";
pub const DEFAULT_PLAYER_NAME: &str = "Jugador";
pub const DEFAULT_RATING: f64 = 72.0;

const SLOPE_RANGE: std::ops::RangeInclusive<f64> = 55.0..=155.0;
const RATING_RANGE: std::ops::RangeInclusive<f64> = 50.0..=90.0;
const INDEX_RANGE: std::ops::RangeInclusive<f64> = 0.0..=54.0;
const STROKES_RANGE: std::ops::RangeInclusive<f64> = 1.0..=20.0;

/// Course section of an imported round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedCourse {
    pub name: String,
    pub location: String,
    pub tee_played: Tee,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedPlayer {
    pub date: String,
    pub player_name: String,
    pub handicap_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedHole {
    pub number: u8,
    pub par: u8,
    pub handicap: u8,
    pub strokes: i32,
    pub distance: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedTotals {
    pub strokes: i32,
    pub par: i32,
    /// As reported by the model; not recomputed.
    pub stableford_points: i64,
}

/// A historical round read from a scorecard image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedRound {
    pub course: ExtractedCourse,
    pub round: ExtractedPlayer,
    pub holes: u8,
    pub holes_data: Vec<ExtractedHole>,
    pub totals: ExtractedTotals,
}

/// Strip Markdown code fences the model sometimes wraps its answer in.
pub fn extract_json_payload(text: &str) -> &str {
    let inner = if let Some((_, rest)) = text.split_once("```json") {
        rest.split("```").next().unwrap_or(rest)
    } else {
        let mut parts = text.split("```");
        match (parts.next(), parts.next()) {
            (Some(_), Some(fenced)) => fenced,
            _ => text,
        }
    };
    inner.trim()
}

/// Parse a model answer into a JSON object.
pub fn parse_model_answer(text: &str) -> Result<Value, DomainError> {
    let value: Value = serde_json::from_str(extract_json_payload(text)).map_err(|e| {
        DomainError::validation(
            ValidationKind::ScorecardParse,
            format!("Failed to parse AI response as JSON: {e}"),
        )
    })?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(DomainError::validation(
            ValidationKind::ScorecardParse,
            "AI response is not a JSON object",
        ))
    }
}

fn number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

fn object(value: Option<&Value>) -> Option<&Map<String, Value>> {
    value.and_then(Value::as_object)
}

fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// 9 or 18; anything else snaps to the nearer of the two.
fn coerce_hole_count(count: f64) -> u8 {
    if count == 9.0 || count == 18.0 {
        count as u8
    } else if count > 9.0 {
        18
    } else {
        9
    }
}

fn coerce_par(value: Option<&Value>) -> u8 {
    match number(value) {
        Some(p) if p == 3.0 || p == 4.0 || p == 5.0 => p as u8,
        _ => 4,
    }
}

fn coerce_stroke_index(value: Option<&Value>, position: u8, holes: u8) -> u8 {
    match number(value) {
        Some(si) if si >= 1.0 && si <= f64::from(holes) => si as u8,
        _ => position,
    }
}

fn distance_for_par(par: u8) -> u32 {
    match par {
        3 => 180,
        5 => 480,
        _ => 350,
    }
}

fn coerce_slope(value: Option<&Value>) -> u16 {
    match number(value) {
        Some(s) if SLOPE_RANGE.contains(&s) => s as u16,
        _ => NEUTRAL_SLOPE,
    }
}

fn coerce_rating(value: Option<&Value>) -> f64 {
    match number(value) {
        Some(r) if RATING_RANGE.contains(&r) => r,
        _ => DEFAULT_RATING,
    }
}

fn normalize_tee(raw: &Map<String, Value>) -> Tee {
    let name = text(raw.get("name"))
        .or_else(|| text(raw.get("color")))
        .unwrap_or_else(|| DEFAULT_TEE_NAME.to_string());
    Tee {
        name,
        slope: coerce_slope(raw.get("slope")),
        rating: coerce_rating(raw.get("rating")),
    }
}

fn default_tee() -> Tee {
    Tee {
        name: DEFAULT_TEE_NAME.to_string(),
        slope: NEUTRAL_SLOPE,
        rating: DEFAULT_RATING,
    }
}

fn holes_array(data: &Value) -> &[Value] {
    data.get("holes_data")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Repair a course answer into a `Course`.
///
/// Holes are renumbered by position. Per-tee distances are kept when
/// positive; the hole's single distance comes from the first listed tee that
/// has one, falling back to a par-based default.
pub fn normalize_course(data: &Value) -> Course {
    let name = text(data.get("name")).unwrap_or_else(|| DEFAULT_COURSE_NAME.to_string());
    let raw_holes = holes_array(data);

    let reported = if raw_holes.is_empty() {
        number(data.get("holes")).unwrap_or(18.0)
    } else {
        raw_holes.len() as f64
    };
    let hole_count = coerce_hole_count(reported);

    let mut tees: Vec<Tee> = data
        .get("tees")
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(Value::as_object).map(normalize_tee).collect())
        .unwrap_or_default();
    if tees.is_empty() {
        tees.push(default_tee());
    }

    let mut holes_data: Vec<HoleInfo> = raw_holes
        .iter()
        .take(usize::from(hole_count))
        .zip(1u8..)
        .map(|(raw, position)| {
            let par = coerce_par(raw.get("par"));
            let handicap = coerce_stroke_index(raw.get("handicap"), position, hole_count);
            let distances: BTreeMap<String, u32> = object(raw.get("distances"))
                .map(|map| {
                    map.iter()
                        .filter_map(|(tee, d)| {
                            d.as_f64().filter(|d| *d > 0.0).map(|d| (tee.clone(), d as u32))
                        })
                        .collect()
                })
                .unwrap_or_default();
            let distance = tees
                .iter()
                .find_map(|t| distances.get(&t.name).copied())
                .or_else(|| distances.values().next().copied())
                .unwrap_or_else(|| distance_for_par(par));
            HoleInfo {
                number: position,
                par,
                handicap,
                distance,
                distances,
            }
        })
        .collect();

    while holes_data.len() < usize::from(hole_count) {
        let number = holes_data.len() as u8 + 1;
        holes_data.push(HoleInfo::new(number, 4, number, 350));
    }

    let total_par: u16 = holes_data.iter().map(|h| u16::from(h.par)).sum();
    let par = if total_par > 0 {
        total_par
    } else if hole_count == 18 {
        72
    } else {
        36
    };

    Course {
        id: None,
        name,
        holes: hole_count,
        par,
        tees,
        holes_data,
    }
}

/// Repair a historical round answer into an `ExtractedRound`.
///
/// Stroke counts outside 1..=20 fall back to par. Totals for strokes and par
/// are recomputed from the repaired holes; the Stableford total is taken as
/// reported, rounded to a whole number.
pub fn normalize_round(data: &Value) -> ExtractedRound {
    let empty = Map::new();
    let course = object(data.get("course")).unwrap_or(&empty);
    let tee_played = object(course.get("tee_played")).unwrap_or(&empty);
    let round = object(data.get("round")).unwrap_or(&empty);

    let handicap_index = match number(round.get("handicap_index")) {
        Some(index) if INDEX_RANGE.contains(&index) => index,
        _ => DEFAULT_HANDICAP_INDEX,
    };

    let raw_holes = holes_array(data);
    let hole_count = coerce_hole_count(raw_holes.len() as f64);

    let mut holes_data: Vec<ExtractedHole> = raw_holes
        .iter()
        .take(usize::from(hole_count))
        .zip(1u8..)
        .map(|(raw, position)| {
            let par = coerce_par(raw.get("par"));
            let strokes = match number(raw.get("strokes")) {
                Some(s) if STROKES_RANGE.contains(&s) => s as i32,
                _ => i32::from(par),
            };
            let distance = match number(raw.get("distance")) {
                Some(d) if d >= 0.0 => d as u32,
                _ => distance_for_par(par),
            };
            ExtractedHole {
                number: position,
                par,
                handicap: coerce_stroke_index(raw.get("handicap"), position, hole_count),
                strokes,
                distance,
            }
        })
        .collect();

    while holes_data.len() < usize::from(hole_count) {
        let number = holes_data.len() as u8 + 1;
        holes_data.push(ExtractedHole {
            number,
            par: 4,
            handicap: number,
            strokes: 4,
            distance: 350,
        });
    }

    let totals = ExtractedTotals {
        strokes: holes_data.iter().map(|h| h.strokes).sum(),
        par: holes_data.iter().map(|h| i32::from(h.par)).sum(),
        stableford_points: object(data.get("totals"))
            .and_then(|t| t.get("stableford_points"))
            .and_then(Value::as_f64)
            .map(|points| points.round() as i64)
            .unwrap_or(0),
    };

    ExtractedRound {
        course: ExtractedCourse {
            name: text(course.get("name")).unwrap_or_else(|| DEFAULT_COURSE_NAME.to_string()),
            location: text(course.get("location")).unwrap_or_default(),
            tee_played: Tee {
                name: text(tee_played.get("name")).unwrap_or_else(|| DEFAULT_TEE_NAME.to_string()),
                slope: coerce_slope(tee_played.get("slope")),
                rating: coerce_rating(tee_played.get("rating")),
            },
        },
        round: ExtractedPlayer {
            date: text(round.get("date")).unwrap_or_default(),
            player_name: text(round.get("player_name"))
                .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string()),
            handicap_index,
        },
        holes: hole_count,
        holes_data,
        totals,
    }
}
