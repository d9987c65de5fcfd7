//! Course, tee and hole metadata as handed to the engine by the store.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Baseline slope; a playing handicap on a slope-113 tee equals the index.
pub const NEUTRAL_SLOPE: u16 = 113;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tee {
    pub name: String,
    pub slope: u16,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleInfo {
    pub number: u8,
    pub par: u8,
    /// Stroke index (1 = hardest hole).
    pub handicap: u8,
    #[serde(default)]
    pub distance: u32,
    /// Per-tee distances, only present on courses imported from a scorecard.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub distances: BTreeMap<String, u32>,
}

impl HoleInfo {
    pub fn new(number: u8, par: u8, handicap: u8, distance: u32) -> Self {
        Self {
            number,
            par,
            handicap,
            distance,
            distances: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub holes: u8,
    pub par: u16,
    #[serde(default)]
    pub tees: Vec<Tee>,
    #[serde(default)]
    pub holes_data: Vec<HoleInfo>,
}

impl Course {
    pub fn tee(&self, name: &str) -> Option<&Tee> {
        self.tees.iter().find(|t| t.name == name)
    }

    pub fn hole(&self, number: u8) -> Option<&HoleInfo> {
        self.holes_data.iter().find(|h| h.number == number)
    }
}

/// Which holes of the course a round covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseLength {
    #[serde(rename = "18")]
    Full,
    #[serde(rename = "front9")]
    Front9,
    #[serde(rename = "back9")]
    Back9,
}

impl CourseLength {
    pub fn hole_range(self) -> RangeInclusive<u8> {
        match self {
            CourseLength::Full => 1..=18,
            CourseLength::Front9 => 1..=9,
            CourseLength::Back9 => 10..=18,
        }
    }

    pub fn is_nine_holes(self) -> bool {
        matches!(self, CourseLength::Front9 | CourseLength::Back9)
    }

    /// Hole a fresh round starts on.
    pub fn starting_hole(self) -> u8 {
        *self.hole_range().start()
    }
}
