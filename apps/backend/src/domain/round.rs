//! Round and player records as stored by the backing store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::course::CourseLength;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub strokes: i32,
    #[serde(default)]
    pub putts: i32,
}

impl Score {
    pub fn new(strokes: i32, putts: i32) -> Self {
        Self { strokes, putts }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Stableford,
    Stroke,
    Sindicato,
    Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamMode {
    #[serde(rename = "bestBall")]
    BestBall,
    #[serde(rename = "goodBadBall")]
    GoodBadBall,
}

/// Share of the course handicap a round allows (100% or 75%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HandicapPercentage {
    #[default]
    Full,
    ThreeQuarters,
}

impl HandicapPercentage {
    pub fn value(self) -> u8 {
        match self {
            HandicapPercentage::Full => 100,
            HandicapPercentage::ThreeQuarters => 75,
        }
    }
}

impl TryFrom<u8> for HandicapPercentage {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            100 => Ok(HandicapPercentage::Full),
            75 => Ok(HandicapPercentage::ThreeQuarters),
            other => Err(format!("handicap_percentage must be 100 or 75, got {other}")),
        }
    }
}

impl From<HandicapPercentage> for u8 {
    fn from(value: HandicapPercentage) -> Self {
        value.value()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundPlayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, alias = "od_handicap_index")]
    pub handicap_index: Option<f64>,
    pub tee_box: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    #[serde(default)]
    pub playing_handicap: i32,
    /// Keyed by hole number; a missing hole has not been played.
    #[serde(default)]
    pub scores: BTreeMap<u8, Score>,
    /// Marks the account holder whose statistics this round feeds.
    #[serde(default)]
    pub is_owner: bool,
}

impl RoundPlayer {
    pub fn score(&self, hole: u8) -> Option<&Score> {
        self.scores.get(&hole)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub course_name: Option<String>,
    pub round_date: String,
    pub course_length: CourseLength,
    pub game_mode: GameMode,
    #[serde(default = "default_true")]
    pub use_handicap: bool,
    #[serde(default)]
    pub handicap_percentage: HandicapPercentage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sindicato_points: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_mode: Option<TeamMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_ball_points: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worst_ball_points: Option<i32>,
    #[serde(default = "default_first_hole")]
    pub current_hole: u8,
    #[serde(default)]
    pub completed_holes: Vec<u8>,
    #[serde(default)]
    pub players: Vec<RoundPlayer>,
    #[serde(default)]
    pub is_finished: bool,
    #[serde(default)]
    pub is_imported: bool,
    #[serde(default)]
    pub virtual_handicap: Option<f64>,
}

fn default_true() -> bool {
    true
}

fn default_first_hole() -> u8 {
    1
}

impl Round {
    /// The player whose personal statistics this round contributes to.
    ///
    /// Rounds written before the owner marker existed carry no flag; for those
    /// the first listed player is the owner.
    pub fn owner(&self) -> Option<&RoundPlayer> {
        self.players
            .iter()
            .find(|p| p.is_owner)
            .or_else(|| self.players.first())
    }
}
