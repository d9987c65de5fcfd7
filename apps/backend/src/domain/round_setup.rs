//! Building a fresh round from a setup request and applying partial updates.

use std::collections::BTreeMap;

use serde::Deserialize;
use uuid::Uuid;

use crate::domain::course::{Course, CourseLength};
use crate::domain::handicap::playing_handicap;
use crate::domain::round::{
    GameMode, HandicapPercentage, Round, RoundPlayer, Team, TeamMode,
};
use crate::domain::virtual_handicap::virtual_handicap;
use crate::errors::domain::{DomainError, ValidationKind};

/// Index assumed for players who do not state one.
pub const DEFAULT_HANDICAP_INDEX: f64 = 24.0;

fn default_handicap_index() -> f64 {
    DEFAULT_HANDICAP_INDEX
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerCreate {
    pub name: String,
    #[serde(default = "default_handicap_index", alias = "od_handicap_index")]
    pub handicap_index: f64,
    pub tee_box: String,
    #[serde(default)]
    pub team: Option<Team>,
    /// Manually agreed playing handicap; wins over the computed one.
    #[serde(default)]
    pub playing_handicap: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoundCreate {
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
    #[serde(default)]
    pub sindicato_points: Option<Vec<i32>>,
    #[serde(default)]
    pub team_mode: Option<TeamMode>,
    #[serde(default)]
    pub best_ball_points: Option<i32>,
    #[serde(default)]
    pub worst_ball_points: Option<i32>,
    pub players: Vec<PlayerCreate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoundUpdate {
    #[serde(default)]
    pub current_hole: Option<u8>,
    #[serde(default)]
    pub completed_holes: Option<Vec<u8>>,
    #[serde(default)]
    pub players: Option<Vec<RoundPlayer>>,
    #[serde(default)]
    pub is_finished: Option<bool>,
}

impl RoundUpdate {
    pub fn is_empty(&self) -> bool {
        self.current_hole.is_none()
            && self.completed_holes.is_none()
            && self.players.is_none()
            && self.is_finished.is_none()
    }
}

/// Create a round on `course`, resolving every player's tee and playing
/// handicap. The first player is marked as the owner.
pub fn setup_round(course: &Course, request: RoundCreate) -> Result<Round, DomainError> {
    let mut players = Vec::with_capacity(request.players.len());
    for (position, player) in request.players.into_iter().enumerate() {
        let tee = course.tee(&player.tee_box).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::TeeNotFound,
                format!("Tee '{}' not found for course", player.tee_box),
            )
        })?;

        let handicap = if request.use_handicap {
            player.playing_handicap.unwrap_or_else(|| {
                playing_handicap(
                    player.handicap_index,
                    tee.slope,
                    request.handicap_percentage,
                )
            })
        } else {
            0
        };

        players.push(RoundPlayer {
            id: Some(Uuid::new_v4().to_string()),
            name: player.name,
            handicap_index: Some(player.handicap_index),
            tee_box: player.tee_box,
            team: player.team,
            playing_handicap: handicap,
            scores: BTreeMap::new(),
            is_owner: position == 0,
        });
    }

    Ok(Round {
        id: None,
        course_id: request.course_id.or_else(|| course.id.clone()),
        course_name: request.course_name.or_else(|| Some(course.name.clone())),
        round_date: request.round_date,
        course_length: request.course_length,
        game_mode: request.game_mode,
        use_handicap: request.use_handicap,
        handicap_percentage: request.handicap_percentage,
        sindicato_points: request.sindicato_points,
        team_mode: request.team_mode,
        best_ball_points: request.best_ball_points,
        worst_ball_points: request.worst_ball_points,
        current_hole: request.course_length.starting_hole(),
        completed_holes: Vec::new(),
        players,
        is_finished: false,
        is_imported: false,
        virtual_handicap: None,
    })
}

/// Apply a partial update. A new player list refreshes the round's Virtual
/// Handicap when the course is known.
pub fn apply_round_update(
    mut round: Round,
    update: RoundUpdate,
    course: Option<&Course>,
) -> Result<Round, DomainError> {
    if update.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::NoFieldsToUpdate,
            "No fields to update",
        ));
    }

    if let Some(hole) = update.current_hole {
        round.current_hole = hole;
    }
    if let Some(holes) = update.completed_holes {
        round.completed_holes = holes;
    }
    if let Some(is_finished) = update.is_finished {
        round.is_finished = is_finished;
    }
    if let Some(mut players) = update.players {
        carry_owner_marker(&round.players, &mut players);
        round.players = players;
        if let Some(course) = course {
            round.virtual_handicap = virtual_handicap(&round, course);
        }
    }

    Ok(round)
}

/// Clients that send players back without the owner flag keep the owner they
/// had, matched by id.
fn carry_owner_marker(previous: &[RoundPlayer], incoming: &mut [RoundPlayer]) {
    if incoming.iter().any(|p| p.is_owner) {
        return;
    }
    let Some(owner_id) = previous
        .iter()
        .find(|p| p.is_owner)
        .and_then(|p| p.id.as_deref())
    else {
        return;
    };
    if let Some(player) = incoming
        .iter_mut()
        .find(|p| p.id.as_deref() == Some(owner_id))
    {
        player.is_owner = true;
    }
}
