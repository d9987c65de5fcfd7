//! Round services: setup, updates and scoring on fully materialised data.

use tracing::{debug, info};

use crate::domain::course::Course;
use crate::domain::round::{Round, RoundPlayer};
use crate::domain::round_setup::{apply_round_update, setup_round, RoundCreate, RoundUpdate};
use crate::domain::stableford::StablefordResult;
use crate::domain::virtual_handicap::{player_stableford, virtual_handicap};
use crate::errors::domain::{DomainError, NotFoundKind};

pub struct RoundService;

impl RoundService {
    pub fn new() -> Self {
        Self
    }

    pub fn create(&self, course: &Course, request: RoundCreate) -> Result<Round, DomainError> {
        let round = setup_round(course, request)?;
        info!(
            course = %course.name,
            players = round.players.len(),
            course_length = ?round.course_length,
            game_mode = ?round.game_mode,
            "Round set up"
        );
        Ok(round)
    }

    pub fn update(
        &self,
        round: Round,
        update: RoundUpdate,
        course: Option<&Course>,
    ) -> Result<Round, DomainError> {
        let round = apply_round_update(round, update, course)?;
        debug!(
            current_hole = round.current_hole,
            is_finished = round.is_finished,
            virtual_handicap = ?round.virtual_handicap,
            "Round updated"
        );
        Ok(round)
    }

    /// Stableford for the player matching `player` by id or name, or for the
    /// round owner when no player is named.
    pub fn stableford(
        &self,
        round: &Round,
        course: &Course,
        player: Option<&str>,
    ) -> Result<StablefordResult, DomainError> {
        let selected = select_player(round, player)?;
        let result = player_stableford(selected, round, course);
        debug!(
            player = %selected.name,
            total_points = result.total_points,
            holes_played = result.holes_played,
            "Stableford computed"
        );
        Ok(result)
    }

    pub fn virtual_handicap(&self, round: &Round, course: &Course) -> Option<f64> {
        let value = virtual_handicap(round, course);
        debug!(virtual_handicap = ?value, "Virtual handicap computed");
        value
    }
}

impl Default for RoundService {
    fn default() -> Self {
        Self::new()
    }
}

fn select_player<'a>(round: &'a Round, wanted: Option<&str>) -> Result<&'a RoundPlayer, DomainError> {
    let found = match wanted {
        Some(key) => round
            .players
            .iter()
            .find(|p| p.id.as_deref() == Some(key) || p.name == key),
        None => round.owner(),
    };
    found.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Player,
            match wanted {
                Some(key) => format!("Player '{key}' not found in round"),
                None => "Round has no players".to_string(),
            },
        )
    })
}
