//! Domain layer: the scoring and handicapping engine and its data types.
//!
//! Everything in here is pure: no I/O, no clocks, no shared state. Callers
//! fetch rounds and courses first and hand them in fully materialised.

pub mod course;
pub mod handicap;
pub mod handicap_history;
pub mod round;
pub mod round_setup;
pub mod scorecard;
pub mod stableford;
pub mod stats;
pub mod virtual_handicap;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_stats;
#[cfg(test)]
mod tests_virtual_handicap;

// Re-exports for ergonomics
pub use course::{Course, CourseLength, HoleInfo, Tee};
pub use handicap::playing_handicap;
pub use handicap_history::{current_handicap, handicap_at, HandicapEntry};
pub use round::{GameMode, HandicapPercentage, Round, RoundPlayer, Score, Team, TeamMode};
pub use round_setup::{apply_round_update, setup_round, PlayerCreate, RoundCreate, RoundUpdate};
pub use stableford::{score_holes, stableford_points, strokes_received, StablefordResult};
pub use stats::{compute_user_stats, UserStats};
pub use virtual_handicap::virtual_handicap;
