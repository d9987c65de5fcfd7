//! User statistics over a round history.

use std::collections::HashMap;

use time::{Date, OffsetDateTime};
use tracing::info;

use crate::domain::course::Course;
use crate::domain::round::Round;
use crate::domain::stats::{compute_user_stats, UserStats};

/// Compute statistics as of `as_of`, or today (UTC) when not given.
pub fn user_stats(rounds: &[Round], courses: &[Course], as_of: Option<Date>) -> UserStats {
    let as_of = as_of.unwrap_or_else(|| OffsetDateTime::now_utc().date());
    let by_id: HashMap<String, Course> = courses
        .iter()
        .filter_map(|c| c.id.clone().map(|id| (id, c.clone())))
        .collect();

    let stats = compute_user_stats(rounds, &by_id, as_of);
    info!(
        rounds_in = rounds.len(),
        courses_in = by_id.len(),
        total_rounds = stats.total_rounds,
        %as_of,
        "User statistics computed"
    );
    stats
}
