//! Per-player statistics folded from a round history.
//!
//! Everything is recomputed from the source rounds on each call; nothing here
//! is persisted or cached.

use std::collections::HashMap;

use serde::Serialize;
use time::macros::format_description;
use time::Date;

use crate::domain::course::Course;
use crate::domain::handicap::round_to;
use crate::domain::round::{GameMode, Round};
use crate::domain::virtual_handicap::{normalized_points, player_stableford, virtual_handicap};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestRound {
    pub strokes: i32,
    pub date: String,
    pub course_name: Option<String>,
}

/// Share of scored holes per gross result, in percent.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScoreDistribution {
    pub eagle_or_better: f64,
    pub birdie: f64,
    pub par: f64,
    pub bogey: f64,
    pub double_bogey: f64,
    pub triple_or_worse: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UserStats {
    pub total_rounds: u32,
    pub rounds_18: u32,
    pub rounds_9: u32,
    pub avg_strokes_18: Option<f64>,
    pub avg_strokes_9: Option<f64>,
    pub avg_putts_18: Option<f64>,
    pub avg_putts_9: Option<f64>,
    pub avg_putts_per_hole: Option<f64>,
    pub avg_par3: Option<f64>,
    pub avg_par4: Option<f64>,
    pub avg_par5: Option<f64>,
    pub best_round_18: Option<BestRound>,
    pub best_round_9: Option<BestRound>,
    pub avg_stableford: Option<f64>,
    pub stableford_rounds: u32,
    pub hvp_total: Option<f64>,
    pub hvp_month: Option<f64>,
    pub hvp_quarter: Option<f64>,
    pub hvp_year: Option<f64>,
    pub score_distribution: Option<ScoreDistribution>,
    pub gir_percentage: Option<f64>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Mean {
    sum: f64,
    count: u32,
}

impl Mean {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn value(&self, places: i32) -> Option<f64> {
        (self.count > 0).then(|| round_to(self.sum / f64::from(self.count), places))
    }
}

/// Gross score buckets, indexed eagle-or-better .. triple-or-worse.
#[derive(Debug, Default)]
struct Distribution {
    buckets: [u32; 6],
    total: u32,
}

impl Distribution {
    fn record(&mut self, strokes: i32, par: u8) {
        let bucket = match strokes - i32::from(par) {
            i32::MIN..=-2 => 0,
            -1 => 1,
            0 => 2,
            1 => 3,
            2 => 4,
            _ => 5,
        };
        self.buckets[bucket] += 1;
        self.total += 1;
    }

    fn percentages(&self) -> Option<ScoreDistribution> {
        if self.total == 0 {
            return None;
        }
        let pct = |count: u32| round_to(f64::from(count) / f64::from(self.total) * 100.0, 1);
        Some(ScoreDistribution {
            eagle_or_better: pct(self.buckets[0]),
            birdie: pct(self.buckets[1]),
            par: pct(self.buckets[2]),
            bogey: pct(self.buckets[3]),
            double_bogey: pct(self.buckets[4]),
            triple_or_worse: pct(self.buckets[5]),
        })
    }
}

#[derive(Debug, Default)]
struct LengthClass {
    strokes: Mean,
    putts: Mean,
    best: Option<BestRound>,
}

impl LengthClass {
    fn record(&mut self, strokes: i32, putts: i32, round: &Round) {
        self.strokes.push(f64::from(strokes));
        self.putts.push(f64::from(putts));
        let better = self.best.as_ref().map_or(true, |b| strokes < b.strokes);
        if better {
            self.best = Some(BestRound {
                strokes,
                date: round.round_date.clone(),
                course_name: round.course_name.clone(),
            });
        }
    }
}

/// Calendar windows HVP values are averaged over.
#[derive(Debug, Default)]
struct HvpWindows {
    total: Mean,
    month: Mean,
    quarter: Mean,
    year: Mean,
}

impl HvpWindows {
    fn record(&mut self, value: f64, played_on: Option<Date>, as_of: Date) {
        self.total.push(value);
        let Some(date) = played_on else {
            return;
        };
        if date.year() != as_of.year() {
            return;
        }
        self.year.push(value);
        if quarter_of(date) == quarter_of(as_of) {
            self.quarter.push(value);
        }
        if date.month() == as_of.month() {
            self.month.push(value);
        }
    }
}

fn quarter_of(date: Date) -> u8 {
    (u8::from(date.month()) - 1) / 3
}

/// Parse the calendar date from a stored `round_date` (`YYYY-MM-DD`, optionally
/// followed by a time part).
pub fn parse_round_date(raw: &str) -> Option<Date> {
    let day = raw.get(..10)?;
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

/// Fold the finished rounds of one player into [`UserStats`].
///
/// Rounds that are unfinished, reference an unknown course, or have no owner
/// player are ignored. Only holes inside the round's course length with a
/// recorded score contribute.
pub fn compute_user_stats(
    rounds: &[Round],
    courses: &HashMap<String, Course>,
    as_of: Date,
) -> UserStats {
    let mut stats = UserStats::default();
    let mut full = LengthClass::default();
    let mut nine = LengthClass::default();
    let mut par_strokes = [Mean::default(); 3];
    let mut putts_per_hole = Mean::default();
    let mut stableford = Mean::default();
    let mut distribution = Distribution::default();
    let mut gir_hits = 0u32;
    let mut gir_total = 0u32;
    let mut hvp = HvpWindows::default();

    for round in rounds.iter().filter(|r| r.is_finished) {
        let Some(course) = round.course_id.as_ref().and_then(|id| courses.get(id)) else {
            continue;
        };
        let Some(owner) = round.owner() else {
            continue;
        };
        stats.total_rounds += 1;

        let mut round_strokes = 0;
        let mut round_putts = 0;
        for number in round.course_length.hole_range() {
            let (Some(score), Some(hole)) = (owner.score(number), course.hole(number)) else {
                continue;
            };
            if let 3..=5 = hole.par {
                par_strokes[usize::from(hole.par - 3)].push(f64::from(score.strokes));
            }
            putts_per_hole.push(f64::from(score.putts));
            round_strokes += score.strokes;
            round_putts += score.putts;
            distribution.record(score.strokes, hole.par);
            if score.putts > 0 {
                gir_total += 1;
                if score.strokes - score.putts <= i32::from(hole.par) - 2 {
                    gir_hits += 1;
                }
            }
        }

        if round_strokes > 0 {
            let class = if round.course_length.is_nine_holes() {
                &mut nine
            } else {
                &mut full
            };
            class.record(round_strokes, round_putts, round);
        }

        let result = player_stableford(owner, round, course);
        if round.game_mode == GameMode::Stableford && !result.is_empty() {
            let points = normalized_points(result.total_points, round.course_length);
            stableford.push(f64::from(points));
        }

        if let Some(value) = round
            .virtual_handicap
            .or_else(|| virtual_handicap(round, course))
        {
            hvp.record(value, parse_round_date(&round.round_date), as_of);
        }
    }

    stats.rounds_18 = full.strokes.count;
    stats.rounds_9 = nine.strokes.count;
    stats.avg_strokes_18 = full.strokes.value(2);
    stats.avg_strokes_9 = nine.strokes.value(2);
    stats.avg_putts_18 = full.putts.value(2);
    stats.avg_putts_9 = nine.putts.value(2);
    stats.best_round_18 = full.best;
    stats.best_round_9 = nine.best;
    stats.avg_putts_per_hole = putts_per_hole.value(2);
    stats.avg_par3 = par_strokes[0].value(2);
    stats.avg_par4 = par_strokes[1].value(2);
    stats.avg_par5 = par_strokes[2].value(2);
    stats.avg_stableford = stableford.value(2);
    stats.stableford_rounds = stableford.count;
    stats.hvp_total = hvp.total.value(1);
    stats.hvp_month = hvp.month.value(1);
    stats.hvp_quarter = hvp.quarter.value(1);
    stats.hvp_year = hvp.year.value(1);
    stats.score_distribution = distribution.percentages();
    stats.gir_percentage = (gir_total > 0)
        .then(|| round_to(f64::from(gir_hits) / f64::from(gir_total) * 100.0, 1));
    stats
}
