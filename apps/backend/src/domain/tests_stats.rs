//! Statistics aggregation over round histories.

use std::collections::{BTreeMap, HashMap};

use time::macros::date;

use crate::domain::course::{Course, CourseLength};
use crate::domain::fixtures::{finished_round, net_par_scores, owner, par_72_course, scores_vs_par};
use crate::domain::round::{GameMode, Round};
use crate::domain::stats::{compute_user_stats, parse_round_date, UserStats};

fn courses() -> HashMap<String, Course> {
    let course = par_72_course();
    HashMap::from([("course-1".to_string(), course)])
}

fn with_hvp(mut round: Round, value: f64) -> Round {
    round.virtual_handicap = Some(value);
    round
}

fn history() -> Vec<Round> {
    vec![
        // VH computed: net par at 18 -> 18.0
        finished_round(
            "2025-06-01",
            CourseLength::Full,
            GameMode::Stableford,
            vec![owner(Some(18.0), 18, net_par_scores(1..=18))],
        ),
        with_hvp(
            finished_round(
                "2025-04-10",
                CourseLength::Front9,
                GameMode::Stableford,
                vec![owner(Some(18.0), 18, net_par_scores(1..=9))],
            ),
            20.0,
        ),
        with_hvp(
            finished_round(
                "2025-01-15T09:30:00",
                CourseLength::Full,
                GameMode::Stroke,
                vec![owner(Some(18.0), 18, net_par_scores(1..=18))],
            ),
            22.0,
        ),
        with_hvp(
            finished_round(
                "2024-12-01",
                CourseLength::Full,
                GameMode::Stroke,
                vec![owner(Some(18.0), 18, net_par_scores(1..=18))],
            ),
            30.0,
        ),
    ]
}

#[test]
fn empty_history_has_no_derived_values() {
    let stats = compute_user_stats(&[], &courses(), date!(2025 - 06 - 20));
    assert_eq!(stats, UserStats::default());
    assert_eq!(stats.total_rounds, 0);
    assert!(stats.avg_strokes_18.is_none());
    assert!(stats.hvp_total.is_none());
    assert!(stats.score_distribution.is_none());
    assert!(stats.gir_percentage.is_none());
}

#[test]
fn hvp_windows_follow_calendar() {
    let stats = compute_user_stats(&history(), &courses(), date!(2025 - 06 - 20));
    assert_eq!(stats.hvp_total, Some(22.5));
    assert_eq!(stats.hvp_year, Some(20.0));
    // April and June share the second quarter
    assert_eq!(stats.hvp_quarter, Some(19.0));
    assert_eq!(stats.hvp_month, Some(18.0));
}

#[test]
fn hvp_quarter_spans_three_months() {
    let round = |date: &str, hvp: f64| {
        with_hvp(
            finished_round(
                date,
                CourseLength::Full,
                GameMode::Stroke,
                vec![owner(Some(18.0), 18, net_par_scores(1..=18))],
            ),
            hvp,
        )
    };
    let rounds = vec![
        round("2025-04-03", 10.0),
        round("2025-05-03", 20.0),
        round("2025-06-03", 30.0),
    ];
    let stats = compute_user_stats(&rounds, &courses(), date!(2025 - 06 - 20));
    assert_eq!(stats.hvp_month, Some(30.0));
    assert_eq!(stats.hvp_quarter, Some(20.0));
    assert_eq!(stats.hvp_year, Some(20.0));
}

#[test]
fn hvp_month_is_empty_without_a_round_this_month() {
    let stats = compute_user_stats(&history(), &courses(), date!(2025 - 07 - 05));
    assert_eq!(stats.hvp_month, None);
    assert_eq!(stats.hvp_quarter, None);
    assert_eq!(stats.hvp_year, Some(20.0));
    assert_eq!(stats.hvp_total, Some(22.5));
}

#[test]
fn length_classes_are_kept_apart() {
    let stats = compute_user_stats(&history(), &courses(), date!(2025 - 06 - 20));
    assert_eq!(stats.total_rounds, 4);
    assert_eq!(stats.rounds_18, 3);
    assert_eq!(stats.rounds_9, 1);
    // 72 + 18 handicap strokes
    assert_eq!(stats.avg_strokes_18, Some(90.0));
    assert_eq!(stats.avg_strokes_9, Some(45.0));
    assert_eq!(stats.avg_putts_18, Some(36.0));
    assert_eq!(stats.avg_putts_9, Some(18.0));

    let best = stats.best_round_18.expect("best 18");
    assert_eq!(best.strokes, 90);
    assert_eq!(best.date, "2025-06-01");
    assert_eq!(best.course_name.as_deref(), Some("Test Golf"));
    assert_eq!(stats.best_round_9.map(|b| b.strokes), Some(45));
}

#[test]
fn stableford_average_only_counts_stableford_rounds() {
    let stats = compute_user_stats(&history(), &courses(), date!(2025 - 06 - 20));
    // 36 over 18, and 18 over nine doubled to 36
    assert_eq!(stats.stableford_rounds, 2);
    assert_eq!(stats.avg_stableford, Some(36.0));
}

#[test]
fn hole_level_aggregates() {
    // eagle, birdie, par, bogey, double, triple, then pars
    let mut deltas = vec![-2, -1, 0, 1, 2, 3];
    deltas.extend([0; 12]);
    let round = finished_round(
        "2025-03-03",
        CourseLength::Full,
        GameMode::Stroke,
        vec![owner(Some(10.0), 10, scores_vs_par(&deltas, 2))],
    );
    let stats = compute_user_stats(&[round], &courses(), date!(2025 - 06 - 20));

    assert_eq!(stats.avg_strokes_18, Some(75.0));
    assert_eq!(stats.avg_putts_per_hole, Some(2.0));
    assert_eq!(stats.avg_par3, Some(3.0));
    assert_eq!(stats.avg_par4, Some(4.2));
    assert_eq!(stats.avg_par5, Some(5.25));

    let distribution = stats.score_distribution.expect("distribution");
    assert_eq!(distribution.eagle_or_better, 5.6);
    assert_eq!(distribution.birdie, 5.6);
    assert_eq!(distribution.par, 72.2);
    assert_eq!(distribution.bogey, 5.6);
    assert_eq!(distribution.double_bogey, 5.6);
    assert_eq!(distribution.triple_or_worse, 5.6);

    // two putts: green in regulation whenever gross <= par
    assert_eq!(stats.gir_percentage, Some(83.3));
}

#[test]
fn gir_ignores_holes_without_putts() {
    let mut scores = scores_vs_par(&[0, 0], 0);
    scores.extend(scores_vs_par(&[0, 0, -1, 0], 1).into_iter().skip(2));
    let round = finished_round(
        "2025-03-03",
        CourseLength::Full,
        GameMode::Stroke,
        vec![owner(Some(10.0), 10, scores)],
    );
    let stats = compute_user_stats(&[round], &courses(), date!(2025 - 06 - 20));
    // only holes 3 and 4 carry putts; a one-putt birdie hits, a one-putt par misses
    assert_eq!(stats.gir_percentage, Some(50.0));
}

#[test]
fn skips_unusable_rounds() {
    let mut unfinished = finished_round(
        "2025-06-01",
        CourseLength::Full,
        GameMode::Stableford,
        vec![owner(Some(18.0), 18, net_par_scores(1..=18))],
    );
    unfinished.is_finished = false;

    let mut unknown_course = unfinished.clone();
    unknown_course.is_finished = true;
    unknown_course.course_id = Some("elsewhere".into());

    let no_players = finished_round("2025-06-01", CourseLength::Full, GameMode::Stableford, vec![]);

    let stats = compute_user_stats(
        &[unfinished, unknown_course, no_players],
        &courses(),
        date!(2025 - 06 - 20),
    );
    assert_eq!(stats, UserStats::default());
}

#[test]
fn unscored_round_counts_without_length_class() {
    let round = finished_round(
        "2025-06-01",
        CourseLength::Full,
        GameMode::Stableford,
        vec![owner(Some(18.0), 18, BTreeMap::new())],
    );
    let stats = compute_user_stats(&[round], &courses(), date!(2025 - 06 - 20));
    assert_eq!(stats.total_rounds, 1);
    assert_eq!(stats.rounds_18, 0);
    assert!(stats.best_round_18.is_none());
    assert!(stats.avg_stableford.is_none());
    assert!(stats.hvp_total.is_none());
}

#[test]
fn unparseable_dates_only_count_all_time() {
    let round = with_hvp(
        finished_round(
            "last tuesday",
            CourseLength::Full,
            GameMode::Stroke,
            vec![owner(Some(18.0), 18, net_par_scores(1..=18))],
        ),
        17.0,
    );
    let stats = compute_user_stats(&[round], &courses(), date!(2025 - 06 - 20));
    assert_eq!(stats.hvp_total, Some(17.0));
    assert_eq!(stats.hvp_year, None);
    assert_eq!(parse_round_date("2025-02-03T10:00:00Z"), Some(date!(2025 - 02 - 03)));
    assert_eq!(parse_round_date("2025-2-3"), None);
}
