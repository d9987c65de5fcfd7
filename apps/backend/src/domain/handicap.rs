//! Handicap index to playing handicap conversion.

use crate::domain::course::NEUTRAL_SLOPE;
use crate::domain::round::HandicapPercentage;

/// Playing handicap for a given index on a tee of `slope`, scaled by the
/// round's handicap allowance.
///
/// Halves round to the even neighbour (`12.5 -> 12`, `13.5 -> 14`).
pub fn playing_handicap(handicap_index: f64, slope: u16, percentage: HandicapPercentage) -> i32 {
    let course_handicap = handicap_index * f64::from(slope) / f64::from(NEUTRAL_SLOPE);
    let scaled = course_handicap * f64::from(percentage.value()) / 100.0;
    scaled.round_ties_even() as i32
}

/// Round to `places` decimal places, halves away from zero.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
