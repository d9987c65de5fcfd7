// Proptest generators for engine inputs.

use proptest::prelude::*;

use crate::domain::course::CourseLength;
use crate::domain::round::HandicapPercentage;

/// Handicap index in the playable range, one decimal like real indexes.
pub fn handicap_index() -> impl Strategy<Value = f64> {
    (0i32..=540).prop_map(|tenths| f64::from(tenths) / 10.0)
}

/// Plus handicaps included.
pub fn playing_handicap() -> impl Strategy<Value = i32> {
    -10i32..=60
}

pub fn slope() -> impl Strategy<Value = u16> {
    55u16..=155
}

pub fn stroke_index() -> impl Strategy<Value = u8> {
    1u8..=18
}

pub fn par() -> impl Strategy<Value = u8> {
    3u8..=5
}

pub fn percentage() -> impl Strategy<Value = HandicapPercentage> {
    prop_oneof![
        Just(HandicapPercentage::Full),
        Just(HandicapPercentage::ThreeQuarters),
    ]
}

pub fn nine_hole_length() -> impl Strategy<Value = CourseLength> {
    prop_oneof![Just(CourseLength::Front9), Just(CourseLength::Back9)]
}

/// Gross strokes for nine holes, each between 1 and 10.
pub fn nine_hole_strokes() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(1i32..=10, 9)
}
