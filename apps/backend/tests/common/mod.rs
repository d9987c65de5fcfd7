#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::{json, Value};

pub mod proptest_prelude;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub const PARS: [u8; 18] = [4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 4, 3, 5, 4, 4, 3, 4, 5];

/// Par 72 course: stroke index equals the hole number, two tees.
pub fn course_json() -> Value {
    let holes: Vec<Value> = PARS
        .iter()
        .enumerate()
        .map(|(i, par)| json!({"number": i + 1, "par": par, "handicap": i + 1, "distance": 350}))
        .collect();
    json!({
        "id": "course-1",
        "name": "Test Golf",
        "holes": 18,
        "par": 72,
        "tees": [
            {"name": "Amarillas", "slope": 132, "rating": 71.5},
            {"name": "Rojas", "slope": 113, "rating": 70.0}
        ],
        "holes_data": holes
    })
}

/// Scores keyed by hole number, `par + delta` strokes and 2 putts each.
pub fn scores_vs_par(holes: impl IntoIterator<Item = u8>, delta: i32) -> Value {
    let mut scores = serde_json::Map::new();
    for number in holes {
        let par = i32::from(PARS[usize::from(number - 1)]);
        scores.insert(
            number.to_string(),
            json!({"strokes": par + delta, "putts": 2}),
        );
    }
    Value::Object(scores)
}

/// Finished round on `course-1` owned by a single player.
pub fn finished_round(
    date: &str,
    course_length: &str,
    handicap_index: f64,
    playing_handicap: i32,
    scores: Value,
) -> Value {
    json!({
        "course_id": "course-1",
        "course_name": "Test Golf",
        "round_date": date,
        "course_length": course_length,
        "game_mode": "stableford",
        "is_finished": true,
        "players": [{
            "id": "p-owner",
            "name": "Owner",
            "handicap_index": handicap_index,
            "tee_box": "Rojas",
            "playing_handicap": playing_handicap,
            "is_owner": true,
            "scores": scores
        }]
    })
}

/// Read a JSON body, panicking with the raw text when it is not JSON.
pub async fn read_json(resp: ServiceResponse<BoxBody>) -> Value {
    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).expect("body should be UTF-8");
    serde_json::from_str(text).unwrap_or_else(|_| panic!("body should be JSON: {text}"))
}
