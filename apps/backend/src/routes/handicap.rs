use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::domain::handicap::playing_handicap;
use crate::domain::handicap_history::{current_handicap, handicap_at, HandicapEntry};
use crate::domain::round::HandicapPercentage;
use crate::domain::stableford::strokes_received;
use crate::error::AppError;
use crate::extractors::ValidatedJson;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Deserialize)]
pub struct PlayingHandicapRequest {
    pub handicap_index: f64,
    pub slope: u16,
    #[serde(default)]
    pub percentage: HandicapPercentage,
}

#[derive(Debug, Serialize)]
pub struct PlayingHandicapResponse {
    pub playing_handicap: i32,
}

#[derive(Debug, Deserialize)]
pub struct StrokesReceivedRequest {
    pub playing_handicap: i32,
    pub stroke_index: u8,
}

#[derive(Debug, Serialize)]
pub struct StrokesReceivedResponse {
    pub strokes_received: i32,
}

#[derive(Debug, Deserialize)]
pub struct HandicapAtDateRequest {
    #[serde(default)]
    pub entries: Vec<HandicapEntry>,
    #[serde(with = "iso_date")]
    pub date: Date,
}

#[derive(Debug, Deserialize)]
pub struct CurrentHandicapRequest {
    #[serde(default)]
    pub entries: Vec<HandicapEntry>,
}

async fn compute_playing_handicap(
    body: ValidatedJson<PlayingHandicapRequest>,
) -> Result<HttpResponse, AppError> {
    let playing_handicap = playing_handicap(body.handicap_index, body.slope, body.percentage);
    Ok(HttpResponse::Ok().json(PlayingHandicapResponse { playing_handicap }))
}

async fn compute_strokes_received(
    body: ValidatedJson<StrokesReceivedRequest>,
) -> Result<HttpResponse, AppError> {
    let strokes_received = strokes_received(body.playing_handicap, body.stroke_index);
    Ok(HttpResponse::Ok().json(StrokesReceivedResponse { strokes_received }))
}

async fn history_at_date(
    body: ValidatedJson<HandicapAtDateRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(handicap_at(&body.entries, body.date)))
}

async fn history_current(
    body: ValidatedJson<CurrentHandicapRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(current_handicap(&body.entries)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/playing", web::post().to(compute_playing_handicap))
        .route("/strokes-received", web::post().to(compute_strokes_received))
        .route("/history/at-date", web::post().to(history_at_date))
        .route("/history/current", web::post().to(history_current));
}
