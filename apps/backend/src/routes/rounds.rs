use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::course::Course;
use crate::domain::round::Round;
use crate::domain::round_setup::{RoundCreate, RoundUpdate};
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::rounds::RoundService;

#[derive(Debug, Deserialize)]
pub struct SetupRequest {
    pub course: Course,
    pub round: RoundCreate,
}

#[derive(Debug, Deserialize)]
pub struct ApplyUpdateRequest {
    pub round: Round,
    #[serde(default)]
    pub course: Option<Course>,
    pub update: RoundUpdate,
}

#[derive(Debug, Deserialize)]
pub struct StablefordRequest {
    pub round: Round,
    pub course: Course,
    /// Player id or name; the round owner when absent.
    #[serde(default)]
    pub player: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VirtualHandicapRequest {
    pub round: Round,
    pub course: Course,
}

#[derive(Debug, Serialize)]
pub struct VirtualHandicapResponse {
    pub virtual_handicap: Option<f64>,
}

async fn setup(body: ValidatedJson<SetupRequest>) -> Result<HttpResponse, AppError> {
    let SetupRequest { course, round } = body.into_inner();
    let round = RoundService::new().create(&course, round)?;
    Ok(HttpResponse::Created().json(round))
}

async fn apply_update(body: ValidatedJson<ApplyUpdateRequest>) -> Result<HttpResponse, AppError> {
    let ApplyUpdateRequest {
        round,
        course,
        update,
    } = body.into_inner();
    let round = RoundService::new().update(round, update, course.as_ref())?;
    Ok(HttpResponse::Ok().json(round))
}

async fn stableford(body: ValidatedJson<StablefordRequest>) -> Result<HttpResponse, AppError> {
    let result =
        RoundService::new().stableford(&body.round, &body.course, body.player.as_deref())?;
    Ok(HttpResponse::Ok().json(result))
}

async fn virtual_handicap(
    body: ValidatedJson<VirtualHandicapRequest>,
) -> Result<HttpResponse, AppError> {
    let virtual_handicap = RoundService::new().virtual_handicap(&body.round, &body.course);
    Ok(HttpResponse::Ok().json(VirtualHandicapResponse { virtual_handicap }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/setup", web::post().to(setup))
        .route("/apply-update", web::post().to(apply_update))
        .route("/stableford", web::post().to(stableford))
        .route("/virtual-handicap", web::post().to(virtual_handicap));
}
