use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::course::Course;
use crate::domain::scorecard::ExtractedRound;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::scorecard_import::ScorecardUpload;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct CourseImportResponse {
    pub success: bool,
    pub message: &'static str,
    pub course_data: Course,
}

#[derive(Debug, Serialize)]
pub struct RoundImportResponse {
    pub success: bool,
    pub message: &'static str,
    pub round_data: ExtractedRound,
}

async fn import_course(
    app_state: web::Data<AppState>,
    body: ValidatedJson<ScorecardUpload>,
) -> Result<HttpResponse, AppError> {
    let course_data = app_state.scorecard_import().import_course(&body).await?;
    Ok(HttpResponse::Ok().json(CourseImportResponse {
        success: true,
        message: "Data extracted successfully. Review and confirm to save.",
        course_data,
    }))
}

async fn import_round(
    app_state: web::Data<AppState>,
    body: ValidatedJson<ScorecardUpload>,
) -> Result<HttpResponse, AppError> {
    let round_data = app_state.scorecard_import().import_round(&body).await?;
    Ok(HttpResponse::Ok().json(RoundImportResponse {
        success: true,
        message: "Round data extracted successfully. Review and confirm to save.",
        round_data,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/course", web::post().to(import_course))
        .route("/round", web::post().to(import_round));
}
