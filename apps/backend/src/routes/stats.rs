use actix_web::{web, HttpResponse};
use serde::Deserialize;
use time::Date;

use crate::domain::course::Course;
use crate::domain::round::Round;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::stats::user_stats;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Deserialize)]
pub struct UserStatsRequest {
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub courses: Vec<Course>,
    /// Reference date for the HVP windows; today (UTC) when absent.
    #[serde(default, with = "iso_date::option")]
    pub as_of: Option<Date>,
}

async fn compute(body: ValidatedJson<UserStatsRequest>) -> Result<HttpResponse, AppError> {
    let stats = user_stats(&body.rounds, &body.courses, body.as_of);
    Ok(HttpResponse::Ok().json(stats))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/user", web::post().to(compute));
}
