use actix_web::web;

pub mod handicap;
pub mod health;
pub mod rounds;
pub mod scorecards;
pub mod stats;

/// Register every endpoint. Shared by `main.rs` and the integration tests;
/// middleware is wrapped around the `App` by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Handicap arithmetic: /api/handicap/**
    cfg.service(web::scope("/api/handicap").configure(handicap::configure_routes));

    // Round setup, updates and scoring: /api/rounds/**
    cfg.service(web::scope("/api/rounds").configure(rounds::configure_routes));

    // Statistics: /api/stats/**
    cfg.service(web::scope("/api/stats").configure(stats::configure_routes));

    // Scorecard image import: /api/scorecards/**
    cfg.service(web::scope("/api/scorecards").configure(scorecards::configure_routes));
}
