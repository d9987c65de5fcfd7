use actix_web::{web, App, HttpServer};
use golfshot_backend::config::Settings;
use golfshot_backend::middleware::cors::cors_middleware;
use golfshot_backend::middleware::request_trace::RequestTrace;
use golfshot_backend::middleware::structured_logger::StructuredLogger;
use golfshot_backend::middleware::trace_span::TraceSpan;
use golfshot_backend::routes;
use golfshot_backend::state::app_state::AppState;
use golfshot_backend::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let host = settings.host.clone();
    let port = settings.port;
    let cors_origins = settings.cors_origins.clone();

    let app_state = match AppState::from_settings(settings) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    if app_state.vision.is_some() {
        println!("✅ Scorecard import enabled");
    } else {
        println!("⚠️  VISION_API_KEY not set, scorecard import disabled");
    }

    println!("🚀 Starting Golf Shot Backend on http://{}:{}", host, port);

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
