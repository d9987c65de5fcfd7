use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use golfshot_backend::config::Settings;
use golfshot_backend::infra::VisionClient;
use golfshot_backend::middleware::request_trace::RequestTrace;
use golfshot_backend::middleware::structured_logger::StructuredLogger;
use golfshot_backend::middleware::trace_span::TraceSpan;
use golfshot_backend::routes;
use golfshot_backend::state::app_state::AppState;

/// Type alias for route configuration functions
type RouteConfigFn = Box<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

/// Builder for creating test Actix service instances
pub struct TestAppBuilder {
    settings: Settings,
    vision: Option<Arc<dyn VisionClient>>,
    route_config: Option<RouteConfigFn>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            settings: Settings::for_tests(),
            vision: None,
            route_config: None,
        }
    }

    /// Serve the production routes
    pub fn with_prod_routes(mut self) -> Self {
        self.route_config = Some(Box::new(routes::configure) as RouteConfigFn);
        self
    }

    /// Serve custom routes
    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.route_config = Some(Box::new(config_fn) as RouteConfigFn);
        self
    }

    /// Answer scorecard imports with the given client
    pub fn with_vision(mut self, client: Arc<dyn VisionClient>) -> Self {
        self.vision = Some(client);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Build the test service with the production middleware stack
    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let data = web::Data::new(AppState::new(self.settings, self.vision));
        let route_config = self.route_config;

        test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data)
                .configure(move |cfg| {
                    if let Some(config_fn) = &route_config {
                        config_fn(cfg);
                    }
                }),
        )
        .await
    }
}

/// Create a new test app builder with test settings and no vision model
pub fn create_test_app() -> TestAppBuilder {
    TestAppBuilder::new()
}
