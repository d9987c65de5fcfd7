//! One completion line per request, levelled by response status.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::trace_ctx;

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

struct Completed<'a> {
    method: &'a str,
    path: &'a str,
    trace_id: &'a str,
    status: StatusCode,
    duration_us: u64,
}

impl Completed<'_> {
    fn log(&self) {
        let status_code = self.status.as_u16();
        let (method, path, trace_id, duration_us) =
            (self.method, self.path, self.trace_id, self.duration_us);
        if self.status.is_server_error() {
            error!(http.method=%method, url.path=%path, http.status_code=status_code, duration_us, trace_id=%trace_id, message="request_completed");
        } else if self.status.is_client_error() {
            warn!(http.method=%method, url.path=%path, http.status_code=status_code, duration_us, trace_id=%trace_id, message="request_completed");
        } else {
            info!(http.method=%method, url.path=%path, http.status_code=status_code, duration_us, trace_id=%trace_id, message="request_completed");
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| trace_ctx::UNKNOWN.to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };

            Completed {
                method: &method,
                path: &path,
                trace_id: &trace_id,
                status,
                duration_us: start.elapsed().as_micros() as u64,
            }
            .log();

            result
        })
    }
}
