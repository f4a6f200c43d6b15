//! Probe endpoints for process supervisors.
//!
//! `/health/live` answers as soon as a worker can serve it. `/health/ready`
//! stays 503 until `create_server` has loaded the user collection and bound
//! the listener. Neither response may be cached.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Startup progress shared between the bootstrap and the readiness probe.
#[derive(Debug, Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    /// Starts unready.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the collection is loaded and the socket is bound.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

fn uncached(mut response: actix_web::HttpResponseBuilder) -> HttpResponse {
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Report whether the registry is serving requests yet.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "User collection loaded and listener bound"),
        (status = 503, description = "Still starting")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    if state.is_ready() {
        uncached(HttpResponse::Ok())
    } else {
        uncached(HttpResponse::ServiceUnavailable())
    }
}

/// Report that a worker answered.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses((status = 200, description = "A worker answered"))
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    uncached(HttpResponse::Ok())
}
