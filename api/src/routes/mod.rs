//! HTTP route entry point for `/api/...`.
//!
//! Route groups include:
//! - `/health` → Health check endpoint (public)
//! - `/courses` → Course listing for the scanning client (authenticated)
//! - `/attendance` → Scan ingestion (authenticated)
//! - `/reports` → Summary and daily attendance reports (authenticated)

use axum::{Router, middleware::from_fn};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;
use crate::routes::{
    attendance::attendance_routes, courses::courses_routes, health::health_routes,
    reports::reports_routes,
};

pub mod attendance;
pub mod courses;
pub mod health;
pub mod reports;

/// Builds the complete application router for all HTTP endpoints.
///
/// Everything except `/health` sits behind the `allow_authenticated` guard:
/// token issuance belongs to the external auth service, but a valid Bearer
/// token is required before any core logic runs.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest(
            "/courses",
            courses_routes(app_state.clone()).route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/attendance",
            attendance_routes(app_state.clone()).route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/reports",
            reports_routes(app_state).route_layer(from_fn(allow_authenticated)),
        )
}
