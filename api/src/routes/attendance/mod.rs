use axum::{Router, routing::post};
use util::state::AppState;

mod common;
mod post;

pub use common::{ScanData, ScanRequest};
pub use post::record_attendance;

pub fn attendance_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/scans", post(record_attendance))
        .with_state(app_state)
}
