use axum::{Router, routing::get};
use util::state::AppState;

mod get;

pub use get::{daily_report, summary_report};

pub fn reports_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/summary", get(summary_report))
        .route("/daily", get(daily_report))
        .with_state(app_state)
}
