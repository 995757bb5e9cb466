use axum::{Router, routing::get};
use util::state::AppState;

mod get;

pub use get::list_courses;

pub fn courses_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(list_courses))
        .with_state(app_state)
}
