use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, header},
    response::Response,
};
use serde_json::Value;
use util::{config::AppConfig, state::AppState};

use api::{auth::generate_jwt, routes::routes};

/// Builds a router backed by a fresh in-memory database with migrations
/// applied, plus the state handle for direct seeding from tests.
pub async fn make_test_app() -> (Router, AppState) {
    AppConfig::set_jwt_secret("integration-test-secret");

    let db = db::test_utils::setup_test_db().await;
    let state = AppState::new(db);
    let router = Router::new().nest("/api", routes(state.clone()));
    (router, state)
}

/// Mints a Bearer token for an arbitrary principal; token issuance itself is
/// outside this service, the API only verifies.
pub fn bearer_token() -> String {
    let (token, _) = generate_jwt(1, false);
    format!("Bearer {token}")
}

pub fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, auth: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
