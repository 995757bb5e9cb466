mod helpers;

use axum::http::StatusCode;
use tower::ServiceExt;

use db::models::{course::Model as Course, lecturer::Model as Lecturer};

use helpers::app::{bearer_token, body_json, get, make_test_app};

#[tokio::test]
async fn course_list_requires_authentication() {
    let (app, _state) = make_test_app().await;

    let res = app.oneshot(get("/api/courses", None)).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn courses_are_listed_in_code_order_with_lecturer_names() {
    let (app, state) = make_test_app().await;

    let turing = Lecturer::create(state.db(), "STF/001", 7, "Alan Turing", "CS")
        .await
        .unwrap();
    Course::create(state.db(), "CS305", "Operating Systems", None)
        .await
        .unwrap();
    Course::create(state.db(), "CS301", "Algorithms", Some(turing.id))
        .await
        .unwrap();

    let auth = bearer_token();
    let res = app.oneshot(get("/api/courses", Some(&auth))).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_json(res).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);

    assert_eq!(data[0]["course_code"], "CS301");
    assert_eq!(data[0]["lecturer_name"], "Alan Turing");
    assert_eq!(data[1]["course_code"], "CS305");
    assert_eq!(data[1]["lecturer_name"], "N/A");
}
