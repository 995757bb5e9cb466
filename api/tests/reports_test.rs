mod helpers;

use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};
use tower::ServiceExt;

use db::models::attendance_record::ActiveModel as RecordActive;
use db::models::{course::Model as Course, student::Model as Student};
use util::state::AppState;

use helpers::app::{bearer_token, body_json, get, make_test_app};

async fn seed_two_lecture_days(state: &AppState) {
    let db = state.db();
    Student::create(db, "CS/2021/001", "Ada Lovelace", "Female", "CS")
        .await
        .unwrap();
    Student::create(db, "CS/2021/002", "Charles Babbage", "Male", "CS")
        .await
        .unwrap();
    Course::create(db, "CS301", "Algorithms", None).await.unwrap();

    let day1 = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
    let day2 = day1 + Duration::days(2);
    for (matric, ts) in [
        ("CS/2021/001", day1),
        ("CS/2021/001", day2),
        ("CS/2021/002", day2),
    ] {
        RecordActive {
            id: NotSet,
            student_matric_no: Set(matric.to_owned()),
            course_code: Set("CS301".to_owned()),
            timestamp: Set(ts),
        }
        .insert(db)
        .await
        .unwrap();
    }
}

#[tokio::test]
async fn reports_require_authentication() {
    let (app, _state) = make_test_app().await;

    let res = app
        .clone()
        .oneshot(get("/api/reports/summary?course_code=CS301", None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app
        .oneshot(get("/api/reports/daily?course_code=CS301", None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_course_code_is_a_bad_request() {
    let (app, _state) = make_test_app().await;
    let auth = bearer_token();

    let res = app
        .clone()
        .oneshot(get("/api/reports/summary", Some(&auth)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .oneshot(get("/api/reports/daily", Some(&auth)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_json(res).await;
    assert!(body["message"].as_str().unwrap().contains("course_code"));
}

#[tokio::test]
async fn unknown_course_is_not_found() {
    let (app, _state) = make_test_app().await;
    let auth = bearer_token();

    let res = app
        .oneshot(get("/api/reports/summary?course_code=CS999", Some(&auth)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn summary_report_shape_and_math() {
    let (app, state) = make_test_app().await;
    seed_two_lecture_days(&state).await;
    let auth = bearer_token();

    let res = app
        .oneshot(get("/api/reports/summary?course_code=CS301", Some(&auth)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_json(res).await;
    let data = &body["data"];
    assert_eq!(data["course_title"], "Algorithms");
    assert_eq!(data["total_lecture_days"], 2);

    let rows = data["report"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // Ordered by full name: Ada first.
    assert_eq!(rows[0]["full_name"], "Ada Lovelace");
    assert_eq!(rows[0]["attended_days"], 2);
    assert_eq!(rows[0]["percentage"], 100.0);
    assert_eq!(rows[1]["full_name"], "Charles Babbage");
    assert_eq!(rows[1]["attended_days"], 1);
    assert_eq!(rows[1]["percentage"], 50.0);
}

#[tokio::test]
async fn summary_report_for_course_without_records_is_empty() {
    let (app, state) = make_test_app().await;
    Course::create(state.db(), "CS404", "Untaught", None)
        .await
        .unwrap();
    let auth = bearer_token();

    let res = app
        .oneshot(get("/api/reports/summary?course_code=CS404", Some(&auth)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_json(res).await;
    assert_eq!(body["data"]["total_lecture_days"], 0);
    assert!(body["data"]["report"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn daily_report_lists_days_most_recent_first() {
    let (app, state) = make_test_app().await;
    seed_two_lecture_days(&state).await;
    let auth = bearer_token();

    let res = app
        .oneshot(get("/api/reports/daily?course_code=CS301", Some(&auth)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_json(res).await;
    let days = body["data"]["daily_breakdown"].as_array().unwrap();
    assert_eq!(days.len(), 2);

    assert_eq!(days[0]["date"], "Wednesday, 04 March 2026");
    let latest: Vec<&str> = days[0]["attendees"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["full_name"].as_str().unwrap())
        .collect();
    assert_eq!(latest, vec!["Ada Lovelace", "Charles Babbage"]);

    assert_eq!(days[1]["date"], "Monday, 02 March 2026");
    assert_eq!(days[1]["attendees"].as_array().unwrap().len(), 1);
}
