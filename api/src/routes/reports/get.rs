use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use util::state::AppState;

use crate::response::ApiResponse;
use db::{AttendanceError, reports};

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub course_code: Option<String>,
}

fn status_for(err: &AttendanceError) -> StatusCode {
    match err {
        AttendanceError::CourseNotFound(_) => StatusCode::NOT_FOUND,
        AttendanceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// GET `/api/reports/summary?course_code=...`
///
/// Attendance percentage for every student in the system against the
/// course's distinct lecture days. Computed fresh on every call.
///
/// **Auth**: any authenticated caller.
pub async fn summary_report(
    State(state): State<AppState>,
    Query(q): Query<ReportQuery>,
) -> (StatusCode, Json<ApiResponse<Option<reports::SummaryReport>>>) {
    let Some(course_code) = q.course_code.filter(|c| !c.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "A 'course_code' query parameter is required.",
            )),
        );
    };

    match reports::summary_report(state.db(), &course_code).await {
        Ok(report) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Some(report),
                "Summary report generated",
            )),
        ),
        Err(err) => report_error(err),
    }
}

/// GET `/api/reports/daily?course_code=...`
///
/// Distinct lecture days for a course, most recent first, each with its
/// attendee roster ordered by student name.
///
/// **Auth**: any authenticated caller.
pub async fn daily_report(
    State(state): State<AppState>,
    Query(q): Query<ReportQuery>,
) -> (StatusCode, Json<ApiResponse<Option<reports::DailyReport>>>) {
    let Some(course_code) = q.course_code.filter(|c| !c.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "A 'course_code' query parameter is required.",
            )),
        );
    };

    match reports::daily_report(state.db(), &course_code).await {
        Ok(report) => (
            StatusCode::OK,
            Json(ApiResponse::success(Some(report), "Daily report generated")),
        ),
        Err(err) => report_error(err),
    }
}

fn report_error<T: serde::Serialize>(
    err: AttendanceError,
) -> (StatusCode, Json<ApiResponse<Option<T>>>) {
    let status = status_for(&err);
    let message = if err.is_routine() {
        err.to_string()
    } else {
        tracing::error!(error = %err, "Failed to generate report");
        "An unexpected server error occurred.".to_string()
    };
    (status, Json(ApiResponse::error(message)))
}
