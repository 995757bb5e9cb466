use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use util::state::AppState;

use crate::response::ApiResponse;
use db::models::course::Model as Course;

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub course_code: String,
    pub course_title: String,
    /// Lecturer display name, or "N/A" when no lecturer is assigned.
    pub lecturer_name: String,
}

/// GET `/api/courses`
///
/// List all courses ordered by course code, with the assigned lecturer's
/// name resolved for the scanning client's course picker.
///
/// **Auth**: any authenticated caller.
pub async fn list_courses(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<Vec<CourseResponse>>>) {
    let db = state.db();

    match Course::all_with_lecturer(db).await {
        Ok(rows) => {
            let courses = rows
                .into_iter()
                .map(|(course, lecturer)| CourseResponse {
                    course_code: course.course_code,
                    course_title: course.course_title,
                    lecturer_name: lecturer
                        .map(|l| l.full_name)
                        .unwrap_or_else(|| "N/A".to_string()),
                })
                .collect();

            (
                StatusCode::OK,
                Json(ApiResponse::success(courses, "Courses retrieved")),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list courses");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("An unexpected server error occurred.")),
            )
        }
    }
}
