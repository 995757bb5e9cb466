use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use util::state::AppState;

use super::common::{ScanData, ScanRequest};
use crate::response::ApiResponse;
use db::AttendanceError;
use db::models::attendance_record::Model as AttendanceRecord;

/// POST `/api/attendance/scans`
///
/// Ingest a scan event: raw decoded QR text plus the course being taught.
/// On acceptance exactly one attendance record is created; every failure
/// path leaves the store untouched.
///
/// **Auth**: any authenticated caller (the lecturer-facing scanning client).
///
/// **Status mapping**: missing field / invalid QR → 400, unknown student or
/// course → 404, repeat scan inside the 2-hour window → 409, storage
/// failure → 500.
pub async fn record_attendance(
    State(state): State<AppState>,
    Json(body): Json<ScanRequest>,
) -> (StatusCode, Json<ApiResponse<Option<ScanData>>>) {
    let db = state.db();

    let qr_data = body.qr_data.unwrap_or_default();
    let course_code = body.course_code.unwrap_or_default();

    match AttendanceRecord::record_scan(db, &qr_data, &course_code, Utc::now()).await {
        Ok(outcome) => {
            let message = format!(
                "Success! Attendance recorded for {} ({}).",
                outcome.full_name, outcome.matric_no
            );
            let data = ScanData {
                matric_no: outcome.matric_no,
                full_name: outcome.full_name,
                recorded_at: outcome.record.timestamp.to_rfc3339(),
            };
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(Some(data), message)),
            )
        }
        Err(err) => {
            let status = match &err {
                AttendanceError::MissingField | AttendanceError::InvalidPayload => {
                    StatusCode::BAD_REQUEST
                }
                AttendanceError::StudentNotFound(_) | AttendanceError::CourseNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                AttendanceError::DuplicateScan { .. } => StatusCode::CONFLICT,
                AttendanceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };

            // Routine rejections are operator feedback, not incidents.
            let message = if err.is_routine() {
                err.to_string()
            } else {
                tracing::error!(error = %err, "Failed to record attendance");
                "An unexpected server error occurred.".to_string()
            };

            (status, Json(ApiResponse::error(message)))
        }
    }
}
