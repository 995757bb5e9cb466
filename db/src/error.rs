//! Error taxonomy for the attendance core.
//!
//! Every failure a scan or report can produce is an expected, recoverable
//! outcome surfaced to the caller with a human-readable message; `Db` is the
//! catch-all for storage failures and is the only variant logged as an error
//! at the operation boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("QR data and course code are required.")]
    MissingField,

    #[error("Invalid QR Code. Please scan a valid student ID QR Code.")]
    InvalidPayload,

    #[error("Student Not Found. No student with matric number '{0}' exists.")]
    StudentNotFound(String),

    #[error("Course with code '{0}' not found.")]
    CourseNotFound(String),

    #[error("Already Scanned. {full_name} has already been marked present for this class.")]
    DuplicateScan { full_name: String },

    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

impl AttendanceError {
    /// Whether this is a routine, expected outcome (bad input, not found,
    /// repeat scan) as opposed to an infrastructure failure.
    pub fn is_routine(&self) -> bool {
        !matches!(self, AttendanceError::Db(_))
    }
}
