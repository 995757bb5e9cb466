//! Attendance records and the scan-acceptance path.
//!
//! A record is written exactly once per accepted scan and never modified
//! afterwards; the attendance history of a course is the set of its records.

use chrono::{DateTime, Duration, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set, TransactionError,
    TransactionTrait,
};

use crate::error::AttendanceError;
use crate::models::{course, student};

/// Repeat scans of the same (student, course) pair inside this sliding
/// window are rejected. Measured from "now", not aligned to calendar
/// boundaries, so separate sessions later the same day still register.
pub const DUPLICATE_SCAN_WINDOW_HOURS: i64 = 2;

pub fn duplicate_scan_window() -> Duration {
    Duration::hours(DUPLICATE_SCAN_WINDOW_HOURS)
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_matric_no: String,
    pub course_code: String,
    /// Set at creation, never updated.
    pub timestamp: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentMatricNo",
        to = "super::student::Column::MatricNo"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseCode",
        to = "super::course::Column::CourseCode"
    )]
    Course,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// What an accepted scan hands back to the caller for operator feedback.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub matric_no: String,
    pub full_name: String,
    pub record: Model,
}

impl Model {
    /// Validates a raw scan and appends an attendance record.
    ///
    /// `now` is passed in rather than read from the clock so callers and
    /// tests control the duplicate window. The window probe and the insert
    /// run in one transaction, so two scans racing on the same
    /// (student, course) pair cannot both pass the probe and both insert.
    pub async fn record_scan(
        db: &DatabaseConnection,
        qr_data: &str,
        course_code: &str,
        now: DateTime<Utc>,
    ) -> Result<ScanOutcome, AttendanceError> {
        if qr_data.trim().is_empty() || course_code.trim().is_empty() {
            return Err(AttendanceError::MissingField);
        }

        let matric_no = util::qr::parse_matric_no(qr_data)
            .ok_or(AttendanceError::InvalidPayload)?
            .to_owned();

        let student = student::Model::get_by_matric_no(db, &matric_no)
            .await?
            .ok_or_else(|| AttendanceError::StudentNotFound(matric_no.clone()))?;

        let course = course::Model::get_by_code(db, course_code)
            .await?
            .ok_or_else(|| AttendanceError::CourseNotFound(course_code.to_owned()))?;

        let outcome = db
            .transaction::<_, ScanOutcome, AttendanceError>(move |txn| {
                Box::pin(async move {
                    let cutoff = now - duplicate_scan_window();
                    let recent = Entity::find()
                        .filter(Column::StudentMatricNo.eq(student.matric_no.clone()))
                        .filter(Column::CourseCode.eq(course.course_code.clone()))
                        .filter(Column::Timestamp.gte(cutoff))
                        .one(txn)
                        .await?;

                    if recent.is_some() {
                        return Err(AttendanceError::DuplicateScan {
                            full_name: student.full_name.clone(),
                        });
                    }

                    let record = ActiveModel {
                        id: NotSet,
                        student_matric_no: Set(student.matric_no.clone()),
                        course_code: Set(course.course_code),
                        timestamp: Set(now),
                    }
                    .insert(txn)
                    .await?;

                    Ok(ScanOutcome {
                        matric_no: student.matric_no,
                        full_name: student.full_name,
                        record,
                    })
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(db_err) => AttendanceError::Db(db_err),
                TransactionError::Transaction(app_err) => app_err,
            })?;

        Ok(outcome)
    }

    /// All records for a course, oldest first. Reports group these in memory;
    /// volumes are a few hundred students over a handful of courses.
    pub async fn for_course(
        db: &DatabaseConnection,
        course_code: &str,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::CourseCode.eq(course_code))
            .order_by_asc(Column::Timestamp)
            .all(db)
            .await
    }
}
