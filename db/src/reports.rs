//! Read-only report aggregation over attendance history.
//!
//! A "lecture day" is a UTC calendar day with at least one attendance record
//! for the course; it is derived by grouping records, never stored. Both
//! reports are computed fresh on every call. Volumes are small (hundreds of
//! students, a handful of courses), so grouping happens in memory over the
//! course's fetched records rather than in SQL.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::error::AttendanceError;
use crate::models::{attendance_record, course, student};

#[derive(Debug, Serialize)]
pub struct StudentSummary {
    pub matric_no: String,
    pub full_name: String,
    pub attended_days: i64,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub course_title: String,
    pub total_lecture_days: i64,
    pub report: Vec<StudentSummary>,
}

#[derive(Debug, Serialize)]
pub struct Attendee {
    pub full_name: String,
    pub matric_no: String,
}

#[derive(Debug, Serialize)]
pub struct DayBreakdown {
    /// Human-readable calendar date, e.g. "Friday, 31 October 2025".
    pub date: String,
    pub attendees: Vec<Attendee>,
}

#[derive(Debug, Serialize)]
pub struct DailyReport {
    pub course_title: String,
    pub daily_breakdown: Vec<DayBreakdown>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn lecture_day(record: &attendance_record::Model) -> NaiveDate {
    record.timestamp.date_naive()
}

/// Per-student attendance percentages for a course.
///
/// Iterates the entire roster, not just students with records for this
/// course; there is no enrollment concept, so every student appears with a
/// zero row until they first scan.
pub async fn summary_report(
    db: &DatabaseConnection,
    course_code: &str,
) -> Result<SummaryReport, AttendanceError> {
    let course = course::Model::get_by_code(db, course_code)
        .await?
        .ok_or_else(|| AttendanceError::CourseNotFound(course_code.to_owned()))?;

    let records = attendance_record::Model::for_course(db, course_code).await?;
    let lecture_days: BTreeSet<NaiveDate> = records.iter().map(lecture_day).collect();
    let total_lecture_days = lecture_days.len() as i64;

    if total_lecture_days == 0 {
        return Ok(SummaryReport {
            course_title: course.course_title,
            total_lecture_days: 0,
            report: Vec::new(),
        });
    }

    let mut days_by_student: HashMap<&str, BTreeSet<NaiveDate>> = HashMap::new();
    for record in &records {
        days_by_student
            .entry(record.student_matric_no.as_str())
            .or_default()
            .insert(lecture_day(record));
    }

    // Roster comes back ordered by full name already.
    let report = student::Model::all_by_name(db)
        .await?
        .into_iter()
        .map(|s| {
            let attended_days = days_by_student
                .get(s.matric_no.as_str())
                .map_or(0, |days| days.len() as i64);
            StudentSummary {
                percentage: round2(attended_days as f64 / total_lecture_days as f64 * 100.0),
                matric_no: s.matric_no,
                full_name: s.full_name,
                attended_days,
            }
        })
        .collect();

    Ok(SummaryReport {
        course_title: course.course_title,
        total_lecture_days,
        report,
    })
}

/// Lecture days for a course, most recent first, with the attendees of each
/// day ordered by full name.
pub async fn daily_report(
    db: &DatabaseConnection,
    course_code: &str,
) -> Result<DailyReport, AttendanceError> {
    let course = course::Model::get_by_code(db, course_code)
        .await?
        .ok_or_else(|| AttendanceError::CourseNotFound(course_code.to_owned()))?;

    let records = attendance_record::Model::for_course(db, course_code).await?;

    let names_by_matric: HashMap<String, String> = student::Model::all_by_name(db)
        .await?
        .into_iter()
        .map(|s| (s.matric_no, s.full_name))
        .collect();

    let mut by_day: BTreeMap<NaiveDate, Vec<Attendee>> = BTreeMap::new();
    for record in records {
        let full_name = names_by_matric
            .get(&record.student_matric_no)
            .cloned()
            .unwrap_or_default();
        by_day.entry(lecture_day(&record)).or_default().push(Attendee {
            full_name,
            matric_no: record.student_matric_no,
        });
    }

    let daily_breakdown = by_day
        .into_iter()
        .rev()
        .map(|(day, mut attendees)| {
            attendees.sort_by(|a, b| {
                a.full_name
                    .cmp(&b.full_name)
                    .then_with(|| a.matric_no.cmp(&b.matric_no))
            });
            DayBreakdown {
                date: day.format("%A, %d %B %Y").to_string(),
                attendees,
            }
        })
        .collect();

    Ok(DailyReport {
        course_title: course.course_title,
        daily_breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance_record::{ActiveModel as RecordActive, Model as AttendanceRecord};
    use crate::models::{course::Model as Course, student::Model as Student};
    use crate::test_utils::setup_test_db;
    use chrono::{Duration, TimeZone, Utc};
    use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};

    async fn insert_record(
        db: &DatabaseConnection,
        matric_no: &str,
        course_code: &str,
        timestamp: chrono::DateTime<Utc>,
    ) {
        RecordActive {
            id: NotSet,
            student_matric_no: Set(matric_no.to_owned()),
            course_code: Set(course_code.to_owned()),
            timestamp: Set(timestamp),
        }
        .insert(db)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn summary_for_untaught_course_is_empty() {
        let db = setup_test_db().await;
        Course::create(&db, "CS301", "Algorithms", None).await.unwrap();
        Student::create(&db, "CS/2021/001", "Ada Lovelace", "Female", "CS")
            .await
            .unwrap();

        let report = summary_report(&db, "CS301").await.unwrap();
        assert_eq!(report.course_title, "Algorithms");
        assert_eq!(report.total_lecture_days, 0);
        assert!(report.report.is_empty());
    }

    #[tokio::test]
    async fn summary_counts_distinct_days_and_rounds_percentage() {
        let db = setup_test_db().await;
        Course::create(&db, "CS301", "Algorithms", None).await.unwrap();
        Student::create(&db, "CS/2021/001", "Ada Lovelace", "Female", "CS")
            .await
            .unwrap();
        Student::create(&db, "CS/2021/002", "Charles Babbage", "Male", "CS")
            .await
            .unwrap();

        let day1 = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let day2 = Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap();
        // Ada attends both days; a second same-day record must not inflate
        // her distinct-day count.
        insert_record(&db, "CS/2021/001", "CS301", day1).await;
        insert_record(&db, "CS/2021/001", "CS301", day1 + Duration::hours(3)).await;
        insert_record(&db, "CS/2021/001", "CS301", day2).await;
        insert_record(&db, "CS/2021/002", "CS301", day2).await;

        let report = summary_report(&db, "CS301").await.unwrap();
        assert_eq!(report.total_lecture_days, 2);
        assert_eq!(report.report.len(), 2);

        let ada = &report.report[0];
        assert_eq!(ada.full_name, "Ada Lovelace");
        assert_eq!(ada.attended_days, 2);
        assert_eq!(ada.percentage, 100.0);

        let charles = &report.report[1];
        assert_eq!(charles.attended_days, 1);
        assert_eq!(charles.percentage, 50.0);
    }

    #[tokio::test]
    async fn summary_includes_students_with_no_records() {
        let db = setup_test_db().await;
        Course::create(&db, "CS301", "Algorithms", None).await.unwrap();
        Student::create(&db, "CS/2021/001", "Ada Lovelace", "Female", "CS")
            .await
            .unwrap();
        Student::create(&db, "EE/2021/044", "Nikola Tesla", "Male", "EE")
            .await
            .unwrap();

        let day1 = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        insert_record(&db, "CS/2021/001", "CS301", day1).await;

        let report = summary_report(&db, "CS301").await.unwrap();
        let tesla = report
            .report
            .iter()
            .find(|r| r.matric_no == "EE/2021/044")
            .expect("full roster must appear");
        assert_eq!(tesla.attended_days, 0);
        assert_eq!(tesla.percentage, 0.0);
    }

    #[tokio::test]
    async fn summary_percentage_rounds_to_two_decimals() {
        let db = setup_test_db().await;
        Course::create(&db, "CS301", "Algorithms", None).await.unwrap();
        Student::create(&db, "CS/2021/001", "Ada Lovelace", "Female", "CS")
            .await
            .unwrap();

        let base = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        insert_record(&db, "CS/2021/001", "CS301", base).await;
        for offset in 1..3 {
            // Lecture days where Ada was absent: records from another student.
            Student::upsert(&db, "CS/2021/009", "Blank Row", "Male", "CS")
                .await
                .unwrap();
            insert_record(&db, "CS/2021/009", "CS301", base + Duration::days(offset)).await;
        }

        let report = summary_report(&db, "CS301").await.unwrap();
        assert_eq!(report.total_lecture_days, 3);
        let ada = report
            .report
            .iter()
            .find(|r| r.matric_no == "CS/2021/001")
            .unwrap();
        assert_eq!(ada.percentage, 33.33);
    }

    #[tokio::test]
    async fn daily_report_orders_days_desc_and_attendees_by_name() {
        let db = setup_test_db().await;
        Course::create(&db, "CS301", "Algorithms", None).await.unwrap();
        Student::create(&db, "CS/2021/001", "Ada Lovelace", "Female", "CS")
            .await
            .unwrap();
        Student::create(&db, "CS/2021/002", "Charles Babbage", "Male", "CS")
            .await
            .unwrap();

        let day1 = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let day2 = Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap();
        insert_record(&db, "CS/2021/002", "CS301", day1).await;
        insert_record(&db, "CS/2021/001", "CS301", day1 + Duration::minutes(5)).await;
        insert_record(&db, "CS/2021/001", "CS301", day2).await;

        let report = daily_report(&db, "CS301").await.unwrap();
        assert_eq!(report.course_title, "Algorithms");
        assert_eq!(report.daily_breakdown.len(), 2);

        // Most recent day first.
        assert_eq!(report.daily_breakdown[0].date, "Wednesday, 04 March 2026");
        assert_eq!(report.daily_breakdown[0].attendees.len(), 1);

        let earlier = &report.daily_breakdown[1];
        assert_eq!(earlier.date, "Monday, 02 March 2026");
        let names: Vec<&str> = earlier
            .attendees
            .iter()
            .map(|a| a.full_name.as_str())
            .collect();
        assert_eq!(names, vec!["Ada Lovelace", "Charles Babbage"]);
    }

    #[tokio::test]
    async fn unknown_course_is_rejected_by_both_reports() {
        let db = setup_test_db().await;

        assert!(matches!(
            summary_report(&db, "NOPE101").await.unwrap_err(),
            AttendanceError::CourseNotFound(c) if c == "NOPE101"
        ));
        assert!(matches!(
            daily_report(&db, "NOPE101").await.unwrap_err(),
            AttendanceError::CourseNotFound(c) if c == "NOPE101"
        ));
    }

    #[tokio::test]
    async fn end_to_end_scan_scenario_feeds_summary() {
        let db = setup_test_db().await;
        let ada = Student::create(&db, "CS/2021/001", "Ada Lovelace", "Female", "CS")
            .await
            .unwrap();
        Course::create(&db, "CS301", "Algorithms", None).await.unwrap();

        let t0 = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let payload = ada.qr_payload();
        AttendanceRecord::record_scan(&db, &payload, "CS301", t0)
            .await
            .unwrap();
        AttendanceRecord::record_scan(&db, &payload, "CS301", t0 + Duration::minutes(30))
            .await
            .unwrap_err();
        AttendanceRecord::record_scan(&db, &payload, "CS301", t0 + Duration::hours(3))
            .await
            .unwrap();

        // Both accepted scans fall on the same calendar day.
        let report = summary_report(&db, "CS301").await.unwrap();
        assert_eq!(report.total_lecture_days, 1);
        assert_eq!(report.report[0].attended_days, 1);
        assert_eq!(report.report[0].percentage, 100.0);
    }
}
