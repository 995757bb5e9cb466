//! QR payload text handling.
//!
//! Student ID cards carry a QR code whose decoded text embeds the student's
//! matric number. This module owns both directions of that text format: the
//! canonical payload produced for a newly provisioned student, and the
//! extraction of a matric number from whatever a scanner hands us. No
//! database access happens here.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches "Matric No:" followed by optional whitespace and captures the next
/// run of non-whitespace characters.
static MATRIC_NO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Matric No:\s*(\S+)").expect("invalid matric number regex"));

/// Extracts the matric number from decoded QR text.
///
/// Returns `None` when the payload does not contain the expected
/// `Matric No: <token>` pattern, in which case the scan must be rejected
/// before any store lookup.
pub fn parse_matric_no(payload: &str) -> Option<&str> {
    MATRIC_NO_RE
        .captures(payload)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Canonical payload text encoded into a student's QR code.
///
/// The image rendering itself is handled by a separate workflow; every
/// producer and consumer of the payload text agrees on this format.
pub fn student_payload(matric_no: &str, full_name: &str, gender: &str) -> String {
    format!("Matric No: {matric_no}\nName: {full_name}\nGender: {gender}")
}
