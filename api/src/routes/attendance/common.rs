use serde::{Deserialize, Serialize};

/// Body of a scan event from the lecturer-facing client.
///
/// Fields are optional at the wire level so that an absent field surfaces as
/// the domain's `MissingField` error (400) rather than a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub qr_data: Option<String>,
    pub course_code: Option<String>,
}

/// Payload returned for an accepted scan.
#[derive(Debug, Serialize)]
pub struct ScanData {
    pub matric_no: String,
    pub full_name: String,
    pub recorded_at: String,
}
