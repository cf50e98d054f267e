//! Attendance DTOs.

use serde::{Deserialize, Serialize};

/// Attendance row from the attendance endpoint.
///
/// Both fields are kept as the server's text; the endpoint contract is provisional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: String,
    pub status: String,
}

impl AttendanceRecord {
    /// Single-line label, `date: status`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.date, self.status)
    }
}
