//! Appointment DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status value sent with every new appointment request.
pub const STATUS_PLACEHOLDER: &str = "";

/// DTO for `POST /setAppointment`.
///
/// All fields are free text and are submitted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    #[serde(rename = "student")]
    pub student_name: String,
    #[serde(rename = "email")]
    pub instructor_email: String,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub status: String,
}

/// Body returned by `POST /setAppointment`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitReply {
    #[serde(default)]
    pub message: Option<Value>,
}

impl SubmitReply {
    /// Message as display text. Empty, zero, `false` and non-scalar values count as absent.
    pub fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

/// Server-assigned appointment identifier, numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Appointment row from `GET /appointments?email=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id: RecordId,
    pub details: String,
}
