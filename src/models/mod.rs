//! Wire records and profile data shared by the dashboard screens.

pub mod appointment;
pub mod attendance;
pub mod profile;

pub use appointment::{AppointmentRecord, AppointmentRequest, RecordId, SubmitReply};
pub use attendance::AttendanceRecord;
pub use profile::{Role, UserProfile};
