//! Scriptable in-memory backend for screen tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::client::SchedulingApi;
use crate::error::{AppError, Result};
use crate::models::{AppointmentRecord, AppointmentRequest, AttendanceRecord, RecordId};

/// Canned backend answer.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Ok,
    Rejected(u16, Option<String>),
    Transport,
}

impl Reply {
    async fn into_error(self) -> Option<AppError> {
        match self {
            Reply::Ok => None,
            Reply::Rejected(status, message) => Some(AppError::rejected(status, message)),
            Reply::Transport => Some(transport_error().await),
        }
    }
}

/// A real `reqwest` failure that never touches the network.
pub(crate) async fn transport_error() -> AppError {
    let err = reqwest::Client::new()
        .get("not a url")
        .send()
        .await
        .expect_err("invalid URL must fail");
    AppError::Http(err)
}

/// Request observed by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Appointments(String),
    Submit(AppointmentRequest),
    Attendance,
}

#[derive(Default)]
pub(crate) struct FakeApi {
    calls: Mutex<Vec<Call>>,
    submit_script: Mutex<VecDeque<(Reply, Duration)>>,
    appointments: Mutex<Vec<AppointmentRecord>>,
    attendance: Mutex<Vec<AttendanceRecord>>,
    list_reply: Mutex<Option<Reply>>,
    list_delay: Mutex<Duration>,
}

impl FakeApi {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn with_appointments(self: Arc<Self>, rows: &[(i64, &str)]) -> Arc<Self> {
        *self.appointments.lock().unwrap() = rows
            .iter()
            .map(|(id, details)| AppointmentRecord {
                id: RecordId::Number(*id),
                details: details.to_string(),
            })
            .collect();
        self
    }

    pub(crate) fn with_attendance(self: Arc<Self>, rows: &[(&str, &str)]) -> Arc<Self> {
        *self.attendance.lock().unwrap() = rows
            .iter()
            .map(|(date, status)| AttendanceRecord {
                date: date.to_string(),
                status: status.to_string(),
            })
            .collect();
        self
    }

    /// Make list fetches fail with the given reply.
    pub(crate) fn failing_lists(self: Arc<Self>, reply: Reply) -> Arc<Self> {
        *self.list_reply.lock().unwrap() = Some(reply);
        self
    }

    pub(crate) fn slow_lists(self: Arc<Self>, delay: Duration) -> Arc<Self> {
        *self.list_delay.lock().unwrap() = delay;
        self
    }

    /// Queue the answer for the next submission. Unscripted submissions succeed.
    pub(crate) fn script_submit(&self, reply: Reply, delay: Duration) {
        self.submit_script.lock().unwrap().push_back((reply, delay));
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn submitted(&self) -> Vec<AppointmentRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Submit(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn list_outcome(&self) -> Option<AppError> {
        let delay = *self.list_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let reply = self.list_reply.lock().unwrap().clone();
        match reply {
            Some(reply) => reply.into_error().await,
            None => None,
        }
    }
}

#[async_trait]
impl SchedulingApi for FakeApi {
    async fn fetch_appointments(&self, instructor_email: &str) -> Result<Vec<AppointmentRecord>> {
        self.record(Call::Appointments(instructor_email.to_string()));
        match self.list_outcome().await {
            Some(err) => Err(err),
            None => Ok(self.appointments.lock().unwrap().clone()),
        }
    }

    async fn submit_appointment(&self, request: &AppointmentRequest) -> Result<()> {
        self.record(Call::Submit(request.clone()));
        let (reply, delay) = self
            .submit_script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((Reply::Ok, Duration::ZERO));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        match reply.into_error().await {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn fetch_attendance(&self) -> Result<Vec<AttendanceRecord>> {
        self.record(Call::Attendance);
        match self.list_outcome().await {
            Some(err) => Err(err),
            None => Ok(self.attendance.lock().unwrap().clone()),
        }
    }
}

/// Poll a screen until it reports a change, sleeping between frames.
pub(crate) async fn settle(mut poll: impl FnMut() -> bool) {
    for _ in 0..200 {
        if poll() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("screen never received a result");
}
