//! Appointment request form.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{info, warn};

use super::TaskScope;
use crate::client::SchedulingApi;
use crate::error::Result;
use crate::models::AppointmentRequest;
use crate::models::appointment::STATUS_PLACEHOLDER;

/// Status shown after the server accepts a request.
pub const SUCCESS_MESSAGE: &str = "Your appointment has been scheduled successfully.";

/// Status shown for rejections without a message and for transport failures.
pub const FAILURE_MESSAGE: &str = "There was an error scheduling your appointment. Please try again.";

/// Map a submission result to the user-facing status text.
pub fn status_text(result: &Result<()>) -> String {
    match result {
        Ok(()) => SUCCESS_MESSAGE.to_string(),
        Err(e) => e.server_message().unwrap_or(FAILURE_MESSAGE).to_string(),
    }
}

/// Result of one submission, tagged with the submission that produced it.
struct Outcome {
    generation: u64,
    status: String,
}

/// Form state for a new appointment.
pub struct AppointmentForm {
    pub student_name: String,
    pub instructor_email: String,
    pub date: String,
    pub time: String,
    pub reason: String,

    status: String,
    generation: u64,
    in_flight: usize,

    api: Arc<dyn SchedulingApi>,
    scope: TaskScope,
    tx: mpsc::UnboundedSender<Outcome>,
    rx: mpsc::UnboundedReceiver<Outcome>,
}

impl AppointmentForm {
    pub fn new(api: Arc<dyn SchedulingApi>, rt: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            student_name: String::new(),
            instructor_email: String::new(),
            date: String::new(),
            time: String::new(),
            reason: String::new(),
            status: String::new(),
            generation: 0,
            in_flight: 0,
            api,
            scope: TaskScope::new(rt),
            tx,
            rx,
        }
    }

    /// Snapshot the fields as a wire request.
    pub fn request(&self) -> AppointmentRequest {
        AppointmentRequest {
            student_name: self.student_name.clone(),
            instructor_email: self.instructor_email.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            reason: self.reason.clone(),
            status: STATUS_PLACEHOLDER.to_string(),
        }
    }

    /// Send the current fields. The status text is left untouched until the
    /// response arrives.
    pub fn submit(&mut self) {
        self.generation += 1;
        self.in_flight += 1;

        let generation = self.generation;
        let request = self.request();
        let api = self.api.clone();
        let tx = self.tx.clone();

        info!("Submitting appointment request for {}", request.instructor_email);

        self.scope.spawn(async move {
            let result = api.submit_appointment(&request).await;
            match &result {
                Ok(()) => info!("Appointment scheduled"),
                Err(e) => warn!("Appointment submission failed: {e}"),
            }
            let _ = tx.send(Outcome {
                generation,
                status: status_text(&result),
            });
        });
    }

    /// Apply finished submissions. Returns `true` if the status changed.
    ///
    /// Results from superseded submissions are dropped.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            if outcome.generation == self.generation {
                self.status = outcome.status;
                changed = true;
            }
        }
        changed
    }

    /// Latest outcome text; empty before the first response.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight > 0
    }
}
