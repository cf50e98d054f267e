//! Instructor's appointment list, filtered by instructor email.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use super::{ListState, TaskScope};
use crate::client::SchedulingApi;
use crate::error::{AppError, Result};
use crate::models::AppointmentRecord;

/// Fetch result tagged with the request that produced it.
struct Fetched {
    generation: u64,
    email: String,
    result: Result<Vec<AppointmentRecord>>,
}

pub struct AppointmentListScreen {
    email: Option<String>,
    /// Text field for switching the filter.
    pub email_input: String,
    state: ListState<AppointmentRecord>,
    fetched_at: Option<DateTime<Local>>,
    generation: u64,

    api: Arc<dyn SchedulingApi>,
    scope: TaskScope,
    tx: mpsc::UnboundedSender<Fetched>,
    rx: mpsc::UnboundedReceiver<Fetched>,
}

impl AppointmentListScreen {
    /// Mount the screen and start the first fetch.
    pub fn new(api: Arc<dyn SchedulingApi>, rt: Handle, email: Option<String>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let email = normalize(email);
        let mut screen = Self {
            email_input: email.clone().unwrap_or_default(),
            email,
            state: ListState::Idle,
            fetched_at: None,
            generation: 0,
            api,
            scope: TaskScope::new(rt),
            tx,
            rx,
        };
        screen.refresh();
        screen
    }

    /// Change the filter key. Re-fetches only if it actually changed.
    pub fn set_email(&mut self, email: Option<String>) {
        let email = normalize(email);
        if email == self.email {
            return;
        }

        self.scope.cancel_pending();
        self.generation += 1;
        self.email = email;
        self.state = ListState::Idle;
        self.fetched_at = None;
        self.refresh();
    }

    /// Apply the text field as the new filter.
    pub fn apply_email_input(&mut self) {
        self.set_email(Some(self.email_input.clone()));
    }

    /// Issue the fetch for the current email; skipped when there is none.
    pub fn refresh(&mut self) {
        let Some(email) = self.email.clone() else {
            error!("{}", AppError::MissingFilter("instructor email"));
            return;
        };

        self.generation += 1;
        self.state = ListState::Loading;
        let generation = self.generation;
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.scope.spawn(async move {
            let result = api.fetch_appointments(&email).await;
            let _ = tx.send(Fetched {
                generation,
                email,
                result,
            });
        });
    }

    /// Apply finished fetches. Returns `true` if the state changed.
    ///
    /// Only the most recent request may update the list.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(fetched) = self.rx.try_recv() {
            if fetched.generation != self.generation {
                debug!("Dropping superseded appointments for {}", fetched.email);
                continue;
            }
            match fetched.result {
                Ok(rows) => {
                    info!("Loaded {} appointments for {}", rows.len(), fetched.email);
                    self.state = ListState::Loaded(rows);
                    self.fetched_at = Some(Local::now());
                }
                Err(e) => {
                    error!("Error fetching appointments: {e}");
                    self.state = ListState::Failed(e.to_string());
                }
            }
            changed = true;
        }
        changed
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn state(&self) -> &ListState<AppointmentRecord> {
        &self.state
    }

    /// Row texts in display order.
    pub fn rows(&self) -> Vec<&str> {
        self.state.items().iter().map(|r| r.details.as_str()).collect()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Local>> {
        self.fetched_at
    }
}

fn normalize(email: Option<String>) -> Option<String> {
    email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty())
}
