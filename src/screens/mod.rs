//! Per-screen state, independent of rendering.
//!
//! Each screen owns its fields, a result channel polled once per frame, and a
//! [`TaskScope`] whose tasks are cancelled when the screen is dropped.

pub mod appointment_form;
pub mod appointment_list;
pub mod attendance_list;
pub mod profile;

#[cfg(test)]
pub(crate) mod test_support;

use std::future::Future;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

pub use appointment_form::AppointmentForm;
pub use appointment_list::AppointmentListScreen;
pub use attendance_list::AttendanceListScreen;
pub use profile::{ProfileEvent, ProfileScreen};

/// Background tasks tied to a screen's lifetime.
pub struct TaskScope {
    rt: Handle,
    cancel: CancellationToken,
}

impl TaskScope {
    pub fn new(rt: Handle) -> Self {
        Self {
            rt,
            cancel: CancellationToken::new(),
        }
    }

    /// Spawn a task that is dropped mid-flight if the scope is cancelled.
    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let cancel = self.cancel.clone();
        self.rt.spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("screen task cancelled");
                }
                _ = task => {}
            }
        });
    }

    /// Cancel everything spawned so far; later spawns are unaffected.
    pub fn cancel_pending(&mut self) {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Load state of a fetched list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState<T> {
    /// Nothing requested yet, or the request was skipped.
    #[default]
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> ListState<T> {
    /// Rows to render; empty unless loaded.
    pub fn items(&self) -> &[T] {
        match self {
            ListState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ListState::Failed(e) => Some(e),
            _ => None,
        }
    }
}
