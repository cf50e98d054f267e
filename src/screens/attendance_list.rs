//! Student's attendance list.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{error, info};

use super::{ListState, TaskScope};
use crate::client::SchedulingApi;
use crate::error::Result;
use crate::models::AttendanceRecord;

/// Shown when there is nothing to list.
pub const EMPTY_MESSAGE: &str = "No attendance records found.";

/// Fetch result tagged with the request that produced it.
struct Fetched {
    generation: u64,
    result: Result<Vec<AttendanceRecord>>,
}

pub struct AttendanceListScreen {
    state: ListState<AttendanceRecord>,
    fetched_at: Option<DateTime<Local>>,
    generation: u64,

    api: Arc<dyn SchedulingApi>,
    scope: TaskScope,
    tx: mpsc::UnboundedSender<Fetched>,
    rx: mpsc::UnboundedReceiver<Fetched>,
}

impl AttendanceListScreen {
    /// Mount the screen and fetch once.
    pub fn new(api: Arc<dyn SchedulingApi>, rt: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut screen = Self {
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

    /// Re-issue the fetch, dropping any one still in flight.
    pub fn refresh(&mut self) {
        self.scope.cancel_pending();
        self.generation += 1;
        self.state = ListState::Loading;

        let generation = self.generation;
        let api = self.api.clone();
        let tx = self.tx.clone();
        self.scope.spawn(async move {
            let result = api.fetch_attendance().await;
            let _ = tx.send(Fetched { generation, result });
        });
    }

    /// Apply finished fetches. Returns `true` if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(fetched) = self.rx.try_recv() {
            if fetched.generation != self.generation {
                continue;
            }
            match fetched.result {
                Ok(records) => {
                    info!("Loaded {} attendance records", records.len());
                    self.state = ListState::Loaded(records);
                    self.fetched_at = Some(Local::now());
                }
                Err(e) => {
                    error!("Error fetching attendance records: {e}");
                    self.state = ListState::Failed(e.to_string());
                }
            }
            changed = true;
        }
        changed
    }

    pub fn state(&self) -> &ListState<AttendanceRecord> {
        &self.state
    }

    /// `date: status` lines in display order.
    pub fn lines(&self) -> Vec<String> {
        self.state.items().iter().map(AttendanceRecord::label).collect()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Local>> {
        self.fetched_at
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::screens::test_support::{Call, FakeApi, Reply, settle};

    #[tokio::test]
    async fn test_fetches_once_on_mount() {
        let api = FakeApi::new().with_attendance(&[("2025-03-01", "present"), ("2025-03-02", "absent")]);
        let mut screen = AttendanceListScreen::new(api.clone(), Handle::current());

        settle(|| screen.poll()).await;

        assert_eq!(api.calls(), vec![Call::Attendance]);
        assert_eq!(screen.lines(), vec!["2025-03-01: present", "2025-03-02: absent"]);
    }

    #[tokio::test]
    async fn test_empty_list() {
        let api = FakeApi::new();
        let mut screen = AttendanceListScreen::new(api.clone(), Handle::current());

        settle(|| screen.poll()).await;

        assert!(screen.lines().is_empty());
        assert!(screen.state().error().is_none());
    }

    #[tokio::test]
    async fn test_failure_keeps_list_empty_with_error() {
        let api = FakeApi::new().failing_lists(Reply::Rejected(404, None));
        let mut screen = AttendanceListScreen::new(api.clone(), Handle::current());

        settle(|| screen.poll()).await;

        assert!(screen.lines().is_empty());
        assert!(screen.state().error().unwrap().contains("404"));
    }

    #[tokio::test]
    async fn test_refresh_fetches_again() {
        let api = FakeApi::new().with_attendance(&[("2025-03-01", "present")]);
        let mut screen = AttendanceListScreen::new(api.clone(), Handle::current());
        settle(|| screen.poll()).await;

        screen.refresh();
        assert!(screen.state().is_loading());
        settle(|| screen.poll()).await;

        assert_eq!(api.calls(), vec![Call::Attendance, Call::Attendance]);
    }

    #[tokio::test]
    async fn test_refresh_ignores_result_already_queued() {
        let api = FakeApi::new().with_attendance(&[("2025-03-01", "present")]);
        let mut screen = AttendanceListScreen::new(api.clone(), Handle::current());
        tokio::time::sleep(Duration::from_millis(20)).await;

        screen.refresh();

        assert!(!screen.poll());
        assert!(screen.state().is_loading());
        assert!(screen.fetched_at().is_none());
        settle(|| screen.poll()).await;

        assert_eq!(api.calls(), vec![Call::Attendance, Call::Attendance]);
    }
}
