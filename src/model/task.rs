use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    #[default]
    Waiting,
    Running,
    Done,
    Broken,
}

/// One schedulable unit of work known to the backend.
///
/// The console holds a read-only, possibly stale projection of these records;
/// every mutation goes through the controller and comes back via a reload.
/// `runnable`/`stoppable` are eligibility signals recomputed by the backend
/// side on every load, never by the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: u64,

    /// Display name
    pub name: String,

    /// Task type (e.g. "script", "rebuild-index")
    pub kind: String,

    /// Current run-state
    #[serde(default)]
    pub state: RunState,

    /// Recurrence schedule; None means one-shot
    #[serde(default)]
    pub schedule: Option<String>,

    /// Simulated run length in seconds
    #[serde(default)]
    pub duration_secs: u64,

    /// When the current run started (only while running)
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,

    /// When the task last finished a run
    #[serde(default)]
    pub last_run: Option<DateTime<Utc>>,

    /// Result of the last run ("ok", "canceled", ...)
    #[serde(default)]
    pub last_result: Option<String>,

    /// Eligible to be run right now
    #[serde(default)]
    pub runnable: bool,

    /// Eligible to be stopped right now
    #[serde(default)]
    pub stoppable: bool,
}

impl TaskRecord {
    pub fn new(id: u64, name: String, kind: String, duration_secs: u64) -> Self {
        let mut record = Self {
            id,
            name,
            kind,
            state: RunState::Waiting,
            schedule: None,
            duration_secs,
            started_at: None,
            last_run: None,
            last_result: None,
            runnable: false,
            stoppable: false,
        };
        record.refresh_eligibility();
        record
    }

    /// Recompute `runnable`/`stoppable` from the current run-state.
    /// Broken tasks cannot be run until repaired.
    pub fn refresh_eligibility(&mut self) {
        self.runnable = matches!(self.state, RunState::Waiting | RunState::Done);
        self.stoppable = self.state == RunState::Running;
    }

    /// Begin a run at `now`.
    pub fn start(&mut self, now: DateTime<Utc>) {
        self.state = RunState::Running;
        self.started_at = Some(now);
        self.refresh_eligibility();
    }

    /// Cancel the current run. The task returns to waiting.
    pub fn stop(&mut self, now: DateTime<Utc>) {
        self.state = RunState::Waiting;
        self.last_run = Some(now);
        self.last_result = Some("canceled".to_string());
        self.started_at = None;
        self.refresh_eligibility();
    }

    /// Fold a finished run into the record. Recurring tasks return to
    /// waiting; one-shot tasks are done.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.state = if self.schedule.is_some() {
            RunState::Waiting
        } else {
            RunState::Done
        };
        self.last_run = Some(now);
        self.last_result = Some("ok".to_string());
        self.started_at = None;
        self.refresh_eligibility();
    }

    /// A running task whose duration has elapsed is considered finished.
    /// Returns true if the record changed.
    pub fn fold_completion(&mut self, now: DateTime<Utc>) -> bool {
        let Some(started) = self.started_at else {
            return false;
        };
        if self.state != RunState::Running {
            return false;
        }
        let deadline = started + Duration::seconds(self.duration_secs as i64);
        if now < deadline {
            return false;
        }
        self.complete(deadline);
        true
    }
}
