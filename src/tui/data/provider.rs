use anyhow::Result;

use crate::model::TaskRecord;
use crate::tui::event::UiEvent;

/// Controller seam between the console and the backend.
///
/// The console only ever loads records through this trait and hands it
/// semantic events; it never mutates a record itself. This also allows
/// mocking for tests.
pub trait Controller: Send + Sync {
    /// Load the current set of task records
    fn load_tasks(&self) -> Result<Vec<TaskRecord>>;

    /// Execute a dispatched UI event against the backend
    fn submit(&self, event: &UiEvent) -> Result<()>;
}
