use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

use crate::error::DeckError;
use crate::model::{store, TaskRecord, TaskStore};
use crate::tui::event::{EventName, UiEvent};

use super::provider::Controller;

/// How a "runaction" event resolves against the target record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunRoute {
    Start,
    Stop,
}

/// Resolve the shared "runaction" event name to a run or a stop call from
/// the record's current state.
pub fn route_runaction(record: &TaskRecord) -> Result<RunRoute> {
    if record.stoppable {
        Ok(RunRoute::Stop)
    } else if record.runnable {
        Ok(RunRoute::Start)
    } else {
        Err(DeckError::StateConflict {
            task: record.name.clone(),
            state: format!("{:?}", record.state).to_lowercase(),
            message: "task is neither runnable nor stoppable".to_string(),
        }
        .into())
    }
}

/// Store-backed controller: the "backend" side of the console. Owns all
/// record mutation; the console only sees the projections it loads here.
pub struct LocalController {
    deck_dir: PathBuf,
}

impl LocalController {
    pub fn new() -> Result<Self> {
        Ok(Self {
            deck_dir: store::deck_dir()?,
        })
    }

    fn load_store(&self) -> Result<TaskStore> {
        let mut store = TaskStore::load(&self.deck_dir)?;
        if store.reconcile(Utc::now()) {
            store.save(&self.deck_dir)?;
        }
        Ok(store)
    }
}

impl Controller for LocalController {
    fn load_tasks(&self) -> Result<Vec<TaskRecord>> {
        Ok(self.load_store()?.tasks)
    }

    fn submit(&self, event: &UiEvent) -> Result<()> {
        let mut store = self.load_store()?;

        match event.event {
            EventName::Delete => {
                if store.remove(event.task_id).is_none() {
                    return Err(DeckError::NotFound {
                        message: format!("No task with id {}", event.task_id),
                    }
                    .into());
                }
            }
            EventName::RunAction => {
                let Some(record) = store.get_mut(event.task_id) else {
                    return Err(DeckError::NotFound {
                        message: format!("No task with id {}", event.task_id),
                    }
                    .into());
                };
                match route_runaction(record)? {
                    RunRoute::Start => record.start(Utc::now()),
                    RunRoute::Stop => record.stop(Utc::now()),
                }
            }
        }

        store.save(&self.deck_dir)
    }
}
