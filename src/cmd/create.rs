use anyhow::Result;
use chrono::Utc;

use crate::error::DeckError;
use crate::model::{store, TaskStore};

pub fn run(name: &str, kind: &str, duration: u64, schedule: Option<&str>) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DeckError::Validation {
            message: "Task name must not be empty".to_string(),
        }
        .into());
    }
    if duration == 0 {
        return Err(DeckError::Validation {
            message: "Duration must be at least 1 second".to_string(),
        }
        .into());
    }

    let dir = store::deck_dir()?;
    let mut store = TaskStore::load(&dir)?;
    store.reconcile(Utc::now());

    let id = store.add(name.to_string(), kind.to_string(), duration);
    if let Some(schedule) = schedule {
        if let Some(record) = store.get_mut(id) {
            record.schedule = Some(schedule.to_string());
        }
    }
    store.save(&dir)?;

    println!("Created task {id}: {name}");
    Ok(())
}
