use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

use crate::error::DeckError;
use crate::model::{store, RunState, TaskStore};

fn load() -> Result<(PathBuf, TaskStore)> {
    let dir = store::deck_dir()?;
    let mut store = TaskStore::load(&dir)?;
    if store.reconcile(Utc::now()) {
        store.save(&dir)?;
    }
    Ok((dir, store))
}

fn not_found(id: u64) -> DeckError {
    DeckError::NotFound {
        message: format!("No task with id {id}"),
    }
}

pub fn run(id: u64) -> Result<()> {
    let (dir, mut store) = load()?;
    let record = store.get_mut(id).ok_or_else(|| not_found(id))?;

    if !record.runnable {
        let state = match record.state {
            RunState::Running => "running",
            RunState::Broken => "broken",
            _ => "not runnable",
        };
        return Err(DeckError::StateConflict {
            task: record.name.clone(),
            state: state.to_string(),
            message: "task cannot be run right now".to_string(),
        }
        .into());
    }

    record.start(Utc::now());
    let name = record.name.clone();
    store.save(&dir)?;
    println!("Started task {id}: {name}");
    Ok(())
}

pub fn stop(id: u64) -> Result<()> {
    let (dir, mut store) = load()?;
    let record = store.get_mut(id).ok_or_else(|| not_found(id))?;

    if !record.stoppable {
        return Err(DeckError::StateConflict {
            task: record.name.clone(),
            state: "not running".to_string(),
            message: "only a running task can be stopped".to_string(),
        }
        .into());
    }

    record.stop(Utc::now());
    let name = record.name.clone();
    store.save(&dir)?;
    println!("Stopped task {id}: {name}");
    Ok(())
}

pub fn delete(id: u64) -> Result<()> {
    let (dir, mut store) = load()?;
    let removed = store.remove(id).ok_or_else(|| not_found(id))?;
    store.save(&dir)?;
    println!("Deleted task {id}: {}", removed.name);
    Ok(())
}
