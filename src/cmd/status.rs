use anyhow::Result;
use chrono::Utc;

use crate::model::{store, RunState, TaskStore};

pub fn list(json: bool) -> Result<()> {
    let dir = store::deck_dir()?;
    let mut store = TaskStore::load(&dir)?;
    if store.reconcile(Utc::now()) {
        store.save(&dir)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&store.tasks)?);
        return Ok(());
    }

    if store.tasks.is_empty() {
        println!("No tasks. Create one with 'taskdeck create <name>'.");
        return Ok(());
    }

    println!(
        "{:>4}  {:<20} {:<14} {:<8} {}",
        "ID", "NAME", "TYPE", "STATE", "LAST RESULT"
    );
    for task in &store.tasks {
        println!(
            "{:>4}  {:<20} {:<14} {:<8} {}",
            task.id,
            task.name,
            task.kind,
            state_text(task.state),
            task.last_result.as_deref().unwrap_or("--"),
        );
    }
    Ok(())
}

fn state_text(state: RunState) -> &'static str {
    match state {
        RunState::Waiting => "waiting",
        RunState::Running => "running",
        RunState::Done => "done",
        RunState::Broken => "broken",
    }
}
