use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::TaskRecord;

const STORE_FILE: &str = "tasks.json";
const DECK_DIR: &str = ".taskdeck";

/// Persistent set of task records, stored at .taskdeck/tasks.json.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskStore {
    /// Next id to assign
    #[serde(default)]
    pub next_id: u64,

    /// All known tasks, ordered by creation
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

/// Resolve the store directory under the current working directory.
pub fn deck_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    Ok(cwd.join(DECK_DIR))
}

impl TaskStore {
    /// Load the store from <deck_dir>/tasks.json, defaulting to empty.
    pub fn load<P: AsRef<Path>>(deck_dir: P) -> Result<Self> {
        let path = deck_dir.as_ref().join(STORE_FILE);
        Self::load_from(&path)
    }

    /// Load the store from a specific path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read store: {}", path.display()))?;
        serde_json::from_str(&content).context("Failed to parse store JSON")
    }

    /// Save the store with an atomic write under an exclusive lock.
    pub fn save<P: AsRef<Path>>(&self, deck_dir: P) -> Result<()> {
        let deck_dir = deck_dir.as_ref();
        fs::create_dir_all(deck_dir)
            .with_context(|| format!("Failed to create: {}", deck_dir.display()))?;
        let path = deck_dir.join(STORE_FILE);
        self.save_to(&path)
    }

    /// Save to a specific path with atomic write
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).context("Failed to serialize store")?;

        let lock_path = path.with_extension("json.lock");
        let lock = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file: {}", lock_path.display()))?;
        lock.lock_exclusive()?;

        // Atomic write: write to tmp file, then rename
        let tmp_path = path.with_extension("json.tmp");
        let result = fs::write(&tmp_path, &content)
            .with_context(|| format!("Failed to write temp file: {}", tmp_path.display()))
            .and_then(|_| {
                fs::rename(&tmp_path, path)
                    .with_context(|| format!("Failed to rename to: {}", path.display()))
            });

        fs2::FileExt::unlock(&lock)?;
        result
    }

    pub fn get(&self, id: u64) -> Option<&TaskRecord> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut TaskRecord> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Create a task and return its id
    pub fn add(&mut self, name: String, kind: String, duration_secs: u64) -> u64 {
        self.next_id += 1;
        let record = TaskRecord::new(self.next_id, name, kind, duration_secs);
        self.tasks.push(record);
        self.next_id
    }

    /// Remove a task by id
    pub fn remove(&mut self, id: u64) -> Option<TaskRecord> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    /// Fold elapsed runs to completion and refresh eligibility signals.
    /// Returns true if any record changed, so callers know to persist.
    pub fn reconcile(&mut self, now: DateTime<Utc>) -> bool {
        let mut changed = false;
        for task in &mut self.tasks {
            if task.fold_completion(now) {
                changed = true;
            }
            task.refresh_eligibility();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RunState;
    use chrono::Duration;

    fn store_with(names: &[&str]) -> TaskStore {
        let mut store = TaskStore::default();
        for name in names {
            store.add(name.to_string(), "script".to_string(), 30);
        }
        store
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let store = store_with(&["a", "b", "c"]);
        let ids: Vec<u64> = store.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.next_id, 3);
    }

    #[test]
    fn test_get_and_remove() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(store.get(2).unwrap().name, "b");
        assert!(store.get(99).is_none());

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.name, "a");
        assert!(store.get(1).is_none());
        assert!(store.remove(1).is_none());

        // Ids are not reused after removal
        store.add("c".to_string(), "script".to_string(), 30);
        assert_eq!(store.get(3).unwrap().name, "c");
    }

    #[test]
    fn test_reconcile_folds_elapsed_runs() {
        let mut store = store_with(&["a", "b"]);
        let started = Utc::now();
        store.get_mut(1).unwrap().start(started);

        // Mid-run: nothing to fold
        assert!(!store.reconcile(started + Duration::seconds(5)));
        assert_eq!(store.get(1).unwrap().state, RunState::Running);

        // Past the duration: folded to done
        assert!(store.reconcile(started + Duration::seconds(60)));
        assert_eq!(store.get(1).unwrap().state, RunState::Done);
        assert!(store.get(1).unwrap().runnable);
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = store_with(&["a"]);
        store.get_mut(1).unwrap().start(Utc::now());

        let json = serde_json::to_string(&store).unwrap();
        let loaded: TaskStore = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.next_id, 1);
        assert_eq!(loaded.tasks, store.tasks);
    }
}
