use crate::model::TaskRecord;

/// State for the master task list. Owns the selection: zero or one record
/// is focused at any time.
#[derive(Debug, Clone)]
pub struct TaskListState {
    pub tasks: Vec<TaskRecord>,
    pub selected: Option<usize>,
}

impl TaskListState {
    pub fn new(tasks: Vec<TaskRecord>) -> Self {
        Self {
            tasks,
            selected: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn select_next(&self) -> Self {
        let selected = match self.selected {
            _ if self.tasks.is_empty() => None,
            None => Some(0),
            Some(i) if i >= self.tasks.len() - 1 => Some(i),
            Some(i) => Some(i + 1),
        };
        Self {
            tasks: self.tasks.clone(),
            selected,
        }
    }

    pub fn select_prev(&self) -> Self {
        let selected = match self.selected {
            _ if self.tasks.is_empty() => None,
            None => Some(0),
            Some(0) => Some(0),
            Some(i) => Some(i - 1),
        };
        Self {
            tasks: self.tasks.clone(),
            selected,
        }
    }

    pub fn deselect(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
            selected: None,
        }
    }

    pub fn selected_task(&self) -> Option<&TaskRecord> {
        self.tasks.get(self.selected?)
    }

    /// Replace the list wholesale, reconciling the selection by record id.
    /// A selected record that vanished from the new list collapses the
    /// selection to none rather than carrying a stale index.
    pub fn update_tasks(&self, tasks: Vec<TaskRecord>) -> Self {
        let selected = self
            .selected_task()
            .and_then(|current| tasks.iter().position(|t| t.id == current.id));
        Self { tasks, selected }
    }
}
