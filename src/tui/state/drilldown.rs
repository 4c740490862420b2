use crate::model::TaskRecord;
use crate::tui::event::{ActionId, UiEvent};

use super::{action_bar, ActionDescriptor, TaskListState};

/// Declarative configuration for one detail tab
#[derive(Debug, Clone, Copy)]
pub struct DetailTab {
    pub title_key: &'static str,
}

fn detail_tabs() -> Vec<DetailTab> {
    vec![DetailTab {
        title_key: "tasks.summary.title",
    }]
}

/// Master/detail composition: the master list, the detail region shown
/// while a selection exists, and the static tab and action descriptors.
///
/// Composed by reference: the container holds the list state and the
/// descriptors and derives everything else (detail visibility, action
/// enablement) from the current selection on demand. It never calls the
/// backend; activation produces a `UiEvent` for the controller instead.
#[derive(Debug, Clone)]
pub struct DrilldownState {
    pub master: TaskListState,
    tabs: Vec<DetailTab>,
    actions: Vec<ActionDescriptor>,
}

impl DrilldownState {
    pub fn new() -> Self {
        Self {
            master: TaskListState::empty(),
            tabs: detail_tabs(),
            actions: action_bar(),
        }
    }

    pub fn tabs(&self) -> &[DetailTab] {
        &self.tabs
    }

    pub fn actions(&self) -> &[ActionDescriptor] {
        &self.actions
    }

    pub fn selected_task(&self) -> Option<&TaskRecord> {
        self.master.selected_task()
    }

    /// The detail region (tab set + action bar) is visible exactly while
    /// a selection exists.
    pub fn detail_visible(&self) -> bool {
        self.selected_task().is_some()
    }

    pub fn action_enabled(&self, id: ActionId) -> bool {
        self.actions
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.is_enabled(self.selected_task()))
            .unwrap_or(false)
    }

    /// Build the semantic event for activating an action button.
    /// Returns None when the button is disabled or nothing is selected,
    /// so activation of a disabled control is structurally a no-op.
    pub fn event_for(&self, id: ActionId) -> Option<UiEvent> {
        let task = self.selected_task()?;
        let action = self.actions.iter().find(|a| a.id == id)?;
        if !action.is_enabled(Some(task)) {
            return None;
        }
        Some(UiEvent {
            event: action.event,
            source: action.id,
            task_id: task.id,
        })
    }

    pub fn select_next(&self) -> Self {
        Self {
            master: self.master.select_next(),
            ..self.clone()
        }
    }

    pub fn select_prev(&self) -> Self {
        Self {
            master: self.master.select_prev(),
            ..self.clone()
        }
    }

    pub fn deselect(&self) -> Self {
        Self {
            master: self.master.deselect(),
            ..self.clone()
        }
    }

    pub fn update_tasks(&self, tasks: Vec<TaskRecord>) -> Self {
        Self {
            master: self.master.update_tasks(tasks),
            ..self.clone()
        }
    }
}

impl Default for DrilldownState {
    fn default() -> Self {
        Self::new()
    }
}
