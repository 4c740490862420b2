use std::time::Instant;

use super::DrilldownState;

/// Modal dialog state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Help,
    Confirm {
        task_name: String,
        on_confirm: Box<crate::tui::event::Action>,
    },
}

/// Status message with expiration
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub created_at: Instant,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            created_at: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() > 3
    }
}

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub drilldown: DrilldownState,
    pub modal: Option<ModalState>,
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            drilldown: DrilldownState::new(),
            modal: None,
            status_message: None,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)] // Used in tests
    pub fn with_tasks(tasks: Vec<crate::model::TaskRecord>) -> Self {
        Self {
            drilldown: DrilldownState::new().update_tasks(tasks),
            ..Self::default()
        }
    }

    pub fn set_status(&self, message: StatusMessage) -> Self {
        Self {
            status_message: Some(message),
            ..self.clone()
        }
    }

    pub fn clear_expired_status(&self) -> Self {
        if let Some(ref msg) = self.status_message {
            if msg.is_expired() {
                return Self {
                    status_message: None,
                    ..self.clone()
                };
            }
        }
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskRecord;
    use crate::tui::event::Action;

    fn make_task(id: u64) -> TaskRecord {
        TaskRecord::new(id, format!("task{id}"), "script".to_string(), 30)
    }

    #[test]
    fn test_default() {
        let state = AppState::default();
        assert!(state.drilldown.master.tasks.is_empty());
        assert!(!state.drilldown.detail_visible());
        assert!(state.modal.is_none());
        assert!(state.status_message.is_none());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_with_tasks_starts_unselected() {
        let state = AppState::with_tasks(vec![make_task(1), make_task(2)]);
        assert_eq!(state.drilldown.master.tasks.len(), 2);
        assert!(state.drilldown.master.selected.is_none());
    }

    #[test]
    fn test_set_status() {
        let state = AppState::default();
        let state = state.set_status(StatusMessage::info("Saved"));
        assert_eq!(state.status_message.as_ref().unwrap().text, "Saved");
        assert!(!state.status_message.as_ref().unwrap().is_error);

        let state = state.set_status(StatusMessage::error("Boom"));
        assert!(state.status_message.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_clear_expired_status_keeps_fresh_message() {
        let state = AppState::default().set_status(StatusMessage::info("Fresh"));
        let state = state.clear_expired_status();
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_modal_state_equality() {
        assert_eq!(ModalState::Help, ModalState::Help);

        let confirm1 = ModalState::Confirm {
            task_name: "rebuild".to_string(),
            on_confirm: Box::new(Action::Quit),
        };
        let confirm2 = ModalState::Confirm {
            task_name: "rebuild".to_string(),
            on_confirm: Box::new(Action::Quit),
        };
        assert_eq!(confirm1, confirm2);
        assert_ne!(ModalState::Help, confirm1);
    }
}
