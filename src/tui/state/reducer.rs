use crate::tui::event::{Action, ActionId};

use super::{AppState, ModalState};

/// Pure function that transforms state based on action
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::SelectNext => AppState {
            drilldown: state.drilldown.select_next(),
            ..state
        },

        Action::SelectPrev => AppState {
            drilldown: state.drilldown.select_prev(),
            ..state
        },

        Action::Deselect => AppState {
            drilldown: state.drilldown.deselect(),
            ..state
        },

        // Delete asks for confirmation first; Run/Stop dispatch straight
        // from the app loop. A disabled action is a no-op here too.
        Action::Invoke(ActionId::Delete) => {
            if !state.drilldown.action_enabled(ActionId::Delete) {
                return state;
            }
            let task_name = match state.drilldown.selected_task() {
                Some(task) => task.name.clone(),
                None => return state,
            };
            AppState {
                modal: Some(ModalState::Confirm {
                    task_name,
                    on_confirm: Box::new(Action::Dispatch(ActionId::Delete)),
                }),
                ..state
            }
        }

        Action::ShowHelp => AppState {
            modal: Some(ModalState::Help),
            ..state
        },

        Action::HideModal | Action::ConfirmYes | Action::ConfirmNo => AppState {
            modal: None,
            ..state
        },

        // Dispatch and refresh are handled by the app loop, the reducer
        // just passes through
        Action::Invoke(_) | Action::Dispatch(_) | Action::Refresh => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RunState, TaskRecord};

    fn make_task(id: u64, state: RunState) -> TaskRecord {
        let mut task = TaskRecord::new(id, format!("task{id}"), "script".to_string(), 30);
        task.state = state;
        task.refresh_eligibility();
        task
    }

    #[test]
    fn test_quit() {
        let state = reduce(AppState::default(), Action::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_selection_navigation() {
        let tasks = vec![make_task(1, RunState::Waiting), make_task(2, RunState::Waiting)];
        let state = AppState::with_tasks(tasks);
        assert!(state.drilldown.master.selected.is_none());

        let state = reduce(state, Action::SelectNext);
        assert_eq!(state.drilldown.master.selected, Some(0));

        let state = reduce(state, Action::SelectNext);
        assert_eq!(state.drilldown.master.selected, Some(1));

        let state = reduce(state, Action::SelectPrev);
        assert_eq!(state.drilldown.master.selected, Some(0));

        let state = reduce(state, Action::Deselect);
        assert!(state.drilldown.master.selected.is_none());
    }

    #[test]
    fn test_invoke_delete_opens_confirm() {
        let state = AppState::with_tasks(vec![make_task(1, RunState::Waiting)]);
        let state = reduce(state, Action::SelectNext);

        let state = reduce(state, Action::Invoke(ActionId::Delete));
        match state.modal {
            Some(ModalState::Confirm { ref task_name, ref on_confirm }) => {
                assert_eq!(task_name, "task1");
                assert_eq!(**on_confirm, Action::Dispatch(ActionId::Delete));
            }
            ref other => panic!("expected confirm modal, got {:?}", other),
        }
    }

    #[test]
    fn test_invoke_delete_without_selection_is_noop() {
        let state = AppState::with_tasks(vec![make_task(1, RunState::Waiting)]);
        let state = reduce(state, Action::Invoke(ActionId::Delete));
        assert!(state.modal.is_none());
    }

    #[test]
    fn test_confirm_no_closes_modal() {
        let state = AppState::with_tasks(vec![make_task(1, RunState::Waiting)]);
        let state = reduce(state, Action::SelectNext);
        let state = reduce(state, Action::Invoke(ActionId::Delete));
        assert!(state.modal.is_some());

        let state = reduce(state, Action::ConfirmNo);
        assert!(state.modal.is_none());
    }

    #[test]
    fn test_help_modal() {
        let state = reduce(AppState::default(), Action::ShowHelp);
        assert_eq!(state.modal, Some(ModalState::Help));

        let state = reduce(state, Action::HideModal);
        assert!(state.modal.is_none());
    }

    #[test]
    fn test_invoke_run_passes_through() {
        let state = AppState::with_tasks(vec![make_task(1, RunState::Waiting)]);
        let state = reduce(state, Action::SelectNext);
        let before = state.drilldown.master.selected;

        let state = reduce(state, Action::Invoke(ActionId::Run));
        assert_eq!(state.drilldown.master.selected, before);
        assert!(state.modal.is_none());
    }
}
