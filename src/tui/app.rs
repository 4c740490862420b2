use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::i18n::Strings;

use super::data::{Controller, LocalController};
use super::event::{handle_key_event, Action, ActionId};
use super::state::{reducer::reduce, AppState, ModalState, StatusMessage};
use super::view;

const TICK_RATE: Duration = Duration::from_millis(250);
const REFRESH_INTERVAL: Duration = Duration::from_secs(2);

pub fn run() -> Result<()> {
    let controller = LocalController::new()?;
    run_with_controller(Box::new(controller))
}

pub fn run_with_controller(controller: Box<dyn Controller>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, controller);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: Box<dyn Controller>,
) -> Result<()> {
    let strings = Strings::catalog();
    let mut state = AppState::new();
    let mut last_refresh = Instant::now();

    // Initial load
    state = refresh_tasks(state, &controller);

    loop {
        // Render
        terminal.draw(|f| view::render(f, &state, &strings))?;

        // Handle events with timeout
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not release
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = handle_key_event(key, &state) {
                        state = handle_action(state, action, &controller);
                    }
                }
            }
        }

        // Check for quit
        if state.should_quit {
            break;
        }

        // Periodic refresh folds backend state changes into the list
        if last_refresh.elapsed() >= REFRESH_INTERVAL {
            state = refresh_tasks(state, &controller);
            last_refresh = Instant::now();
        }

        // Clear expired status messages
        state = state.clear_expired_status();
    }

    Ok(())
}

fn handle_action(
    mut state: AppState,
    action: Action,
    controller: &Box<dyn Controller>,
) -> AppState {
    // Handle ConfirmYes specially - extract the stored action before reducing
    let confirmed_action = if matches!(action, Action::ConfirmYes) {
        if let Some(ModalState::Confirm { on_confirm, .. }) = &state.modal {
            Some(on_confirm.as_ref().clone())
        } else {
            None
        }
    } else {
        None
    };

    // Apply reducer for navigation/view changes
    state = reduce(state, action.clone());

    // If this was a confirmation, recursively handle the confirmed action
    if let Some(confirmed) = confirmed_action {
        return handle_action(state, confirmed, controller);
    }

    // Then handle side effects
    match action {
        Action::Refresh => {
            state = refresh_tasks(state, controller);
        }

        // Run and Stop dispatch immediately; Delete arrives here as a
        // Dispatch after its confirmation
        Action::Invoke(ActionId::Run) => {
            state = dispatch_action(state, ActionId::Run, controller);
        }
        Action::Invoke(ActionId::Stop) => {
            state = dispatch_action(state, ActionId::Stop, controller);
        }
        Action::Dispatch(id) => {
            state = dispatch_action(state, id, controller);
        }

        _ => {}
    }

    state
}

fn refresh_tasks(mut state: AppState, controller: &Box<dyn Controller>) -> AppState {
    match controller.load_tasks() {
        Ok(tasks) => {
            state.drilldown = state.drilldown.update_tasks(tasks);
        }
        Err(e) => {
            state = state.set_status(StatusMessage::error(format!("Load error: {}", e)));
        }
    }
    state
}

/// Fire the semantic event for an action button. The controller does the
/// actual work; this side only reports the outcome and reloads.
fn dispatch_action(
    mut state: AppState,
    id: ActionId,
    controller: &Box<dyn Controller>,
) -> AppState {
    let Some(event) = state.drilldown.event_for(id) else {
        // Disabled control or stale selection: no-op
        return state;
    };

    let label = match id {
        ActionId::Delete => "Deleted",
        ActionId::Run => "Run requested",
        ActionId::Stop => "Stop requested",
    };

    match controller.submit(&event) {
        Ok(()) => {
            state = state.set_status(StatusMessage::info(label));
            // Fold the backend's new state in right away
            state = refresh_tasks(state, controller);
        }
        Err(e) => {
            state = state.set_status(StatusMessage::error(format!("{}: {}", label, e)));
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RunState, TaskRecord};
    use crate::tui::event::{EventName, UiEvent};
    use std::sync::{Arc, Mutex};

    type EventLog = Arc<Mutex<Vec<UiEvent>>>;

    /// Controller stub that records every dispatched event
    struct RecordingController {
        tasks: Vec<TaskRecord>,
        events: EventLog,
    }

    impl Controller for RecordingController {
        fn load_tasks(&self) -> Result<Vec<TaskRecord>> {
            Ok(self.tasks.clone())
        }

        fn submit(&self, event: &UiEvent) -> Result<()> {
            self.events.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    fn recording(tasks: Vec<TaskRecord>) -> (Box<dyn Controller>, EventLog) {
        let events: EventLog = Arc::new(Mutex::new(Vec::new()));
        let controller = RecordingController {
            tasks,
            events: events.clone(),
        };
        (Box::new(controller), events)
    }

    fn dispatched(events: &EventLog) -> Vec<UiEvent> {
        events.lock().unwrap().clone()
    }

    fn make_task(id: u64, state: RunState) -> TaskRecord {
        let mut task = TaskRecord::new(id, format!("task{id}"), "script".to_string(), 30);
        task.state = state;
        task.refresh_eligibility();
        task
    }

    fn selected_state(controller: &Box<dyn Controller>) -> AppState {
        let state = refresh_tasks(AppState::new(), controller);
        handle_action(state, Action::SelectNext, controller)
    }

    #[test]
    fn test_run_dispatches_exactly_one_event() {
        let (controller, events) = recording(vec![make_task(1, RunState::Waiting)]);
        let state = selected_state(&controller);

        let state = handle_action(state, Action::Invoke(ActionId::Run), &controller);

        assert_eq!(
            dispatched(&events),
            vec![UiEvent {
                event: EventName::RunAction,
                source: ActionId::Run,
                task_id: 1,
            }]
        );
        assert!(!state.status_message.as_ref().unwrap().is_error);
    }

    #[test]
    fn test_stop_on_running_task() {
        let (controller, events) = recording(vec![make_task(1, RunState::Running)]);
        let state = selected_state(&controller);

        handle_action(state, Action::Invoke(ActionId::Stop), &controller);

        let recorded = dispatched(&events);
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].event, EventName::RunAction);
        assert_eq!(recorded[0].source, ActionId::Stop);
        assert_eq!(recorded[0].task_id, 1);
    }

    #[test]
    fn test_disabled_dispatch_emits_nothing() {
        // Run is disabled while the task is already running
        let (controller, events) = recording(vec![make_task(1, RunState::Running)]);
        let state = selected_state(&controller);

        handle_action(state, Action::Dispatch(ActionId::Run), &controller);

        assert!(dispatched(&events).is_empty());
    }

    #[test]
    fn test_delete_waits_for_confirmation() {
        let (controller, events) = recording(vec![make_task(1, RunState::Waiting)]);
        let state = selected_state(&controller);

        // Invoke opens the confirm modal, dispatches nothing
        let state = handle_action(state, Action::Invoke(ActionId::Delete), &controller);
        assert!(matches!(state.modal, Some(ModalState::Confirm { .. })));
        assert!(dispatched(&events).is_empty());

        // Declining dispatches nothing
        let state = handle_action(state, Action::ConfirmNo, &controller);
        assert!(state.modal.is_none());
        assert!(dispatched(&events).is_empty());

        // Confirming dispatches exactly one delete event
        let state = handle_action(state, Action::Invoke(ActionId::Delete), &controller);
        let state = handle_action(state, Action::ConfirmYes, &controller);
        assert!(state.modal.is_none());

        let recorded = dispatched(&events);
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].event, EventName::Delete);
        assert_eq!(recorded[0].event.as_str(), "delete");
        assert_eq!(recorded[0].task_id, 1);
    }

    #[test]
    fn test_empty_list_dispatches_nothing() {
        let (controller, events) = recording(Vec::new());
        let state = refresh_tasks(AppState::new(), &controller);

        let state = handle_action(state, Action::Dispatch(ActionId::Delete), &controller);
        let state = handle_action(state, Action::Dispatch(ActionId::Run), &controller);
        handle_action(state, Action::Dispatch(ActionId::Stop), &controller);

        assert!(dispatched(&events).is_empty());
    }
}
