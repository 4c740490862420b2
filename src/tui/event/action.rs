/// The three action-bar buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    Delete,
    Run,
    Stop,
}

/// Semantic event name carried by a dispatched UI event.
///
/// Run and Stop share the same name on purpose: the controller routes
/// "runaction" to a run or a stop call from the record's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventName {
    RunAction,
    Delete,
}

impl EventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RunAction => "runaction",
            Self::Delete => "delete",
        }
    }
}

/// Semantic event dispatched to the controller when an enabled action
/// button is activated. The component fires exactly one of these per
/// activation and performs no work itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub event: EventName,
    pub source: ActionId,
    pub task_id: u64,
}

/// User action that can be triggered by input or timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Quit,
    SelectNext,
    SelectPrev,
    Deselect,

    // Action bar
    Invoke(ActionId),
    Dispatch(ActionId),

    // Modal
    ShowHelp,
    HideModal,
    ConfirmYes,
    ConfirmNo,

    // Refresh
    Refresh,
}
