use crate::model::TaskRecord;
use crate::tui::event::{ActionId, EventName};

/// Static configuration for one action-bar button, built once at view
/// construction and never mutated.
///
/// Enablement is a pure function of the current selection; no flag is
/// stored anywhere, so it cannot drift from the selection state.
#[derive(Debug, Clone, Copy)]
pub struct ActionDescriptor {
    pub id: ActionId,
    pub label_key: &'static str,
    pub glyph: &'static str,
    pub event: EventName,
    enabled: fn(Option<&TaskRecord>) -> bool,
}

impl ActionDescriptor {
    pub fn is_enabled(&self, selection: Option<&TaskRecord>) -> bool {
        (self.enabled)(selection)
    }
}

/// The Delete / Run / Stop action bar.
///
/// Delete needs only a selection. Run and Stop read the eligibility
/// signals the backend computed into the record; this layer renders
/// whatever signal it received and does not second-guess it.
pub fn action_bar() -> Vec<ActionDescriptor> {
    vec![
        ActionDescriptor {
            id: ActionId::Delete,
            label_key: "tasks.action.delete",
            glyph: "\u{2212}", // minus sign
            event: EventName::Delete,
            enabled: |selection| selection.is_some(),
        },
        ActionDescriptor {
            id: ActionId::Run,
            label_key: "tasks.action.run",
            glyph: "\u{25b6}", // play
            event: EventName::RunAction,
            enabled: |selection| selection.map(|t| t.runnable).unwrap_or(false),
        },
        ActionDescriptor {
            id: ActionId::Stop,
            label_key: "tasks.action.stop",
            glyph: "\u{25a0}", // stop
            event: EventName::RunAction,
            enabled: |selection| selection.map(|t| t.stoppable).unwrap_or(false),
        },
    ]
}
