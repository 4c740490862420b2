pub mod action;
pub mod input;

pub use action::{Action, ActionId, EventName, UiEvent};
pub use input::handle_key_event;
