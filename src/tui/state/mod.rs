pub mod actions;
pub mod app_state;
pub mod drilldown;
pub mod reducer;
pub mod task_list;

pub use actions::{action_bar, ActionDescriptor};
pub use app_state::{AppState, ModalState, StatusMessage};
pub use drilldown::{DetailTab, DrilldownState};
pub use task_list::TaskListState;
