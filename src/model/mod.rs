pub mod store;
pub mod task;

pub use store::TaskStore;
pub use task::{RunState, TaskRecord};
