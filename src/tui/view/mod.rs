pub mod action_bar;
pub mod confirm_popup;
pub mod help_popup;
pub mod layout;
pub mod status_bar;
pub mod style;
pub mod summary_tab;
pub mod task_list;

pub use layout::render;
