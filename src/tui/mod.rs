pub mod app;
pub mod data;
pub mod event;
pub mod state;
pub mod view;
