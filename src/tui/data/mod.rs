pub mod local;
pub mod provider;

pub use local::LocalController;
pub use provider::Controller;
