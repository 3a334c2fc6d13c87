pub mod actions;
pub mod types;
pub mod view_state;
