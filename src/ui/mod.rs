// Terminal UI using Ratatui

pub mod events;
pub mod form;
pub mod state;

pub use events::run_ui;
pub use state::{AppState, Focus, Status};
