pub mod core {
	pub mod config;
	pub mod engine;
	pub mod game;
	pub mod renderer;
	pub mod terminal;
	pub mod ticker;
}

pub mod runner;
pub mod ui;

// Re-export for convenience
pub use crate::core::config::GameConfig;
pub use crate::core::engine::GameEngine;
pub use crate::core::game::{reduce, Action, GameState};
