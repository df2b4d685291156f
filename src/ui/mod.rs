//! GUI module for the Fanorona game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::FanoronaApp;
pub use game_state::GameState;
