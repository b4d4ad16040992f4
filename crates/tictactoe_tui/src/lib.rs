//! Terminal front end for the tic-tac-toe engine.
//!
//! Translates key presses into engine calls and renders the resulting
//! [`GameView`](tictactoe_engine::GameView) with ratatui.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod ui;

pub use app::{Action, App};
pub use config::{ConfigError, Palette, Theme, TuiConfig};
pub use ui::render;
