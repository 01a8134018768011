//! Front-ends for the rules engine: an interactive terminal game and a
//! headless replay of scripted moves.

mod app;
pub mod board_widget;
mod game_view;
pub mod replay;

pub use app::App;
