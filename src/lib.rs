//! # Connect Four
//!
//! A two-player Connect Four game. The rules engine knows nothing about
//! presentation; a terminal UI built with Ratatui and a headless replay mode
//! drive it through [`game::GameEngine::drop_piece`].
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, state machine
//! - [`ui`] — Terminal UI and headless replay
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
