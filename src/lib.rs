//! # Connect Four
//!
//! A terminal Connect Four game against a simple AI. The opponent rates
//! each candidate drop by the runs it extends or blocks and takes an
//! immediate win when one is on the board; ties break randomly.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player colors, session state machine
//! - [`ai`] — The greedy move heuristic
//! - [`ui`] — Terminal UI: stage rendering and the input event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`logging`] — File logger setup (the terminal belongs to the UI)

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
