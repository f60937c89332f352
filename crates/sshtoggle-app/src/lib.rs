//! Application layer for sshtoggle
//!
//! Pure state machine and generic runtime for the key selection list, kept
//! free of terminal dependencies so the same code runs under tests and in the
//! TUI.
//!
//! # Components
//!
//! - [`App`]: list state machine (cursor, toggles, help, quit)
//! - [`keymap`]: key bindings and the intents they map to
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Orchestration loop that loads once and saves once

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod input;
pub mod keymap;
mod runtime;

pub use action::AppAction;
pub use app::App;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use keymap::Intent;
pub use runtime::{Runtime, RuntimeConfig, RuntimeError};
