//! Terminal UI for sshtoggle
//!
//! A thin shell over [`sshtoggle_app::Driver`] that provides terminal-specific
//! I/O. Orchestration and file access live in the generic
//! [`sshtoggle_app::Runtime`].
//!
//! This crate only handles terminal input, rendering and locating the agent
//! configuration file.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod paths;
pub mod terminal;
pub mod ui;

pub use sshtoggle_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime, RuntimeConfig};
pub use terminal::{TerminalDriver, TerminalError};
