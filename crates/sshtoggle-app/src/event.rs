//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two sources:
//! - User interactions (Keyboard, Resize).
//! - The runtime reporting the outcome of the startup load.

use sshtoggle_core::Scan;

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Configuration file was read and scanned.
    Loaded {
        /// Records, initial selection and any reported malformed blocks.
        scan: Scan,
    },

    /// Configuration file could not be read.
    LoadFailed {
        /// Error description.
        message: String,
    },
}
