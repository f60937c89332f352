//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. The terminal frontend implements it with crossterm and
//! ratatui; tests implement it with scripted events.

use crate::{App, AppEvent};

/// Abstracts input and rendering for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration and file access.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Block until the next input event.
    ///
    /// Returns `None` once the input source is closed; the runtime treats
    /// that as a quit request.
    fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error>;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Release any resources held by the driver.
    fn stop(&mut self);
}
