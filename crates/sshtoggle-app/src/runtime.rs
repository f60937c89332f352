//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: list state machine
//! - [`Driver`]: Platform-specific input and rendering
//! - the configuration file, read once at startup and written once at exit

use std::path::PathBuf;

use sshtoggle_core::{ConfigError, ReaderConfig, read_config, write_config};
use thiserror::Error;
use tracing::{info, warn};

use crate::{App, AppAction, AppEvent, Driver, Intent};

/// Runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Agent configuration file to edit.
    pub config_path: PathBuf,
    /// How the file is scanned.
    pub reader: ReaderConfig,
}

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError<E: std::error::Error + 'static> {
    /// Input or rendering failed.
    #[error("terminal error: {0}")]
    Driver(#[source] E),

    /// The configuration could not be written. Edits from this session are
    /// lost.
    #[error("changes were not saved: {0}")]
    Save(#[source] ConfigError),
}

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App,
    config: RuntimeConfig,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver and configuration.
    pub fn new(driver: D, config: RuntimeConfig) -> Self {
        Self { driver, app: App::new(), config }
    }

    /// Run the main event loop.
    ///
    /// Loads the configuration, feeds driver events to the [`App`] until it
    /// asks to quit, then stops the driver. Returns the final application
    /// state.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails or the final save fails. A failed
    /// load is not an error: the list starts empty and nothing is saved.
    pub fn run(mut self) -> Result<App, RuntimeError<D::Error>> {
        let result = self.event_loop();
        self.driver.stop();
        result.map(|()| self.app)
    }

    fn event_loop(&mut self) -> Result<(), RuntimeError<D::Error>> {
        if self.load()? {
            return Ok(());
        }

        loop {
            let actions = match self.driver.poll_event().map_err(RuntimeError::Driver)? {
                Some(event) => self.app.handle(event),
                None => {
                    info!("input closed");
                    self.app.apply(Intent::Quit)
                },
            };

            if self.process_actions(actions)? {
                return Ok(());
            }
        }
    }

    /// Read the configuration file and hand the result to the App.
    ///
    /// Returns `true` if the application should quit.
    fn load(&mut self) -> Result<bool, RuntimeError<D::Error>> {
        let path = &self.config.config_path;
        let event = match read_config(path, &self.config.reader) {
            Ok(scan) => {
                info!(path = %path.display(), records = scan.store.len(), "agent config loaded");
                AppEvent::Loaded { scan }
            },
            Err(err) => {
                warn!(%err, "could not load agent config");
                AppEvent::LoadFailed { message: err.to_string() }
            },
        };

        let actions = self.app.handle(event);
        self.process_actions(actions)
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, RuntimeError<D::Error>> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app).map_err(RuntimeError::Driver)?,
                AppAction::Save { contents } => {
                    write_config(&self.config.config_path, &contents).map_err(RuntimeError::Save)?;
                },
                AppAction::Quit => return Ok(true),
            }
        }
        Ok(false)
    }
}
