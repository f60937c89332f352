//! Runtime tests with a scripted driver and a real file on disk.
//!
//! # Oracle Pattern
//!
//! Tests end with oracle checks that verify:
//! - The file on disk reflects the toggles made during the session
//! - Nothing is written when the load failed
//! - Save failures surface as errors instead of being swallowed

use std::{
    collections::VecDeque,
    convert::Infallible,
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use sshtoggle_app::{App, AppEvent, Driver, KeyInput, Runtime, RuntimeConfig, RuntimeError};
use sshtoggle_core::{MalformedBlockPolicy, ReaderConfig};
use tempfile::TempDir;

const AGENT_TOML: &str = "\
[[ssh-keys]]
vault = \"Personal\"

#[[ssh-keys]]
#item = \"GitHub\"
#vault = \"Work\"
";

/// Observations shared between a test and the driver it hands away.
#[derive(Default)]
struct Probe {
    renders: AtomicUsize,
    stopped: AtomicBool,
}

/// Driver replaying a fixed list of key presses.
struct ScriptedDriver {
    events: VecDeque<AppEvent>,
    probe: Arc<Probe>,
}

impl ScriptedDriver {
    fn new(keys: &[KeyInput]) -> Self {
        Self::with_probe(keys, Arc::default())
    }

    fn with_probe(keys: &[KeyInput], probe: Arc<Probe>) -> Self {
        let events = keys.iter().copied().map(AppEvent::Key).collect();
        Self { events, probe }
    }
}

impl Driver for ScriptedDriver {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        Ok(self.events.pop_front())
    }

    fn render(&mut self, _app: &App) -> Result<(), Self::Error> {
        self.probe.renders.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&mut self) {
        self.probe.stopped.store(true, Ordering::SeqCst);
    }
}

fn config_for(path: &Path) -> RuntimeConfig {
    RuntimeConfig { config_path: path.to_path_buf(), reader: ReaderConfig::default() }
}

fn seeded_dir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("agent.toml");
    fs::write(&path, AGENT_TOML).expect("seed config");
    (dir, path)
}

#[test]
fn toggle_and_quit_writes_file() {
    let (_dir, path) = seeded_dir();
    let driver = ScriptedDriver::new(&[KeyInput::Down, KeyInput::Enter, KeyInput::Char('q')]);

    let app = Runtime::new(driver, config_for(&path)).run().expect("session succeeds");

    assert_eq!(app.store().selected().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(
        fs::read_to_string(&path).expect("read back"),
        "[[ssh-keys]]\nvault = \"Personal\"\n\n[[ssh-keys]]\nitem = \"GitHub\"\nvault = \"Work\"\n\n"
    );
}

#[test]
fn closed_input_saves_like_quit() {
    let (_dir, path) = seeded_dir();
    let driver = ScriptedDriver::new(&[KeyInput::Char(' ')]);

    let _ = Runtime::new(driver, config_for(&path)).run().expect("session succeeds");

    let written = fs::read_to_string(&path).expect("read back");
    assert!(written.starts_with("#[[ssh-keys]]\n#vault = \"Personal\"\n"));
}

#[test]
fn keys_after_quit_are_not_processed() {
    let (_dir, path) = seeded_dir();
    let driver = ScriptedDriver::new(&[KeyInput::Esc, KeyInput::Enter]);

    let app = Runtime::new(driver, config_for(&path)).run().expect("session succeeds");

    assert_eq!(app.store().selected().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn missing_file_starts_empty_and_is_not_created() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("agent.toml");
    let driver = ScriptedDriver::new(&[KeyInput::Enter, KeyInput::Char('q')]);

    let app = Runtime::new(driver, config_for(&path)).run().expect("session succeeds");

    assert!(!app.is_loaded());
    assert!(app.store().is_empty());
    assert!(app.status_message().is_some_and(|m| m.starts_with("Error: failed to read")));
    assert!(!path.exists());
}

#[test]
fn malformed_error_policy_leaves_file_untouched() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("agent.toml");
    let original = "[[ssh-keys]]\n\n[[ssh-keys]]\nvault = \"Kept\"\n";
    fs::write(&path, original).expect("seed config");

    let config = RuntimeConfig {
        config_path: path.clone(),
        reader: ReaderConfig { on_malformed: MalformedBlockPolicy::Error },
    };
    let driver = ScriptedDriver::new(&[KeyInput::Char('q')]);

    let app = Runtime::new(driver, config).run().expect("session succeeds");

    assert!(app.status_message().is_some_and(|m| m.contains("malformed")));
    assert_eq!(fs::read_to_string(&path).expect("read back"), original);
}

/// Driver that removes the config directory before asking to quit.
struct VanishingDirDriver {
    dir: PathBuf,
}

impl Driver for VanishingDirDriver {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        let _ = fs::remove_dir_all(&self.dir);
        Ok(Some(AppEvent::Key(KeyInput::Char('q'))))
    }

    fn render(&mut self, _app: &App) -> Result<(), Self::Error> {
        Ok(())
    }

    fn stop(&mut self) {}
}

#[test]
fn save_failure_is_reported() {
    let dir = TempDir::new().expect("create temp dir");
    let config_dir = dir.path().join("ssh");
    fs::create_dir(&config_dir).expect("create config dir");
    let path = config_dir.join("agent.toml");
    fs::write(&path, AGENT_TOML).expect("seed config");

    let driver = VanishingDirDriver { dir: config_dir };
    let result = Runtime::new(driver, config_for(&path)).run();

    assert!(matches!(result, Err(RuntimeError::Save(_))));
}

#[test]
fn renders_once_per_visible_change() {
    let (_dir, path) = seeded_dir();
    let probe = Arc::new(Probe::default());
    let keys = [KeyInput::Down, KeyInput::Char('x'), KeyInput::Char('q')];
    let driver = ScriptedDriver::with_probe(&keys, Arc::clone(&probe));

    let app = Runtime::new(driver, config_for(&path)).run().expect("session succeeds");

    // Load plus the cursor move; the unbound key and quit do not render.
    assert_eq!(probe.renders.load(Ordering::SeqCst), 2);
    assert!(probe.stopped.load(Ordering::SeqCst));
    assert_eq!(app.cursor(), 1);
}
