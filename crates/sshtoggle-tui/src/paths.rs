//! Default location of the 1Password SSH agent configuration.
//!
//! - Windows: `%LOCALAPPDATA%\1Password\config\ssh\agent.toml`
//! - Linux and macOS: `~/.config/1Password/ssh/agent.toml`

use std::path::{Path, PathBuf};

use directories::BaseDirs;

const AGENT_FILE: &str = "agent.toml";

/// Directory layout family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Config under the local application data directory.
    Windows,
    /// Config under `~/.config`.
    Unix,
}

impl Platform {
    /// Platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }
}

/// Agent configuration path for `platform`, given the user's home and local
/// application data directories.
pub fn agent_config_in(home: &Path, local_data: &Path, platform: Platform) -> PathBuf {
    match platform {
        Platform::Windows => {
            local_data.join("1Password").join("config").join("ssh").join(AGENT_FILE)
        },
        Platform::Unix => home.join(".config").join("1Password").join("ssh").join(AGENT_FILE),
    }
}

/// Agent configuration path for the current user. `None` if no home
/// directory can be determined.
pub fn default_agent_config() -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    Some(agent_config_in(dirs.home_dir(), dirs.data_local_dir(), Platform::current()))
}
