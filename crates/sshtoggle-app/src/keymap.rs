//! Key bindings.
//!
//! Maps [`KeyInput`] to the [`Intent`]s the list understands and carries the
//! text shown in the help view.

use crate::KeyInput;

/// Discrete user intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move the cursor up, wrapping to the last entry.
    MoveUp,
    /// Move the cursor down, wrapping to the first entry.
    MoveDown,
    /// Jump to the first entry.
    MoveFirst,
    /// Jump to the last entry.
    MoveLast,
    /// Flip the entry under the cursor.
    Toggle,
    /// Switch between short and full help.
    ToggleHelp,
    /// Save and exit.
    Quit,
}

/// A key binding and its help text.
#[derive(Debug)]
pub struct KeyBinding {
    /// Intent triggered by the keys.
    pub intent: Intent,
    /// Keys that trigger the intent.
    pub keys: &'static [KeyInput],
    /// Key names as shown in help.
    pub help_key: &'static str,
    /// What the binding does.
    pub description: &'static str,
}

/// All bindings, in help display order.
pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        intent: Intent::MoveUp,
        keys: &[KeyInput::Up, KeyInput::Char('k')],
        help_key: "↑/k",
        description: "move up",
    },
    KeyBinding {
        intent: Intent::MoveDown,
        keys: &[KeyInput::Down, KeyInput::Char('j')],
        help_key: "↓/j",
        description: "move down",
    },
    KeyBinding {
        intent: Intent::MoveFirst,
        keys: &[KeyInput::Home, KeyInput::Char('g')],
        help_key: "home/g",
        description: "go to start",
    },
    KeyBinding {
        intent: Intent::MoveLast,
        keys: &[KeyInput::End, KeyInput::Char('G')],
        help_key: "end/G",
        description: "go to end",
    },
    KeyBinding {
        intent: Intent::Toggle,
        keys: &[KeyInput::Enter, KeyInput::Char(' ')],
        help_key: "enter/space",
        description: "toggle selection",
    },
    KeyBinding {
        intent: Intent::ToggleHelp,
        keys: &[KeyInput::Char('?')],
        help_key: "?",
        description: "toggle help",
    },
    KeyBinding {
        intent: Intent::Quit,
        keys: &[KeyInput::Char('q'), KeyInput::Esc, KeyInput::Interrupt],
        help_key: "q",
        description: "save and quit",
    },
];

/// Intent bound to `key`, if any.
pub fn intent_for(key: KeyInput) -> Option<Intent> {
    KEY_BINDINGS.iter().find(|binding| binding.keys.contains(&key)).map(|binding| binding.intent)
}

/// Bindings shown while the full help is collapsed.
pub fn short_help() -> impl Iterator<Item = &'static KeyBinding> {
    KEY_BINDINGS
        .iter()
        .filter(|binding| matches!(binding.intent, Intent::ToggleHelp | Intent::Quit))
}
