//! SSH key records and their block encodings.
//!
//! A record is the structured form of one `[[ssh-keys]]` block. Values are
//! held without quotes; quotes are added back when the block is encoded.

use std::fmt;

/// Header line opening every block.
pub const HEADER: &str = "[[ssh-keys]]";

/// Prefix that disables a line.
pub const COMMENT_PREFIX: char = '#';

/// One entry of the agent configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Record {
    /// Every key stored in a vault.
    Vault {
        /// Vault name.
        vault: String,
    },

    /// A single key item inside a vault.
    Item {
        /// Item name.
        item: String,
        /// Vault holding the item.
        vault: String,
    },
}

impl Record {
    /// Record granting every key in `vault`.
    pub fn vault(vault: impl Into<String>) -> Self {
        Self::Vault { vault: vault.into() }
    }

    /// Record granting the single key `item` in `vault`.
    pub fn item(item: impl Into<String>, vault: impl Into<String>) -> Self {
        Self::Item { item: item.into(), vault: vault.into() }
    }

    /// Vault name, present for both shapes.
    pub fn vault_name(&self) -> &str {
        match self {
            Self::Vault { vault } | Self::Item { vault, .. } => vault,
        }
    }

    /// Item name. `None` for vault records.
    pub fn item_name(&self) -> Option<&str> {
        match self {
            Self::Vault { .. } => None,
            Self::Item { item, .. } => Some(item),
        }
    }

    /// Display label for list rendering. Never parsed back.
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Encode the record as a block, commented out unless `active`.
    pub fn encode(&self, active: bool) -> String {
        let mut out = String::new();
        self.write_block(&mut out, active);
        out
    }

    /// Append the block encoding to `out`, including its trailing blank line.
    pub fn write_block(&self, out: &mut String, active: bool) {
        let prefix = if active { "" } else { "#" };
        let mut push_line = |line: &str| {
            out.push_str(prefix);
            out.push_str(line);
            out.push('\n');
        };

        push_line(HEADER);
        if let Self::Item { item, .. } = self {
            push_line(&format!("item = \"{item}\""));
        }
        push_line(&format!("vault = \"{}\"", self.vault_name()));
        out.push('\n');
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vault { vault } => write!(f, "Vault {vault}"),
            Self::Item { item, vault } => write!(f, "Item {item} in Vault {vault}"),
        }
    }
}
