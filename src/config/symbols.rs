//! State symbols shown in the tray title and menu labels.

use super::error::ConfigError;

/// Default symbols for restart, stop and continue.
pub const DEFAULT_SYMBOLS: &str = "○□▷";

// ============================================================================
// SymbolKind
// ============================================================================

/// The three symbol slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Prefix of the "Restart" menu item
    Restart = 0,
    /// Prefix of the "Stop" menu item and of a stopped title
    Stop = 1,
    /// Prefix of the "Continue" menu item and of a running title
    Continue = 2,
}

// ============================================================================
// Symbols
// ============================================================================

/// Symbol table indexed by `SymbolKind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols([String; 3]);

impl Symbols {
    /// Parses a symbol table from a string, one character per slot in the
    /// order restart, stop, continue.
    ///
    /// Fewer than three characters leave the trailing slots empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSymbols` for more than three characters.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut slots: [String; 3] = Default::default();
        let mut chars = text.chars();

        for slot in &mut slots {
            if let Some(c) = chars.next() {
                *slot = c.to_string();
            }
        }

        if chars.next().is_some() {
            return Err(ConfigError::InvalidSymbols(text.to_string()));
        }

        Ok(Self(slots))
    }

    /// A symbol table where every slot is empty.
    pub fn empty() -> Self {
        Self(Default::default())
    }

    /// Returns the symbol for a slot.
    pub fn get(&self, kind: SymbolKind) -> &str {
        &self.0[kind as usize]
    }

    /// Prefixes `text` with a symbol, separated by a space.
    ///
    /// An empty symbol leaves `text` unchanged.
    pub fn decorate(&self, kind: SymbolKind, text: &str) -> String {
        match self.get(kind) {
            "" => text.to_string(),
            symbol => format!("{symbol} {text}"),
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        // DEFAULT_SYMBOLS has exactly three characters.
        let mut chars = DEFAULT_SYMBOLS.chars().map(String::from);
        Self(std::array::from_fn(|_| chars.next().unwrap_or_default()))
    }
}
