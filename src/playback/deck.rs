//! Deck configuration and navigation input mapping.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
    time::Duration,
};

use crate::foundation::error::{ReelError, ReelResult};

/// Pause between a clip ending and the automatic advance.
pub const DEFAULT_AUTO_ADVANCE_DELAY_MS: u64 = 400;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeckConfig {
    /// Off by default: pacing is manual unless enabled.
    #[serde(default)]
    pub auto_advance: bool,
    #[serde(default = "default_delay_ms")]
    pub auto_advance_delay_ms: u64,
    pub slides: Vec<SlideConfig>,
}

fn default_delay_ms() -> u64 {
    DEFAULT_AUTO_ADVANCE_DELAY_MS
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlideConfig {
    /// Media source for this slide; slides without media are skipped by the driver.
    #[serde(default)]
    pub media: Option<String>,
    /// Never auto-advance away from this slide.
    #[serde(default)]
    pub hold: bool,
}

/// Auto-advance policy shared by every slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoAdvance {
    pub enabled: bool,
    pub delay: Duration,
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self {
            enabled: false,
            delay: Duration::from_millis(DEFAULT_AUTO_ADVANCE_DELAY_MS),
        }
    }
}

impl DeckConfig {
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        serde_json::from_str(s).map_err(|e| ReelError::serde(format!("parse deck JSON: {e}")))
    }

    pub fn from_reader(r: impl Read) -> ReelResult<Self> {
        serde_json::from_reader(r).map_err(|e| ReelError::serde(format!("parse deck JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::configuration(format!("open deck JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn auto_advance(&self) -> AutoAdvance {
        AutoAdvance {
            enabled: self.auto_advance,
            delay: Duration::from_millis(self.auto_advance_delay_ms),
        }
    }
}

/// A navigation request. Navigation is never blocked by media state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
}

impl NavCommand {
    /// Right arrow and Space advance, left arrow goes back.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            39 | 32 => Some(Self::Next),
            37 => Some(Self::Prev),
            _ => None,
        }
    }

    /// Index reached from `current` in a deck of `len` slides, or `None` at either end.
    pub fn target(self, current: usize, len: usize) -> Option<usize> {
        match self {
            Self::Next => (current + 1 < len).then_some(current + 1),
            Self::Prev => current.checked_sub(1),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/deck.rs"]
mod tests;
