//! Persisted display theme.
//!
//! The chosen theme survives restarts through a small dotfile whose location
//! comes from configuration. A missing or corrupt file falls back to the
//! default dark theme.

use std::fs;
use std::path::{Path, PathBuf};

use arca_shared::{AppError, AppResult};

/// Display theme for the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark palette (default).
    #[default]
    Dark,
    /// Light palette.
    Light,
}

impl Theme {
    /// The persisted token for this theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

/// Theme preference backed by a file on disk.
pub struct ThemeStore {
    path: PathBuf,
    current: Theme,
}

impl ThemeStore {
    /// Opens the store at `path`, reading the persisted theme if present.
    ///
    /// An unreadable or unrecognized file yields the default theme rather
    /// than an error.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = Self::read_theme(&path).unwrap_or_default();
        Self { path, current }
    }

    fn read_theme(path: &Path) -> Option<Theme> {
        let raw = fs::read_to_string(path).ok()?;
        Theme::from_token(&raw)
    }

    /// The active theme.
    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Sets and persists the theme.
    pub fn set(&mut self, theme: Theme) -> AppResult<()> {
        self.current = theme;
        fs::write(&self.path, theme.as_str())
            .map_err(|e| AppError::Internal(format!("Failed to persist theme: {e}")))
    }

    /// Switches to the other theme and persists the choice.
    pub fn toggle(&mut self) -> AppResult<Theme> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }
}
