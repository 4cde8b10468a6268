//! Persisted user settings: the storage seam and the theme flag.
//!
//! The page keeps exactly one durable value, the dark-mode flag. The
//! controller only sees the [`SettingsStore`] trait, so the browser build
//! plugs in `localStorage` and tests plug in [`MemoryStore`].

use std::collections::HashMap;

use crate::consts::{DARK_MODE_DISABLED, DARK_MODE_ENABLED, DARK_MODE_LABEL, LIGHT_MODE_LABEL};
use crate::error::PageError;

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

/// String key-value storage that survives page reloads.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError>;
}

/// In-process store. Used in tests and when browser storage is blocked.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_owned(), value.to_owned());
        Self { values }
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Decode the persisted flag. Only an exact `"enabled"` selects dark.
    pub fn from_flag(flag: Option<&str>) -> Self {
        if flag == Some(DARK_MODE_ENABLED) {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The flag value written back to storage for this mode.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Light => DARK_MODE_DISABLED,
            Self::Dark => DARK_MODE_ENABLED,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle control markup while this mode is active. It offers the other mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => DARK_MODE_LABEL,
            Self::Dark => LIGHT_MODE_LABEL,
        }
    }
}
