//! `SettingsStore` over `window.localStorage`.
//!
//! Private browsing modes and storage policies can make `localStorage`
//! unavailable. In that case the page falls back to an in-memory store, so
//! the toggle still works for the current page view.

use web_sys::{Storage, Window};

use crate::error::PageError;
use crate::settings::{MemoryStore, SettingsStore};

pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(storage),
            Ok(None) => {
                log::warn!("{}", PageError::StorageUnavailable("localStorage missing".into()));
                Self::Memory(MemoryStore::new())
            }
            Err(e) => {
                log::warn!("{}", PageError::StorageUnavailable(format!("{e:?}")));
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl SettingsStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        match self {
            Self::Local(storage) => storage
                .get_item(key)
                .map_err(|e| PageError::StorageRead { key: key.to_owned(), reason: format!("{e:?}") }),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| PageError::StorageWrite { key: key.to_owned(), reason: format!("{e:?}") }),
            Self::Memory(store) => store.set(key, value),
        }
    }
}
