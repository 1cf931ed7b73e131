//! Browser `localStorage` helpers for the persisted theme preference.
//!
//! Storage is best-effort: a blocked or missing `localStorage` reads as "no
//! value" and writes are logged and dropped.

use web_sys::Storage;

use crate::dom::warn_on_err;

/// Handle to the page's `localStorage`, if the browser exposes one.
#[derive(Clone)]
pub struct PreferenceStore {
    storage: Option<Storage>,
    key: String,
}

impl PreferenceStore {
    /// Open `localStorage` on `window` for `key`.
    #[must_use]
    pub fn open(window: &web_sys::Window, key: &str) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {}", crate::dom::DomError::from(err));
                None
            }
        };
        Self { storage, key: key.to_owned() }
    }

    /// Stored string value, or `None` if unset or unreadable.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(&self.key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("read {} failed: {}", self.key, crate::dom::DomError::from(err));
                None
            }
        }
    }

    pub fn save(&self, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            log::debug!("no localStorage; {} not persisted", self.key);
            return;
        };
        warn_on_err(&format!("write {}", self.key), storage.set_item(&self.key, value));
    }
}
