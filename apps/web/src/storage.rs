use clinic_core::SessionStorage;

/// `window.sessionStorage`, scoped to the browser tab
///
/// When storage is blocked (private mode, sandboxed frames) reads come back
/// empty and writes are dropped with a warning.
pub struct TabStorage {
    storage: Option<web_sys::Storage>,
}

impl TabStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("sessionStorage unavailable; session will not persist across pages");
        }
        Self { storage }
    }
}

impl SessionStorage for TabStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("could not store {}: {:?}", key, err);
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.clear() {
                log::warn!("could not clear session storage: {:?}", err);
            }
        }
    }
}
