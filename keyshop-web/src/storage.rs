//! Browser-backed cart storage.
use keyshop_core::{CartStorage, StorageError};

/// `window.localStorage` as a [`CartStorage`] backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl CartStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(crate::dom::js_error_message(&err)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: crate::dom::js_error_message(&err),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: crate::dom::js_error_message(&err),
            })
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    crate::dom::local_storage()
        .map_err(|err| StorageError::Unavailable(crate::dom::js_error_message(&err)))
}

/// Storage the app persists the cart through.
#[cfg(target_arch = "wasm32")]
pub type AppStorage = BrowserStorage;

/// Off the browser (server rendering, native tests) the cart lives in memory.
#[cfg(not(target_arch = "wasm32"))]
pub type AppStorage = keyshop_core::MemoryStorage;
