//! Mirrors the cart line list into a single storage slot as a JSON array.
//!
//! Loading never fails: unreadable data is logged, removed from the slot
//! and treated as an empty cart. Saving overwrites the whole slot.

use serde_json::Value;

use crate::cart::LineItem;
use crate::storage::CartStorage;

/// Storage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "myThematicAppCartItems";

/// What `load` found in the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    /// No stored value
    Absent,
    /// Every stored entry decoded
    Loaded { count: usize },
    /// Some entries were dropped
    Partial { kept: usize, dropped: usize },
    /// Value was not valid JSON and has been removed
    NotJson,
    /// Value was JSON but not an array and has been removed
    NotArray,
    /// The backend could not be read
    Unreadable,
}

/// Reads and writes the cart slot through a [`CartStorage`] backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPersistence<S> {
    storage: S,
    key: String,
}

impl<S: CartStorage> CartPersistence<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, CART_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the stored line items, empty on any failure.
    #[must_use]
    pub fn load(&self) -> Vec<LineItem> {
        self.load_with_report().0
    }

    /// Load the stored line items along with what was found.
    #[must_use]
    pub fn load_with_report(&self) -> (Vec<LineItem>, LoadReport) {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (Vec::new(), LoadReport::Absent),
            Err(err) => {
                log::error!("Error reading cart items from storage: {err}");
                return (Vec::new(), LoadReport::Unreadable);
            }
        };

        let parsed: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                log::error!("Error parsing cart items from storage: {err}");
                self.discard();
                return (Vec::new(), LoadReport::NotJson);
            }
        };

        let Value::Array(entries) = parsed else {
            log::warn!("Invalid cart data found in storage, ignoring.");
            self.discard();
            return (Vec::new(), LoadReport::NotArray);
        };

        let total = entries.len();
        let items: Vec<LineItem> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| decode_entry(index, entry))
            .collect();

        let dropped = total - items.len();
        let report = if dropped == 0 {
            LoadReport::Loaded { count: items.len() }
        } else {
            LoadReport::Partial {
                kept: items.len(),
                dropped,
            }
        };
        (items, report)
    }

    /// Overwrite the slot with `items`. Failures are logged, not returned.
    pub fn save(&self, items: &[LineItem]) {
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(err) => {
                log::error!("Error serializing cart items: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.set_item(&self.key, &json) {
            log::error!("Error saving cart items to storage: {err}");
        }
    }

    fn discard(&self) {
        if let Err(err) = self.storage.remove_item(&self.key) {
            log::error!("Error clearing invalid cart data: {err}");
        }
    }
}

fn decode_entry(index: usize, entry: Value) -> Option<LineItem> {
    match serde_json::from_value::<LineItem>(entry) {
        Ok(item) if item.quantity == 0 => {
            log::warn!("Dropping stored cart item {} with zero quantity", item.id);
            None
        }
        Ok(item) => Some(item),
        Err(err) => {
            log::warn!("Dropping malformed stored cart item at index {index}: {err}");
            None
        }
    }
}
