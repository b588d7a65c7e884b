//! Remembers which game's theme the storefront shows.
//!
//! Stored as the bare game value (no JSON) next to the cart slot.
use crate::storage::CartStorage;

/// Storage key holding the active theme's game value.
pub const THEME_STORAGE_KEY: &str = "activeThemeGame";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePreference<S> {
    storage: S,
}

impl<S: CartStorage> ThemePreference<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The saved game value, `None` when unset, blank or unreadable.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        match self.storage.get_item(THEME_STORAGE_KEY) {
            Ok(value) => value.filter(|v| !v.trim().is_empty()),
            Err(err) => {
                log::error!("Error reading active theme from storage: {err}");
                None
            }
        }
    }

    /// Save `game_value`, or forget the theme when `None`.
    pub fn save(&self, game_value: Option<&str>) {
        let result = match game_value {
            Some(value) if !value.is_empty() => self.storage.set_item(THEME_STORAGE_KEY, value),
            _ => self.storage.remove_item(THEME_STORAGE_KEY),
        };
        if let Err(err) = result {
            log::error!("Error saving active theme to storage: {err}");
        }
    }
}
