//! Presentation preferences shared across widgets.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSettings {
    /// Cart icon bump and particle bursts
    pub animations_enabled: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            animations_enabled: true,
        }
    }
}

impl UiSettings {
    pub fn toggle_animations(&mut self) {
        self.animations_enabled = !self.animations_enabled;
    }
}
