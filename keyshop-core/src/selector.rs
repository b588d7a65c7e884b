//! Searchable game dropdown state.
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Game};

pub const PLACEHOLDER: &str = "-- Select Game --";
pub const NO_GAMES_AVAILABLE: &str = "No games available.";
pub const NO_GAMES_FOUND: &str = "No games found.";

/// One entry in the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOption {
    pub value: String,
    pub name: String,
    #[serde(default)]
    pub logo_src: String,
}

impl From<&Game> for GameOption {
    fn from(game: &Game) -> Self {
        Self {
            value: game.value.clone(),
            name: game.name.clone(),
            logo_src: game.logo_src.clone(),
        }
    }
}

/// Keys the dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKey {
    ArrowDown,
    ArrowUp,
    Home,
    End,
    Enter,
    Space,
    Escape,
}

impl SelectorKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowUp" => Some(Self::ArrowUp),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "Enter" => Some(Self::Enter),
            " " | "Spacebar" => Some(Self::Space),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Result of a keyboard or pointer interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEffect {
    None,
    Opened,
    Closed,
    Selected(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorState {
    options: Vec<GameOption>,
    selected: Option<String>,
    open: bool,
    search: String,
    highlighted: Option<usize>,
}

impl SelectorState {
    #[must_use]
    pub fn new(options: Vec<GameOption>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.games.iter().map(GameOption::from).collect())
    }

    /// Start with `value` selected.
    #[must_use]
    pub fn with_selected(mut self, value: Option<String>) -> Self {
        self.selected = value;
        self
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    #[must_use]
    pub fn selected_value(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&GameOption> {
        let value = self.selected.as_deref()?;
        self.options.iter().find(|option| option.value == value)
    }

    /// Trigger text: the selected game's name, or the placeholder.
    #[must_use]
    pub fn trigger_label(&self) -> &str {
        self.selected_option()
            .map_or(PLACEHOLDER, |option| option.name.as_str())
    }

    /// Options matching the current search, case-insensitively by name.
    #[must_use]
    pub fn filtered(&self) -> Vec<&GameOption> {
        let needle = self.search.trim().to_lowercase();
        self.options
            .iter()
            .filter(|option| needle.is_empty() || option.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Message for an empty list, if the list is empty.
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.options.is_empty() {
            Some(NO_GAMES_AVAILABLE)
        } else if self.filtered().is_empty() {
            Some(NO_GAMES_FOUND)
        } else {
            None
        }
    }

    /// `aria-activedescendant` target for the highlighted option.
    #[must_use]
    pub fn active_descendant(&self) -> Option<String> {
        let index = self.highlighted?;
        self.filtered()
            .get(index)
            .map(|option| option_dom_id(&option.value))
    }

    pub fn open(&mut self) {
        self.open = true;
        self.highlighted = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    pub fn toggle(&mut self) -> SelectorEffect {
        if self.open {
            self.close();
            SelectorEffect::Closed
        } else {
            self.open();
            SelectorEffect::Opened
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.highlighted = None;
    }

    /// Pick an option, close the list and clear the search.
    pub fn select(&mut self, value: &str) -> SelectorEffect {
        if !self.options.iter().any(|option| option.value == value) {
            log::warn!("Ignoring selection of unknown game {value}");
            return SelectorEffect::None;
        }
        self.selected = Some(value.to_string());
        self.search.clear();
        self.close();
        SelectorEffect::Selected(value.to_string())
    }

    /// Keys pressed on the trigger button.
    pub fn trigger_key(&mut self, key: SelectorKey) -> SelectorEffect {
        match key {
            SelectorKey::Enter | SelectorKey::Space => self.toggle(),
            SelectorKey::ArrowDown if !self.open => {
                self.open();
                SelectorEffect::Opened
            }
            SelectorKey::Escape if self.open => {
                self.close();
                SelectorEffect::Closed
            }
            _ => SelectorEffect::None,
        }
    }

    /// Keys pressed inside the open list or its search box.
    pub fn list_key(&mut self, key: SelectorKey) -> SelectorEffect {
        let count = self.filtered().len();
        match key {
            SelectorKey::Escape => {
                self.close();
                SelectorEffect::Closed
            }
            SelectorKey::ArrowDown if count > 0 => {
                self.highlighted = Some(self.highlighted.map_or(0, |i| (i + 1) % count));
                SelectorEffect::None
            }
            SelectorKey::ArrowUp if count > 0 => {
                self.highlighted = Some(
                    self.highlighted
                        .map_or(count - 1, |i| if i == 0 { count - 1 } else { i - 1 }),
                );
                SelectorEffect::None
            }
            SelectorKey::Home if count > 0 => {
                self.highlighted = Some(0);
                SelectorEffect::None
            }
            SelectorKey::End if count > 0 => {
                self.highlighted = Some(count - 1);
                SelectorEffect::None
            }
            SelectorKey::Enter => {
                let value = self
                    .highlighted
                    .and_then(|index| self.filtered().get(index).map(|o| o.value.clone()));
                value.map_or(SelectorEffect::None, |value| self.select(&value))
            }
            _ => SelectorEffect::None,
        }
    }
}

/// DOM id of an option row.
#[must_use]
pub fn option_dom_id(value: &str) -> String {
    format!("game-option-{value}")
}
