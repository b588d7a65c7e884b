use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate game value in catalog: {0}")]
    DuplicateGame(String),
}

/// A purchasable pass variant for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pass {
    pub id: String,
    pub title: String,
    /// Display price, e.g. `"$9.99"`
    pub price: String,
    #[serde(rename = "type")]
    pub pass_type: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Shown with the "RECOMMENDED" badge
    #[serde(default, rename = "bestValue")]
    pub best_value: bool,
}

/// A game listed in the storefront
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub name: String,
    /// Catalog key, referenced by cart line items
    pub value: String,
    #[serde(default)]
    pub logo_src: String,
    #[serde(default)]
    pub passes: Vec<Pass>,
    #[serde(default)]
    pub game_specific_feature: Option<String>,
    #[serde(default)]
    pub game_specific_discount: Option<String>,
}

/// Ordered list of games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub games: Vec<Game>,
}

impl Catalog {
    /// Create an empty catalog (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self { games: Vec::new() }
    }

    /// Load a catalog from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a catalog or two
    /// games share a `value`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        for (index, game) in catalog.games.iter().enumerate() {
            if catalog.games[..index].iter().any(|g| g.value == game.value) {
                return Err(CatalogError::DuplicateGame(game.value.clone()));
            }
        }
        Ok(catalog)
    }

    #[must_use]
    pub fn from_games(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// The catalog shipped with the storefront.
    ///
    /// Falls back to an empty catalog if the embedded data is unreadable,
    /// which the UI renders as "No games available."
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(include_str!("../data/games.json")).unwrap_or_else(|err| {
            log::error!("Embedded catalog failed to parse: {err}");
            Self::empty()
        })
    }

    /// Find a game by its catalog key.
    #[must_use]
    pub fn find_game(&self, value: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.value == value)
    }

    /// Find a pass by game key and pass title.
    #[must_use]
    pub fn find_pass(&self, game_value: &str, pass_title: &str) -> Option<&Pass> {
        self.find_game(game_value)?
            .passes
            .iter()
            .find(|pass| pass.title == pass_title)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Game {
    /// Identity the cart uses when this game is added.
    #[must_use]
    pub fn details(&self) -> crate::cart::GameDetails {
        crate::cart::GameDetails {
            value: self.value.clone(),
            name: self.name.clone(),
        }
    }
}

impl Pass {
    #[must_use]
    pub fn details(&self) -> crate::cart::PassDetails {
        crate::cart::PassDetails {
            id: Some(self.id.clone()),
            title: self.title.clone(),
            price: self.price.clone(),
            pass_type: self.pass_type.clone(),
        }
    }
}
