//! Cart line items and the in-memory line list
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::numbers::{positive_quantity, quantity_to_f64, quantity_to_u64};
use crate::price::parse_price;

/// Display name used when a game key is missing from the catalog.
pub const DEFAULT_GAME_NAME: &str = "Unknown Game";
/// Logo used when a game key is missing from the catalog.
pub const DEFAULT_GAME_LOGO: &str = "";

/// A pass for a specific game currently in the cart.
///
/// Display fields are a snapshot of the catalog at add-time and are not
/// re-synced later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub game_value: String,
    pub game_name: String,
    pub game_logo: String,
    pub pass_title: String,
    /// Display price as shown in the catalog
    pub pass_price: String,
    /// Parsed from `pass_price` at add-time, 0 if unparseable. Stored
    /// `null` (an unparseable price written by older carts) or a missing
    /// field reads back as 0.
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub price_numeric: f64,
    pub game_specific_feature: String,
    /// Always at least 1
    pub quantity: u32,
}

impl LineItem {
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price_numeric * quantity_to_f64(self.quantity)
    }

    fn matches_pass(&self, game_value: &str, pass_title: &str) -> bool {
        self.game_value == game_value && self.pass_title == pass_title
    }
}

fn amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let amount = Option::<f64>::deserialize(deserializer)?;
    Ok(amount.filter(|a| a.is_finite()).unwrap_or(0.0))
}

/// Pass being added, as supplied by a purchase widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassDetails {
    /// Catalog pass id; not used for cart identity
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub price: String,
    #[serde(rename = "type")]
    pub pass_type: String,
}

/// Game the pass belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDetails {
    pub value: String,
    pub name: String,
}

/// Result of an add; identical for new and repeat adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddStatus {
    Added,
}

/// Cosmetic bonus text shown with a pass.
#[must_use]
pub fn game_specific_feature_text(game_value: &str, catalog: &Catalog) -> String {
    match game_value {
        "" => String::new(),
        "minecraft" => "+ Realmwalker's Boon".to_string(),
        "fortnite" => "+ Storm Rider's Edge".to_string(),
        "cod" => "+ Night Ops Advantage".to_string(),
        other => {
            let name = catalog.find_game(other).map_or("Game", |g| g.name.as_str());
            format!("+ {name} Enhancements")
        }
    }
}

/// Base line id for a pass: `"{game_value}-{pass_type}"`.
#[must_use]
pub fn line_item_id(game_value: &str, pass_type: &str) -> String {
    format!("{game_value}-{pass_type}")
}

/// Ordered list of cart lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    pub lines: Vec<LineItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_lines(lines: Vec<LineItem>) -> Self {
        Self { lines }
    }

    /// Find a line by its id.
    #[must_use]
    pub fn find_line(&self, id: &str) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Find a line by `(game_value, pass_title)`.
    #[must_use]
    pub fn find_pass(&self, game_value: &str, pass_title: &str) -> Option<&LineItem> {
        self.lines
            .iter()
            .find(|line| line.matches_pass(game_value, pass_title))
    }

    /// Add one unit of a pass, returning the id of the touched line.
    ///
    /// A repeat add bumps the existing line in place; order is unchanged.
    pub fn add_pass(&mut self, pass: &PassDetails, game: &GameDetails, catalog: &Catalog) -> String {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches_pass(&game.value, &pass.title))
        {
            line.quantity = line.quantity.saturating_add(1);
            return line.id.clone();
        }

        let catalog_game = catalog.find_game(&game.value);
        let line = LineItem {
            id: self.unique_id(&line_item_id(&game.value, &pass.pass_type)),
            game_value: game.value.clone(),
            game_name: catalog_game.map_or_else(|| DEFAULT_GAME_NAME.to_string(), |g| g.name.clone()),
            game_logo: catalog_game
                .map_or_else(|| DEFAULT_GAME_LOGO.to_string(), |g| g.logo_src.clone()),
            pass_title: pass.title.clone(),
            pass_price: pass.price.clone(),
            price_numeric: parse_price(&pass.price),
            game_specific_feature: game_specific_feature_text(&game.value, catalog),
            quantity: 1,
        };
        let id = line.id.clone();
        self.lines.push(line);
        id
    }

    /// Remove a line by id. Returns whether anything was removed.
    pub fn remove_line(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    /// Set a line's quantity; zero or negative removes it.
    ///
    /// Returns `false` when the id is unknown.
    pub fn set_quantity(&mut self, id: &str, requested: i64) -> bool {
        let Some(line) = self.lines.iter_mut().find(|line| line.id == id) else {
            return false;
        };
        match positive_quantity(requested) {
            Some(quantity) => {
                line.quantity = quantity;
                true
            }
            None => self.remove_line(id),
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| quantity_to_u64(line.quantity))
            .sum()
    }

    /// Sum of `price_numeric * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    fn unique_id(&self, base: &str) -> String {
        if self.find_line(base).is_none() {
            return base.to_string();
        }
        (2_u32..)
            .map(|n| format!("{base}-{n}"))
            .find(|candidate| self.find_line(candidate).is_none())
            .unwrap_or_else(|| base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_pass() -> PassDetails {
        PassDetails {
            id: Some("mc-standard".to_string()),
            title: "Standard Pass".to_string(),
            price: "$9.99".to_string(),
            pass_type: "standard".to_string(),
        }
    }

    fn minecraft() -> GameDetails {
        GameDetails {
            value: "minecraft".to_string(),
            name: "Minecraft".to_string(),
        }
    }

    #[test]
    fn feature_text_uses_fixed_table_then_fallback() {
        let catalog = Catalog::builtin();
        assert_eq!(
            game_specific_feature_text("minecraft", &catalog),
            "+ Realmwalker's Boon"
        );
        assert_eq!(
            game_specific_feature_text("fortnite", &catalog),
            "+ Storm Rider's Edge"
        );
        assert_eq!(
            game_specific_feature_text("cod", &catalog),
            "+ Night Ops Advantage"
        );
        assert_eq!(
            game_specific_feature_text("tetris", &catalog),
            "+ Game Enhancements"
        );
        assert_eq!(game_specific_feature_text("", &catalog), "");
    }

    #[test]
    fn feature_text_fallback_uses_catalog_name() {
        let catalog = Catalog::from_json(
            r#"{"games":[{"name":"Alpha Game","value":"game1","logoSrc":"alpha.png"}]}"#,
        )
        .unwrap();
        assert_eq!(
            game_specific_feature_text("game1", &catalog),
            "+ Alpha Game Enhancements"
        );
    }

    #[test]
    fn add_pass_builds_snapshot_line() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        let id = cart.add_pass(&standard_pass(), &minecraft(), &catalog);
        assert_eq!(id, "minecraft-standard");

        let line = cart.find_line(&id).unwrap();
        assert_eq!(line.game_name, "Minecraft");
        assert_eq!(line.game_logo, catalog.find_game("minecraft").unwrap().logo_src);
        assert_eq!(line.quantity, 1);
        assert!((line.price_numeric - 9.99).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_game_uses_placeholders() {
        let mut cart = Cart::new();
        let game = GameDetails {
            value: "mystery".to_string(),
            name: "Mystery".to_string(),
        };
        let id = cart.add_pass(&standard_pass(), &game, &Catalog::builtin());
        let line = cart.find_line(&id).unwrap();
        assert_eq!(line.game_name, DEFAULT_GAME_NAME);
        assert_eq!(line.game_logo, DEFAULT_GAME_LOGO);
        assert_eq!(line.game_specific_feature, "+ Game Enhancements");
    }

    #[test]
    fn colliding_ids_get_suffixes() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        let first = cart.add_pass(&standard_pass(), &minecraft(), &catalog);
        let mut other = standard_pass();
        other.title = "Founders Pass".to_string();
        let second = cart.add_pass(&other, &minecraft(), &catalog);
        other.title = "Collectors Pass".to_string();
        let third = cart.add_pass(&other, &minecraft(), &catalog);

        assert_eq!(first, "minecraft-standard");
        assert_eq!(second, "minecraft-standard-2");
        assert_eq!(third, "minecraft-standard-3");
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn set_quantity_handles_unknown_and_non_positive() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        let id = cart.add_pass(&standard_pass(), &minecraft(), &catalog);

        assert!(!cart.set_quantity("missing", 3));
        assert!(cart.set_quantity(&id, 3));
        assert_eq!(cart.item_count(), 3);
        assert!(cart.set_quantity(&id, -1));
        assert!(cart.is_empty());
    }

    #[test]
    fn serializes_as_bare_array_with_camel_case_keys() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        cart.add_pass(&standard_pass(), &minecraft(), &catalog);
        let value = serde_json::to_value(&cart).unwrap();
        let first = &value.as_array().unwrap()[0];
        assert_eq!(first["passTitle"], "Standard Pass");
        assert_eq!(first["gameValue"], "minecraft");
        assert_eq!(first["priceNumeric"], 9.99);
        assert_eq!(first["quantity"], 1);
    }

    #[test]
    fn add_status_serializes_as_added() {
        assert_eq!(serde_json::to_string(&AddStatus::Added).unwrap(), "\"added\"");
    }
}
