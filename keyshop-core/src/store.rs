//! Cart store: the authoritative cart state plus UI signals.
//!
//! Every mutating operation ends by persisting the full line list. Derived
//! aggregates are recomputed on read.
use crate::cart::{AddStatus, Cart, GameDetails, LineItem, PassDetails};
use crate::catalog::Catalog;
use crate::persistence::{CartPersistence, LoadReport};
use crate::storage::CartStorage;

#[derive(Debug, Clone, PartialEq)]
pub struct CartStore<S> {
    cart: Cart,
    persistence: CartPersistence<S>,
    recently_added_item_id: Option<String>,
    trigger_cart_animation: u64,
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store and rehydrate it from `storage`.
    pub fn init(storage: S) -> Self {
        Self::init_with(CartPersistence::new(storage)).0
    }

    /// Create a store from an existing persistence adapter, returning what
    /// the load found.
    pub fn init_with(persistence: CartPersistence<S>) -> (Self, LoadReport) {
        let (items, report) = persistence.load_with_report();
        log::debug!("Cart rehydrated: {report:?}");
        let store = Self {
            cart: Cart::from_lines(items),
            persistence,
            recently_added_item_id: None,
            trigger_cart_animation: 0,
        };
        (store, report)
    }

    /// Add one unit of a pass, or bump the quantity of its existing line.
    pub fn add_to_cart(
        &mut self,
        pass: &PassDetails,
        game: &GameDetails,
        catalog: &Catalog,
    ) -> AddStatus {
        let id = self.cart.add_pass(pass, game, catalog);
        self.recently_added_item_id = Some(id);
        self.trigger_cart_animation = self.trigger_cart_animation.wrapping_add(1);
        self.persist();
        AddStatus::Added
    }

    /// Remove a line by id; unknown ids are ignored.
    pub fn remove_from_cart(&mut self, item_id: &str) {
        self.cart.remove_line(item_id);
        self.persist();
    }

    /// Set a line's quantity. Zero or less removes the line; unknown ids
    /// leave the cart untouched.
    pub fn update_quantity(&mut self, item_id: &str, new_quantity: i64) {
        if self.cart.find_line(item_id).is_none() {
            return;
        }
        if new_quantity <= 0 {
            self.remove_from_cart(item_id);
            return;
        }
        self.cart.set_quantity(item_id, new_quantity);
        self.persist();
    }

    /// Empty the cart. UI signals are left as they are.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist();
    }

    pub fn clear_recently_added(&mut self) {
        self.recently_added_item_id = None;
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.cart.lines
    }

    #[must_use]
    pub fn cart_item_count(&self) -> u64 {
        self.cart.item_count()
    }

    #[must_use]
    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    #[must_use]
    pub fn recently_added_item_id(&self) -> Option<&str> {
        self.recently_added_item_id.as_deref()
    }

    #[must_use]
    pub const fn trigger_cart_animation(&self) -> u64 {
        self.trigger_cart_animation
    }

    #[must_use]
    pub fn find_item(&self, item_id: &str) -> Option<&LineItem> {
        self.cart.find_line(item_id)
    }

    /// Whether a line for `(game_value, pass_title)` exists.
    #[must_use]
    pub fn contains_pass(&self, game_value: &str, pass_title: &str) -> bool {
        self.cart.find_pass(game_value, pass_title).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    #[must_use]
    pub const fn persistence(&self) -> &CartPersistence<S> {
        &self.persistence
    }

    fn persist(&self) {
        self.persistence.save(&self.cart.lines);
    }
}
