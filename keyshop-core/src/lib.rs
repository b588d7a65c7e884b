//! Keyshop core
//!
//! Platform-agnostic storefront logic: the game catalog, the cart store and
//! its persisted slot, price handling, and the state machines behind the
//! purchase button, game selector and checkout form. No UI or browser
//! dependencies live here.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod numbers;
pub mod persistence;
pub mod price;
pub mod purchase;
pub mod selector;
pub mod settings;
pub mod storage;
pub mod store;
pub mod theme;

// Re-export commonly used types
pub use cart::{AddStatus, Cart, GameDetails, LineItem, PassDetails, game_specific_feature_text};
pub use catalog::{Catalog, CatalogError, Game, Pass};
pub use checkout::{
    CheckoutError, CheckoutForm, OrderOutcome, OrderSummary, PaymentMethod, validate_email,
};
pub use persistence::{CART_STORAGE_KEY, CartPersistence, LoadReport};
pub use price::{format_price, parse_price};
pub use purchase::{
    PurchaseButton, PurchaseOutcome, PurchasePhase, PurchaseTicket, RESET_DELAY_MS, Rect,
    ResolveEffect, particle_origin,
};
pub use selector::{GameOption, SelectorEffect, SelectorKey, SelectorState};
pub use settings::UiSettings;
pub use storage::{CartStorage, MemoryStorage, StorageError};
pub use store::CartStore;
pub use theme::{THEME_STORAGE_KEY, ThemePreference};
