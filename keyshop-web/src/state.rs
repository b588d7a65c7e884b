//! Shared storefront state, provided to every widget through context.
use std::rc::Rc;

use keyshop_core::{
    AddStatus, CartStore, Catalog, GameDetails, PassDetails, ThemePreference, UiSettings,
};
use yew::prelude::*;

use crate::storage::AppStorage;

#[derive(Debug, Clone, PartialEq)]
pub struct ShopState {
    pub cart: CartStore<AppStorage>,
    pub catalog: Rc<Catalog>,
    pub settings: UiSettings,
    /// Game currently selected on the home page; drives theming
    pub active_theme: Option<String>,
    pub theme: ThemePreference<AppStorage>,
    pub mini_cart_open: bool,
    /// Cart icon is showing its bump for the latest add
    pub cart_bumping: bool,
}

impl ShopState {
    /// Build state over `storage`, rehydrating the saved cart and theme.
    #[must_use]
    pub fn with_storage(storage: AppStorage, catalog: Rc<Catalog>) -> Self {
        let theme = ThemePreference::new(storage.clone());
        Self {
            cart: CartStore::init(storage),
            catalog,
            settings: UiSettings::default(),
            active_theme: theme.load(),
            theme,
            mini_cart_open: false,
            cart_bumping: false,
        }
    }

    /// State over the app's default storage and the built-in catalog.
    #[must_use]
    pub fn load() -> Self {
        Self::with_storage(AppStorage::default(), Rc::new(Catalog::builtin()))
    }
}

pub enum CartAction {
    Add {
        pass: PassDetails,
        game: GameDetails,
        /// Receives the store's answer once the add has been applied
        respond: Option<Callback<AddStatus>>,
    },
    Remove(String),
    UpdateQuantity {
        id: String,
        quantity: i64,
    },
    Clear,
    ClearRecentlyAdded,
    ToggleAnimations,
    SetAnimations(bool),
    SelectGame(String),
    /// Forget the selected game and its saved theme
    ResetTheme,
    /// Bump timer for the given animation trigger has elapsed
    EndCartBump(u64),
    OpenMiniCart,
    CloseMiniCart,
    ToggleMiniCart,
}

impl ShopState {
    /// Closing the panel is what acknowledges the highlighted line.
    fn close_mini_cart(&mut self) {
        self.mini_cart_open = false;
        self.cart.clear_recently_added();
    }
}

impl Reducible for ShopState {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CartAction::Add {
                pass,
                game,
                respond,
            } => {
                let status = next.cart.add_to_cart(&pass, &game, &next.catalog);
                next.cart_bumping = next.settings.animations_enabled;
                log::debug!("Added {} for {}: {status:?}", pass.title, game.value);
                if let Some(respond) = respond {
                    respond.emit(status);
                }
            }
            CartAction::Remove(id) => next.cart.remove_from_cart(&id),
            CartAction::UpdateQuantity { id, quantity } => {
                next.cart.update_quantity(&id, quantity);
            }
            CartAction::Clear => next.cart.clear_cart(),
            CartAction::ClearRecentlyAdded => next.cart.clear_recently_added(),
            CartAction::ToggleAnimations => next.settings.toggle_animations(),
            CartAction::SetAnimations(enabled) => next.settings.animations_enabled = enabled,
            CartAction::SelectGame(value) => {
                next.theme.save(Some(value.as_str()));
                next.active_theme = Some(value);
            }
            CartAction::ResetTheme => {
                next.theme.save(None);
                next.active_theme = None;
            }
            CartAction::EndCartBump(trigger) => {
                // a newer add restarted the bump
                if trigger == next.cart.trigger_cart_animation() {
                    next.cart_bumping = false;
                }
            }
            CartAction::OpenMiniCart => next.mini_cart_open = true,
            CartAction::CloseMiniCart => next.close_mini_cart(),
            CartAction::ToggleMiniCart => {
                if next.mini_cart_open {
                    next.close_mini_cart();
                } else {
                    next.mini_cart_open = true;
                }
            }
        }
        Rc::new(next)
    }
}

pub type ShopHandle = UseReducerHandle<ShopState>;

/// The shop state provided by [`ShopProvider`].
///
/// # Panics
/// Panics when used outside a `ShopProvider`.
#[hook]
pub fn use_shop() -> ShopHandle {
    use_context::<ShopHandle>().expect("ShopProvider should wrap the component tree")
}

#[derive(Properties, PartialEq)]
pub struct ShopProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the shop reducer and exposes it to descendants.
#[function_component(ShopProvider)]
pub fn shop_provider(props: &ShopProviderProps) -> Html {
    let shop = use_reducer(ShopState::load);
    html! {
        <ContextProvider<ShopHandle> context={shop}>
            { for props.children.iter() }
        </ContextProvider<ShopHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyshop_core::{CART_STORAGE_KEY, MemoryStorage, THEME_STORAGE_KEY};
    use std::cell::Cell;

    fn state(storage: MemoryStorage) -> Rc<ShopState> {
        Rc::new(ShopState::with_storage(storage, Rc::new(Catalog::builtin())))
    }

    fn minecraft_standard() -> CartAction {
        let catalog = Catalog::builtin();
        let game = catalog.find_game("minecraft").unwrap();
        CartAction::Add {
            pass: game.passes[0].details(),
            game: game.details(),
            respond: None,
        }
    }

    #[test]
    fn add_action_updates_cart_and_storage() {
        let storage = MemoryStorage::new();
        let next = state(storage.clone()).reduce(minecraft_standard());
        assert_eq!(next.cart.cart_item_count(), 1);
        assert_eq!(next.cart.trigger_cart_animation(), 1);
        assert!(storage.raw(CART_STORAGE_KEY).is_some());
    }

    #[test]
    fn add_action_reports_status() {
        let seen = Rc::new(Cell::new(None));
        let respond = {
            let seen = seen.clone();
            Callback::from(move |status: AddStatus| seen.set(Some(status)))
        };
        let CartAction::Add { pass, game, .. } = minecraft_standard() else {
            unreachable!();
        };
        let _ = state(MemoryStorage::new()).reduce(CartAction::Add {
            pass,
            game,
            respond: Some(respond),
        });
        assert_eq!(seen.get(), Some(AddStatus::Added));
    }

    #[test]
    fn quantity_and_clear_actions() {
        let next = state(MemoryStorage::new())
            .reduce(minecraft_standard())
            .reduce(CartAction::UpdateQuantity {
                id: "minecraft-standard".to_string(),
                quantity: 4,
            });
        assert_eq!(next.cart.cart_item_count(), 4);
        let cleared = next.reduce(CartAction::Clear);
        assert!(cleared.cart.is_empty());
        assert_eq!(cleared.cart.recently_added_item_id(), Some("minecraft-standard"));
        let quiet = cleared.reduce(CartAction::ClearRecentlyAdded);
        assert!(quiet.cart.recently_added_item_id().is_none());
    }

    #[test]
    fn stale_bump_timer_does_not_end_newer_bump() {
        let first = state(MemoryStorage::new()).reduce(minecraft_standard());
        assert!(first.cart_bumping);
        let second = first.reduce(minecraft_standard());
        assert_eq!(second.cart.trigger_cart_animation(), 2);

        let after_stale = second.reduce(CartAction::EndCartBump(1));
        assert!(after_stale.cart_bumping);
        assert_eq!(
            after_stale.cart.recently_added_item_id(),
            Some("minecraft-standard")
        );

        let after_current = after_stale.reduce(CartAction::EndCartBump(2));
        assert!(!after_current.cart_bumping);
        assert!(after_current.cart.recently_added_item_id().is_some());
    }

    #[test]
    fn no_bump_when_animations_are_off() {
        let next = state(MemoryStorage::new())
            .reduce(CartAction::SetAnimations(false))
            .reduce(minecraft_standard());
        assert!(!next.cart_bumping);
    }

    #[test]
    fn closing_mini_cart_clears_recently_added() {
        let open = state(MemoryStorage::new())
            .reduce(minecraft_standard())
            .reduce(CartAction::OpenMiniCart);
        assert!(open.cart.recently_added_item_id().is_some());
        let closed = open.reduce(CartAction::ToggleMiniCart);
        assert!(!closed.mini_cart_open);
        assert!(closed.cart.recently_added_item_id().is_none());
    }

    #[test]
    fn saved_theme_is_restored() {
        let restored = state(MemoryStorage::with_item(THEME_STORAGE_KEY, "cod"));
        assert_eq!(restored.active_theme.as_deref(), Some("cod"));
    }

    #[test]
    fn selecting_a_game_persists_the_theme() {
        let storage = MemoryStorage::new();
        let _ = state(storage.clone()).reduce(CartAction::SelectGame("fortnite".to_string()));
        assert_eq!(storage.raw(THEME_STORAGE_KEY).as_deref(), Some("fortnite"));
        assert_eq!(state(storage).active_theme.as_deref(), Some("fortnite"));
    }

    #[test]
    fn reset_theme_forgets_saved_theme() {
        let storage = MemoryStorage::with_item(THEME_STORAGE_KEY, "minecraft");
        let next = state(storage.clone()).reduce(CartAction::ResetTheme);
        assert!(next.active_theme.is_none());
        assert!(!storage.contains(THEME_STORAGE_KEY));
    }

    #[test]
    fn ui_actions() {
        let next = state(MemoryStorage::new())
            .reduce(CartAction::ToggleMiniCart)
            .reduce(CartAction::SelectGame("cod".to_string()))
            .reduce(CartAction::ToggleAnimations);
        assert!(next.mini_cart_open);
        assert_eq!(next.active_theme.as_deref(), Some("cod"));
        assert!(!next.settings.animations_enabled);
        let closed = next.reduce(CartAction::CloseMiniCart);
        assert!(!closed.mini_cart_open);
    }
}
