use crate::router::Route;
use crate::state::{CartAction, use_shop};
use yew::prelude::*;
use yew_router::prelude::*;

/// How long the cart icon keeps its bump class.
const BUMP_MS: u32 = 600;

/// The brand link only forgets the theme when clicked on the home page.
#[must_use]
pub fn brand_resets_theme(route: Option<&Route>) -> bool {
    matches!(route, Some(Route::Home))
}

#[function_component(Header)]
pub fn header() -> Html {
    let shop = use_shop();
    let route = use_route::<Route>();

    let trigger = shop.cart.trigger_cart_animation();
    let animations_enabled = shop.settings.animations_enabled;
    {
        let shop = shop.clone();
        use_effect_with(trigger, move |trigger| {
            let trigger = *trigger;
            if shop.cart_bumping {
                wasm_bindgen_futures::spawn_local(async move {
                    gloo::timers::future::TimeoutFuture::new(BUMP_MS).await;
                    shop.dispatch(CartAction::EndCartBump(trigger));
                });
            }
            || {}
        });
    }

    let on_brand = {
        let shop = shop.clone();
        Callback::from(move |_: MouseEvent| {
            if brand_resets_theme(route.as_ref()) {
                shop.dispatch(CartAction::ResetTheme);
            }
        })
    };
    let toggle_cart = {
        let shop = shop.clone();
        Callback::from(move |_: MouseEvent| shop.dispatch(CartAction::ToggleMiniCart))
    };
    let toggle_animations = {
        let shop = shop.clone();
        Callback::from(move |_: MouseEvent| shop.dispatch(CartAction::ToggleAnimations))
    };

    let count = shop.cart.cart_item_count();
    let cart_label = match count {
        1 => "Open cart, 1 item".to_string(),
        n => format!("Open cart, {n} items"),
    };

    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <span class="nav-logo" onclick={on_brand}>
                <Link<Route> to={Route::Home} classes="brand nav-logo-link">{ "Keyshop" }</Link<Route>>
            </span>
            <div class="header-actions">
                <button
                    type="button"
                    class="animations-toggle"
                    aria-pressed={animations_enabled.to_string()}
                    onclick={toggle_animations}
                >
                    { if animations_enabled { "Animations: On" } else { "Animations: Off" } }
                </button>
                <button
                    id="cart-toggle"
                    type="button"
                    class={classes!("cart-icon", shop.cart_bumping.then_some("bump"))}
                    aria-label={cart_label}
                    aria-expanded={shop.mini_cart_open.to_string()}
                    aria-controls="mini-cart"
                    onclick={toggle_cart}
                >
                    <span aria-hidden="true">{ "\u{1F6D2}" }</span>
                    if count > 0 {
                        <span class="cart-count">{ count.to_string() }</span>
                    }
                </button>
            </div>
        </header>
    }
}
