use crate::a11y;
use crate::components::cart_item::CartItem;
use crate::router::Route;
use crate::state::{CartAction, use_shop};
use keyshop_core::format_price;
use yew::prelude::*;
use yew_router::prelude::*;

pub const EMPTY_MESSAGE: &str = "Your cart is empty.";

/// Slide-over cart panel driven by `ShopState::mini_cart_open`.
#[function_component(MiniCart)]
pub fn mini_cart() -> Html {
    let shop = use_shop();
    let panel_ref = use_node_ref();
    let open = shop.mini_cart_open;

    {
        let panel_ref = panel_ref.clone();
        use_effect_with(open, move |open| {
            if *open && let Some(panel) = panel_ref.cast::<web_sys::HtmlElement>() {
                let _ = panel.focus();
            }
            || {}
        });
    }

    if !open {
        return Html::default();
    }

    let close = {
        let shop = shop.clone();
        Callback::from(move |_: MouseEvent| {
            shop.dispatch(CartAction::CloseMiniCart);
            crate::dom::focus_by_id("cart-toggle");
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_keydown = {
        let shop = shop.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                shop.dispatch(CartAction::CloseMiniCart);
                crate::dom::focus_by_id("cart-toggle");
            }
        })
    };
    let remove = {
        let shop = shop.clone();
        Callback::from(move |id: String| {
            shop.dispatch(CartAction::Remove(id));
            a11y::set_status("Item removed from cart.");
        })
    };
    let checkout = {
        let shop = shop.clone();
        Callback::from(move |_: MouseEvent| shop.dispatch(CartAction::CloseMiniCart))
    };

    let theme = shop
        .active_theme
        .as_ref()
        .map(|value| format!("theme-{value}"));
    let items = shop.cart.items();
    let recent = shop.cart.recently_added_item_id();

    html! {
        <div class="mini-cart-overlay" role="presentation" onclick={close.clone()}>
            <aside
                id="mini-cart"
                class={classes!("mini-cart", theme)}
                role="dialog"
                aria-modal="true"
                aria-labelledby="mini-cart-title"
                tabindex="-1"
                ref={panel_ref}
                onclick={keep_open}
                onkeydown={on_keydown}
            >
                <div class="mini-cart-header">
                    <h2 id="mini-cart-title">{ "Your Cart" }</h2>
                    <button type="button" class="close-mini-cart" aria-label="Close cart" onclick={close}>
                        { "\u{00D7}" }
                    </button>
                </div>
                if items.is_empty() {
                    <p class="empty-cart-message">{ EMPTY_MESSAGE }</p>
                } else {
                    <ul class="mini-cart-items">
                        { for items.iter().map(|item| html! {
                            <CartItem
                                key={item.id.clone()}
                                item={item.clone()}
                                on_remove={remove.clone()}
                                highlighted={recent == Some(item.id.as_str())}
                            />
                        }) }
                    </ul>
                    <div class="mini-cart-footer">
                        <p class="mini-cart-subtotal">
                            <span>{ "Subtotal:" }</span>
                            <span class="subtotal-amount">{ format_price(shop.cart.cart_total()) }</span>
                        </p>
                        <span onclick={checkout}>
                            <Link<Route> to={Route::Checkout} classes="checkout-button">
                                { "Proceed to Checkout" }
                            </Link<Route>>
                        </span>
                    </div>
                }
            </aside>
        </div>
    }
}
