use crate::a11y;
use crate::components::cart_item::CartItem;
use crate::router::Route;
use crate::state::{CartAction, use_shop};
use keyshop_core::checkout::EMPTY_CART_MESSAGE;
use keyshop_core::{CheckoutForm, OrderOutcome, PaymentMethod, format_price};
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

/// Order summary, contact form and placeholder payment buttons.
#[function_component(CheckoutPage)]
pub fn checkout_page() -> Html {
    let shop = use_shop();
    let form = use_state(CheckoutForm::new);
    let navigator = use_navigator();

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                let mut next = (*form).clone();
                next.set_email(input.value());
                form.set(next);
            }
        })
    };
    let on_blur = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.blur();
            form.set(next);
        })
    };
    let on_submit = {
        let form = form.clone();
        let shop = shop.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let outcome = next.submit(shop.cart.cart_item_count(), shop.cart.cart_total());
            form.set(next);
            match outcome {
                OrderOutcome::EmptyCart => go_home(navigator.as_ref()),
                OrderOutcome::Placed(summary) => {
                    shop.dispatch(CartAction::Clear);
                    a11y::set_status(&format!(
                        "Order placed for {}.",
                        format_price(summary.total)
                    ));
                    go_home(navigator.as_ref());
                }
                OrderOutcome::Rejected(err) => {
                    a11y::set_status(&err.to_string());
                    crate::dom::focus_by_id("checkout-email");
                }
            }
        })
    };
    let on_remove = {
        let shop = shop.clone();
        Callback::from(move |id: String| shop.dispatch(CartAction::Remove(id)))
    };
    let on_quantity = {
        let shop = shop.clone();
        Callback::from(move |(id, quantity): (String, i64)| {
            shop.dispatch(CartAction::UpdateQuantity { id, quantity });
        })
    };

    let items = shop.cart.items();
    let is_empty = items.is_empty();
    let error = form.error().map(ToString::to_string);

    html! {
        <section class="checkout-page" aria-labelledby="checkout-title">
            <h1 id="checkout-title">{ "Checkout" }</h1>
            <div class="order-summary">
                <h2>{ "Order Summary" }</h2>
                if is_empty {
                    <div class="empty-cart-message-checkout">
                        <p>{ EMPTY_CART_MESSAGE }</p>
                        <Link<Route> to={Route::Home} classes="continue-shopping">{ "Continue Shopping" }</Link<Route>>
                    </div>
                } else {
                    <ul class="checkout-items">
                        { for items.iter().map(|item| html! {
                            <CartItem
                                key={item.id.clone()}
                                item={item.clone()}
                                on_remove={on_remove.clone()}
                                on_quantity={Some(on_quantity.clone())}
                            />
                        }) }
                    </ul>
                    <p class="summary-total-checkout">
                        <span>{ "Total:" }</span>
                        <span class="total-amount">{ format_price(shop.cart.cart_total()) }</span>
                    </p>
                }
            </div>
            <form class="checkout-form" novalidate={true} onsubmit={on_submit}>
                <h2>{ "Contact Information" }</h2>
                <label for="checkout-email">{ "Email address" }</label>
                <input
                    id="checkout-email"
                    type="email"
                    autocomplete="email"
                    required={true}
                    value={form.email().to_string()}
                    aria-invalid={form.aria_invalid()}
                    aria-describedby={error.as_ref().map(|_| "checkout-email-error")}
                    oninput={on_input}
                    onblur={on_blur}
                />
                if let Some(error) = error {
                    <p id="checkout-email-error" class="error-message" role="alert">{ error }</p>
                }
                <div class="payment-methods">
                    <h2>{ "Payment Method" }</h2>
                    { for PaymentMethod::ALL.iter().map(|method| {
                        let method = *method;
                        html! {
                            <button
                                type="button"
                                class="payment-button"
                                onclick={Callback::from(move |_: MouseEvent| method.select())}
                            >
                                { method.label() }
                            </button>
                        }
                    }) }
                </div>
                <button type="submit" class="place-order-button" disabled={is_empty}>
                    { "Place Order" }
                </button>
            </form>
        </section>
    }
}

fn go_home(navigator: Option<&Navigator>) {
    if let Some(nav) = navigator {
        nav.push(&Route::Home);
    }
}
