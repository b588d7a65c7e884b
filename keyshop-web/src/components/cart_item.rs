use keyshop_core::{LineItem, format_price};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CartItemProps {
    pub item: LineItem,
    pub on_remove: Callback<String>,
    /// Shows +/- controls when set
    #[prop_or_default]
    pub on_quantity: Option<Callback<(String, i64)>>,
    #[prop_or_default]
    pub highlighted: bool,
}

/// One cart line: logo, titles, price and quantity.
#[function_component(CartItem)]
pub fn cart_item(props: &CartItemProps) -> Html {
    let item = &props.item;
    let remove = {
        let id = item.id.clone();
        let cb = props.on_remove.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id.clone());
        })
    };
    let step = |delta: i64| {
        props.on_quantity.clone().map(|cb| {
            let id = item.id.clone();
            let next = i64::from(item.quantity) + delta;
            Callback::from(move |_: MouseEvent| cb.emit((id.clone(), next)))
        })
    };

    html! {
        <li
            class={classes!(
                "cart-item",
                format!("theme-item-{}", item.game_value),
                props.highlighted.then_some("recently-added"),
            )}
            data-item-id={item.id.clone()}
        >
            if !item.game_logo.is_empty() {
                <img class="cart-item-logo" src={item.game_logo.clone()} alt={format!("{} logo", item.game_name)} />
            }
            <div class="cart-item-details">
                <p class="cart-item-game">{ item.game_name.clone() }</p>
                <p class="cart-item-pass">{ item.pass_title.clone() }</p>
                if !item.game_specific_feature.is_empty() {
                    <p class="cart-item-feature">{ item.game_specific_feature.clone() }</p>
                }
                <p class="cart-item-price">{ item.pass_price.clone() }</p>
                if props.on_quantity.is_some() {
                    <div class="cart-item-quantity" role="group" aria-label={format!("Quantity for {}", item.pass_title)}>
                        <button type="button" class="qty-decrease" aria-label="Decrease quantity" onclick={step(-1)}>{ "\u{2212}" }</button>
                        <span class="qty-value">{ format!("Qty: {}", item.quantity) }</span>
                        <button type="button" class="qty-increase" aria-label="Increase quantity" onclick={step(1)}>{ "+" }</button>
                    </div>
                } else {
                    <p class="cart-item-qty">{ format!("Qty: {}", item.quantity) }</p>
                }
                <p class="cart-item-line-total">{ format_price(item.line_total()) }</p>
            </div>
            <button
                type="button"
                class="remove-item-button"
                aria-label={format!("Remove {} from cart", item.pass_title)}
                onclick={remove}
            >
                { "\u{00D7}" }
            </button>
        </li>
    }
}
