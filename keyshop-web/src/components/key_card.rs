use crate::state::{CartAction, use_shop};
use gloo::timers::future::TimeoutFuture;
use keyshop_core::{
    AddStatus, Game, Pass, PurchaseButton, PurchaseOutcome, PurchasePhase, RESET_DELAY_MS,
    ResolveEffect, particle_origin,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const PARTICLE_COUNT: usize = 8;

#[derive(Properties, PartialEq, Clone)]
pub struct KeyCardProps {
    pub game: Game,
    pub pass: Pass,
    #[prop_or(AttrValue::from("Buy Now"))]
    pub buy_text: AttrValue,
    /// Highlights the card with the "RECOMMENDED" badge
    #[prop_or_default]
    pub best_value: bool,
}

/// A purchasable pass. Clicking the card or its button adds one unit.
#[function_component(KeyCard)]
pub fn key_card(props: &KeyCardProps) -> Html {
    let shop = use_shop();
    let button = use_mut_ref(PurchaseButton::new);
    let origin = use_mut_ref(|| None::<(f64, f64)>);
    let refresh = use_force_update();
    let card_ref = use_node_ref();
    let button_ref = use_node_ref();

    {
        let button = button.clone();
        let refresh = refresh.clone();
        let identity = (
            props.game.value.clone(),
            props.pass.id.clone(),
            props.game.game_specific_feature.clone(),
        );
        use_effect_with(identity, move |_| {
            let was_idle = button.borrow().phase() == PurchasePhase::Idle;
            button.borrow_mut().props_changed();
            if !was_idle {
                refresh.force_update();
            }
            || {}
        });
    }

    let purchase = {
        let shop = shop.clone();
        let button = button.clone();
        let origin = origin.clone();
        let refresh = refresh.clone();
        let card_ref = card_ref.clone();
        let button_ref = button_ref.clone();
        let pass = props.pass.details();
        let game = props.game.details();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let Some(ticket) = button.borrow_mut().begin() else {
                return;
            };
            if let (Some(btn), Some(card)) = (
                button_ref.cast::<web_sys::Element>(),
                card_ref.cast::<web_sys::Element>(),
            ) {
                *origin.borrow_mut() = Some(particle_origin(
                    crate::dom::bounding_rect(&btn),
                    crate::dom::bounding_rect(&card),
                ));
            }
            refresh.force_update();

            let respond = {
                let button = button.clone();
                let refresh = refresh.clone();
                Callback::from(move |status: AddStatus| {
                    let effect = button
                        .borrow_mut()
                        .resolve(ticket, PurchaseOutcome::from(status));
                    if let ResolveEffect::ScheduleReset(ticket) = effect {
                        let button = button.clone();
                        let refresh = refresh.clone();
                        spawn_local(async move {
                            TimeoutFuture::new(RESET_DELAY_MS).await;
                            if button.borrow_mut().reset(ticket) {
                                refresh.force_update();
                            }
                        });
                    }
                    refresh.force_update();
                })
            };
            shop.dispatch(CartAction::Add {
                pass: pass.clone(),
                game: game.clone(),
                respond: Some(respond),
            });
        })
    };

    let state = button.borrow();
    let show_particles = state.shows_particles() && shop.settings.animations_enabled;
    let particle_style = (*origin.borrow())
        .map(|(top, left)| format!("top: {top}px; left: {left}px;"))
        .unwrap_or_default();
    let game = &props.game;
    let pass = &props.pass;

    html! {
        <article
            class={classes!(
                "key-card",
                format!("theme-item-{}", game.value),
                format!("pass-{}", pass.pass_type),
                props.best_value.then_some("best-value"),
                state.is_disabled().then_some("is-adding"),
            )}
            ref={card_ref}
            onclick={purchase.clone()}
        >
            if props.best_value {
                <span class="best-value-badge">{ "RECOMMENDED" }</span>
            }
            if !game.logo_src.is_empty() {
                <img class="key-card-logo" src={game.logo_src.clone()} alt={format!("{} logo", game.name)} />
            }
            <h3 class="key-card-title">{ pass.title.clone() }</h3>
            <p class="key-card-price">{ pass.price.clone() }</p>
            if !pass.features.is_empty() {
                <ul class="key-card-features">
                    { for pass.features.iter().map(|feature| html! { <li>{ feature.clone() }</li> }) }
                </ul>
            }
            if let Some(feature) = game.game_specific_feature.clone() {
                <p class="key-card-bonus">{ feature }</p>
            }
            if let Some(discount) = game.game_specific_discount.clone() {
                <p class="key-card-discount">{ discount }</p>
            }
            <button
                type="button"
                class={classes!("purchase-button", (state.phase() == PurchasePhase::JustAdded).then_some("added"))}
                disabled={state.is_disabled()}
                aria-label={format!("Add {} for {} to cart", pass.title, game.name)}
                ref={button_ref}
                onclick={purchase}
            >
                { state.label(&props.buy_text).to_string() }
            </button>
            <span class="sr-only" role="status" aria-live="polite">{ state.status_message() }</span>
            if show_particles {
                <div class="particle-burst" style={particle_style} aria-hidden="true">
                    { for (0..PARTICLE_COUNT).map(|i| html! {
                        <span class={classes!("particle", format!("particle-{i}"))}></span>
                    }) }
                </div>
            }
        </article>
    }
}
