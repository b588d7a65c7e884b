use crate::components::game_selector::GameSelector;
use crate::components::key_card::KeyCard;
use crate::state::{CartAction, use_shop};
use keyshop_core::GameOption;
use keyshop_core::selector::NO_GAMES_AVAILABLE;
use yew::prelude::*;

/// Game picker plus the pass cards for the chosen game.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let shop = use_shop();
    let catalog = shop.catalog.clone();

    let on_select = {
        let shop = shop.clone();
        Callback::from(move |value: String| shop.dispatch(CartAction::SelectGame(value)))
    };

    let options: Vec<GameOption> = catalog.games.iter().map(GameOption::from).collect();
    let selected = shop.active_theme.clone();
    let game = selected.as_deref().and_then(|value| catalog.find_game(value));

    html! {
        <section class={classes!("home-page", selected.as_ref().map(|v| format!("theme-{v}")))} aria-labelledby="home-title">
            <h1 id="home-title">{ "Game Passes" }</h1>
            if catalog.is_empty() {
                <p class="no-games">{ NO_GAMES_AVAILABLE }</p>
            } else {
                <GameSelector options={options} selected={selected.clone().map(AttrValue::from)} on_select={on_select} />
                if let Some(game) = game {
                    <div class="key-card-grid">
                        { for game.passes.iter().map(|pass| html! {
                            <KeyCard key={pass.id.clone()} game={game.clone()} pass={pass.clone()} best_value={pass.best_value} />
                        }) }
                    </div>
                } else {
                    <p class="select-prompt">{ "Select a game to see its passes." }</p>
                }
            }
        </section>
    }
}
