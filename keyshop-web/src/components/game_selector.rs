use keyshop_core::GameOption;
use keyshop_core::selector::{SelectorEffect, SelectorKey, SelectorState, option_dom_id};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameSelectorProps {
    pub options: Vec<GameOption>,
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    pub on_select: Callback<String>,
}

/// Searchable dropdown listing the catalog's games.
#[function_component(GameSelector)]
pub fn game_selector(props: &GameSelectorProps) -> Html {
    let state = {
        let options = props.options.clone();
        let selected = props.selected.as_ref().map(ToString::to_string);
        use_state(move || SelectorState::new(options).with_selected(selected))
    };
    let search_ref = use_node_ref();

    {
        let state = state.clone();
        let deps = (props.options.clone(), props.selected.clone());
        use_effect_with(deps, move |(options, selected)| {
            let selected = selected.as_ref().map(ToString::to_string);
            let rebuilt = SelectorState::new(options.clone()).with_selected(selected);
            if *state != rebuilt {
                state.set(rebuilt);
            }
            || {}
        });
    }

    {
        let search_ref = search_ref.clone();
        use_effect_with(state.is_open(), move |open| {
            if *open && let Some(input) = search_ref.cast::<web_sys::HtmlInputElement>() {
                let _ = input.focus();
            }
            || {}
        });
    }

    let apply = {
        let state = state.clone();
        let on_select = props.on_select.clone();
        move |update: &dyn Fn(&mut SelectorState) -> SelectorEffect| {
            let mut next = (*state).clone();
            let effect = update(&mut next);
            state.set(next);
            if let SelectorEffect::Selected(value) = effect {
                on_select.emit(value);
            }
        }
    };

    let on_trigger_click = {
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| apply(&|s| s.toggle()))
    };
    let on_trigger_key = {
        let apply = apply.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(key) = SelectorKey::from_dom_key(&e.key()) {
                e.prevent_default();
                apply(&|s| s.trigger_key(key));
            }
        })
    };
    let on_list_key = {
        let apply = apply.clone();
        Callback::from(move |e: KeyboardEvent| {
            let Some(key) = SelectorKey::from_dom_key(&e.key()) else {
                return;
            };
            if key == SelectorKey::Space {
                return;
            }
            e.prevent_default();
            e.stop_propagation();
            apply(&|s| s.list_key(key));
        })
    };
    let on_search = {
        let apply = apply.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let value = input.value();
            apply(&|s| {
                s.set_search(value.clone());
                SelectorEffect::None
            });
        })
    };
    let on_backdrop = {
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| {
            apply(&|s| {
                s.close();
                SelectorEffect::Closed
            });
        })
    };

    let filtered = state.filtered();
    let highlighted = state.highlighted();
    let selected_value = state.selected_value();

    html! {
        <div class={classes!("custom-select", state.is_open().then_some("open"))}>
            if state.is_open() {
                <div class="custom-select-backdrop" onclick={on_backdrop}></div>
            }
            <button
                type="button"
                id="game-select-trigger"
                class="custom-select-trigger"
                aria-haspopup="listbox"
                aria-expanded={state.is_open().to_string()}
                aria-controls="game-select-listbox"
                onclick={on_trigger_click}
                onkeydown={on_trigger_key}
            >
                if let Some(option) = state.selected_option() {
                    if !option.logo_src.is_empty() {
                        <img class="custom-select-logo" src={option.logo_src.clone()} alt="" />
                    }
                }
                <span class="custom-select-label">{ state.trigger_label().to_string() }</span>
            </button>
            if state.is_open() {
                <div class="custom-select-options" onkeydown={on_list_key}>
                    <input
                        type="search"
                        class="custom-select-search-input"
                        placeholder="Search games..."
                        aria-label="Search games"
                        aria-controls="game-select-listbox"
                        aria-activedescendant={state.active_descendant().unwrap_or_default()}
                        value={state.search().to_string()}
                        ref={search_ref}
                        oninput={on_search}
                    />
                    <ul id="game-select-listbox" role="listbox" aria-labelledby="game-select-trigger">
                        if let Some(message) = state.empty_message() {
                            <li class="custom-select-empty" role="presentation">{ message }</li>
                        } else {
                            { for filtered.iter().enumerate().map(|(index, option)| {
                                let is_selected = selected_value == Some(option.value.as_str());
                                let on_pick = {
                                    let apply = apply.clone();
                                    let value = option.value.clone();
                                    Callback::from(move |_: MouseEvent| apply(&|s| s.select(&value)))
                                };
                                html! {
                                    <li
                                        id={option_dom_id(&option.value)}
                                        key={option.value.clone()}
                                        role="option"
                                        aria-selected={is_selected.to_string()}
                                        class={classes!(
                                            "custom-select-option",
                                            (highlighted == Some(index)).then_some("highlighted"),
                                            is_selected.then_some("selected"),
                                        )}
                                        onclick={on_pick}
                                    >
                                        if !option.logo_src.is_empty() {
                                            <img class="custom-select-logo" src={option.logo_src.clone()} alt="" />
                                        }
                                        <span>{ option.name.clone() }</span>
                                    </li>
                                }
                            }) }
                        }
                    </ul>
                </div>
            }
        </div>
    }
}
