use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="panel not-found" aria-labelledby="not-found-title">
            <h1 id="not-found-title">{ "Page not found" }</h1>
            <Link<Route> to={Route::Home}>{ "Back to the shop" }</Link<Route>>
        </section>
    }
}
