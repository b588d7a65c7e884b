use crate::components::header::Header;
use crate::components::mini_cart::MiniCart;
use crate::pages::checkout::CheckoutPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::router::Route;
use crate::state::{CartAction, ShopProvider, use_shop};
use yew::prelude::*;
use yew_router::prelude::*;

#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Checkout => html! { <CheckoutPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Browser entry point: router, shop state and the page shell.
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <ShopProvider>
                <Shell />
            </ShopProvider>
        </BrowserRouter>
    }
}

/// Page chrome shared by every route. Expects router and shop context.
#[function_component(Shell)]
pub fn shell() -> Html {
    let shop = use_shop();

    {
        let shop = shop.clone();
        use_effect_with((), move |()| {
            if crate::a11y::prefers_reduced_motion() {
                log::info!("Reduced motion requested; disabling animations");
                shop.dispatch(CartAction::SetAnimations(false));
            }
            || {}
        });
    }

    let theme = shop
        .active_theme
        .as_ref()
        .map(|value| format!("theme-{value}"));

    html! {
        <div class={classes!("app-shell", theme, (!shop.settings.animations_enabled).then_some("no-animations"))}>
            <style>{ crate::a11y::visible_focus_css() }</style>
            <Header />
            <MiniCart />
            <main id="main" tabindex="-1">
                <Switch<Route> render={switch} />
            </main>
            <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
        </div>
    }
}
