use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/checkout")]
    Checkout,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Short label for breadcrumbs and document titles.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Game Passes",
            Self::Checkout => "Checkout",
            Self::NotFound => "Not Found",
        }
    }
}
