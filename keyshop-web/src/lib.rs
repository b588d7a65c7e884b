#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod dom;
pub mod logging;
pub mod pages;
pub mod paths;
pub mod router;
pub mod state;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    yew::Renderer::<app::App>::new().render();
}
