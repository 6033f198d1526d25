pub mod app;
pub mod browser;
pub mod components;
pub mod pages;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let config = browser::embedded_config().unwrap_or_default();
    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <App /> }
    });
}
