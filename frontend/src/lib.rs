//! ONE Water landing page: a single scrolling page rendered with Yew.

pub mod browser;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod view;

use yew::prelude::*;

use crate::config::ViewConfig;
use crate::pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ViewConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<ViewConfig> context={props.config.clone()}>
            <Landing />
        </ContextProvider<ViewConfig>>
    }
}

/// Installs the panic hook and logger, then mounts the page on `<body>`.
pub fn run(config: ViewConfig) {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed, which is fine to keep.
    let _ = console_log::init_with_level(config.log_level());
    log::info!("Starting ONE Water landing page");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
