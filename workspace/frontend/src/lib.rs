use common::ClientConfig;
use yew::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod settings;

use components::loading::LoadingSpinner;
use components::prediction_page::PredictionPage;
use hooks::use_submit_config;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub fallback_config: ClientConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let submit_config = use_submit_config(props.fallback_config.clone());

    match &*submit_config {
        Some(config) => {
            log::trace!("Rendering {} revision form", config.schema.revision);
            html! { <PredictionPage config={config.clone()} /> }
        }
        None => html! { <LoadingSpinner text={Some("Loading configuration...".to_string())} /> },
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    let settings = settings::AppSettings::from_environment();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Heart Disease Prediction App Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::with_props(AppProps {
        fallback_config: settings.fallback_config,
    })
    .render();
    log::info!("Application initialized successfully");
}
