use crate::api_client::fetch_client_config;
use common::{ClientConfig, SubmitConfig};
use compute::SubmitOutcome;
use yew::prelude::*;

/// Where the current submit stands.
#[derive(Clone, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Done(SubmitOutcome),
    /// A failure the revision does not handle inline
    Crashed(String),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Resolves the submit configuration once: from the hosting server when it
/// answers, from `fallback` otherwise.
#[hook]
pub fn use_submit_config(fallback: ClientConfig) -> UseStateHandle<Option<SubmitConfig>> {
    let state = use_state(|| None::<SubmitConfig>);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let client_config = match fetch_client_config().await {
                    Ok(config) => {
                        log::info!("Loaded client config from server: {:?}", config);
                        config
                    }
                    Err(e) => {
                        log::warn!("Client config unavailable ({}), using local settings", e);
                        fallback
                    }
                };
                state.set(Some(client_config.resolve()));
            });
            || ()
        });
    }

    state
}
