use crate::api_client;
use crate::components::error::{ErrorDisplay, InlineError};
use crate::components::form_field::{FieldChange, FormField};
use crate::components::layout::Layout;
use crate::components::loading::LoadingSpinner;
use crate::components::report::ReportView;
use crate::hooks::SubmitState;
use common::SubmitConfig;
use compute::{SubmitOutcome, conclude};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PredictionPageProps {
    pub config: SubmitConfig,
}

#[function_component(PredictionPage)]
pub fn prediction_page(props: &PredictionPageProps) -> Html {
    let form = {
        let config = props.config.clone();
        use_state(move || config.new_form())
    };
    let submit_state = use_state(SubmitState::default);

    let on_change = {
        let form = form.clone();
        Callback::from(move |(key, raw): FieldChange| {
            let mut next = (*form).clone();
            match next.apply_str(key, &raw) {
                Ok(()) => form.set(next),
                Err(e) => log::warn!("Rejected value for {}: {}", key, e),
            }
        })
    };

    let on_submit = {
        let config = props.config.clone();
        let form = form.clone();
        let submit_state = submit_state.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if submit_state.is_submitting() {
                return;
            }

            let request = form.collect();
            let config = config.clone();
            let submit_state = submit_state.clone();
            submit_state.set(SubmitState::Submitting);

            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Submitting {} fields to {}", request.len(), config.predict_url());
                let result = api_client::predict(&config, &request).await;
                let next = match conclude(&config.schema, &request, result) {
                    Ok(outcome) => SubmitState::Done(outcome),
                    Err(e) => {
                        log::error!("Unhandled prediction failure: {}", e);
                        SubmitState::Crashed(e.to_string())
                    }
                };
                submit_state.set(next);
            });
        })
    };

    let disabled = submit_state.is_submitting();
    let sidebar = html! {
        <form onsubmit={on_submit} class="space-y-2">
            {for props.config.schema.fields.iter().map(|field| html! {
                <FormField
                    key={field.key}
                    field={*field}
                    value={form.get(field.key)}
                    {disabled}
                    on_change={on_change.clone()}
                />
            })}
            <button type="submit" class="btn btn-primary w-full mt-4" {disabled}>
                {if disabled {
                    html! { <span class="loading loading-spinner loading-sm"></span> }
                } else {
                    html! {}
                }}
                {"Predict Heart Disease"}
            </button>
        </form>
    };

    html! {
        <Layout {sidebar}>
            {match &*submit_state {
                SubmitState::Idle => html! {
                    <p class="text-gray-500">{"Adjust the inputs in the sidebar and press Predict Heart Disease."}</p>
                },
                SubmitState::Submitting => html! {
                    <LoadingSpinner text={Some("Requesting prediction...".to_string())} />
                },
                SubmitState::Done(SubmitOutcome::Rendered(report)) => html! {
                    <ReportView report={report.clone()} />
                },
                SubmitState::Done(SubmitOutcome::Failed { message }) => html! {
                    <InlineError message={message.clone()} />
                },
                SubmitState::Crashed(message) => html! {
                    <ErrorDisplay title="Prediction failed" message={message.clone()} />
                },
            }}
        </Layout>
    }
}
