use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or(AttrValue::Static("Something went wrong"))]
    pub title: AttrValue,
}

/// Failure of a submit that the revision leaves unhandled.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{props.title.clone()}</span>
                    <span class="text-sm font-mono">{&props.message}</span>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InlineErrorProps {
    pub message: String,
}

/// Message shown in place of the prediction by revisions that catch failures.
#[function_component(InlineError)]
pub fn inline_error(props: &InlineErrorProps) -> Html {
    html! {
        <div class="alert alert-error">
            <span>{&props.message}</span>
        </div>
    }
}
