use common::{Field, FieldValue, Slider, Widget};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// A widget change: field key and the raw value read from the element.
pub type FieldChange = (&'static str, String);

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub field: Field,
    pub value: Option<FieldValue>,
    pub disabled: bool,
    pub on_change: Callback<FieldChange>,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let key = props.field.key;

    match props.field.widget {
        Widget::Slider(slider) => {
            let oninput = props.on_change.reform(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                (key, input.value())
            });
            let current = props
                .value
                .and_then(|v| v.as_f64())
                .unwrap_or(slider.default);

            html! {
                <div class="form-control">
                    <label class="label" for={key}>
                        <span class="label-text">{props.field.label}</span>
                        <span class="label-text-alt font-mono">{format_number(&slider, current)}</span>
                    </label>
                    <input
                        type="range"
                        id={key}
                        name={key}
                        class="range range-primary range-sm"
                        min={slider.min.to_string()}
                        max={slider.max.to_string()}
                        step={slider.step.to_string()}
                        value={current.to_string()}
                        disabled={props.disabled}
                        {oninput}
                    />
                </div>
            }
        }
        Widget::Select(select) => {
            let onchange = props.on_change.reform(move |e: Event| {
                let element: HtmlSelectElement = e.target_unchecked_into();
                (key, element.value())
            });
            let current = match props.value {
                Some(FieldValue::Choice(choice)) => choice,
                _ => select.default_option(),
            };

            html! {
                <div class="form-control">
                    <label class="label" for={key}>
                        <span class="label-text">{props.field.label}</span>
                    </label>
                    <select id={key} name={key} class="select select-bordered select-sm w-full" disabled={props.disabled} {onchange}>
                        {for select.options.iter().map(|option| html! {
                            <option value={*option} selected={*option == current}>{*option}</option>
                        })}
                    </select>
                </div>
            }
        }
        Widget::Toggle(toggle) if toggle.radio => {
            let checked = match props.value {
                Some(FieldValue::Flag(flag)) => flag,
                _ => toggle.default,
            };
            let choice = |flag: bool| {
                let text = if flag { "True" } else { "False" };
                let onchange = props.on_change.reform(move |_: Event| (key, flag.to_string()));
                html! {
                    <label class="label cursor-pointer justify-start gap-2">
                        <input
                            type="radio"
                            name={key}
                            value={text}
                            class="radio radio-primary radio-sm"
                            checked={checked == flag}
                            disabled={props.disabled}
                            {onchange}
                        />
                        <span class="label-text">{text}</span>
                    </label>
                }
            };

            html! {
                <div class="form-control">
                    <span class="label-text font-semibold">{props.field.label}</span>
                    {choice(true)}
                    {choice(false)}
                </div>
            }
        }
        Widget::Toggle(toggle) => {
            let onchange = props.on_change.reform(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                (key, input.checked().to_string())
            });
            let checked = match props.value {
                Some(FieldValue::Flag(flag)) => flag,
                _ => toggle.default,
            };

            html! {
                <div class="form-control">
                    <label class="label cursor-pointer justify-start gap-2">
                        <input
                            type="checkbox"
                            name={key}
                            class="checkbox checkbox-primary checkbox-sm"
                            {checked}
                            disabled={props.disabled}
                            {onchange}
                        />
                        <span class="label-text">{props.field.label}</span>
                    </label>
                </div>
            }
        }
    }
}

fn format_number(slider: &Slider, value: f64) -> String {
    if slider.integer {
        format!("{}", value as i64)
    } else {
        format!("{:.*}", slider.precision as usize, value)
    }
}
