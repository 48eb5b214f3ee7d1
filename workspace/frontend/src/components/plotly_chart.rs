use compute::Chart;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct PlotlyChartProps {
    pub chart: Chart,
}

/// Plain JS objects rather than `Map`s, which Plotly does not read.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn plot(chart: &Chart) -> Result<(), serde_wasm_bindgen::Error> {
    let config = serde_json::json!({"responsive": true, "displayModeBar": false});
    newPlot(
        &chart.id,
        to_js(&chart.data)?,
        to_js(&chart.layout)?,
        to_js(&config)?,
    );
    Ok(())
}

#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        use_effect_with(props.chart.clone(), move |chart| {
            if chart_ref.cast::<Element>().is_some() {
                log::trace!("Drawing chart {}", chart.id);
                if let Err(e) = plot(chart) {
                    log::error!("Failed to draw chart {}: {}", chart.id, e);
                }
            }
            || ()
        });
    }

    html! {
        <div ref={chart_ref} id={props.chart.id.clone()} class="chart-container" style="height: 350px;"></div>
    }
}
