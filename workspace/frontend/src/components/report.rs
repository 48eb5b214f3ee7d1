use crate::components::plotly_chart::PlotlyChart;
use compute::PredictionReport;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReportViewProps {
    pub report: PredictionReport,
}

#[function_component(ReportView)]
pub fn report_view(props: &ReportViewProps) -> Html {
    let report = &props.report;

    html! {
        <div class="space-y-6">
            <section>
                <h2 class="text-xl font-bold mb-2">{"Prediction"}</h2>
                <div class="alert alert-info">
                    <span class="text-lg">{&report.prediction}</span>
                </div>
            </section>

            <section>
                <h2 class="text-xl font-bold mb-2">{"Visualizations"}</h2>
                <p class="text-sm text-gray-500 mb-4">
                    {format!("BMI {:.1} ({})", report.bmi.value, report.bmi.category)}
                </p>
                <div class="grid grid-cols-1 xl:grid-cols-2 gap-4">
                    {for report.charts.iter().map(|chart| html! {
                        <PlotlyChart key={chart.id.clone()} chart={chart.clone()} />
                    })}
                </div>
                {for report.notes.iter().map(|note| html! {
                    <p class="text-gray-500 italic mt-4">{note}</p>
                })}
            </section>
        </div>
    }
}
