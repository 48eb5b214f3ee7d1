//! Terminal and HTML renderings of a submit outcome.

use compute::{Chart, PredictionReport, SubmitOutcome};
use std::fmt::Write as _;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "-".repeat(title.len()));
}

/// Plain-text rendering for the `predict` command.
pub fn outcome_text(outcome: &SubmitOutcome) -> String {
    let mut out = String::new();
    match outcome {
        SubmitOutcome::Rendered(report) => {
            heading(&mut out, "Prediction");
            let _ = writeln!(out, "{}", report.prediction);
            let _ = writeln!(out);

            heading(&mut out, "Visualizations");
            let _ = writeln!(
                out,
                "BMI: {:.1} ({}, {})",
                report.bmi.value, report.bmi.category, report.bmi.source
            );
            for chart in &report.charts {
                let _ = writeln!(out, "- {}", chart.title);
            }
            for note in &report.notes {
                let _ = writeln!(out, "{}", note);
            }
        }
        SubmitOutcome::Failed { message } => {
            let _ = writeln!(out, "{}", message);
        }
    }
    out
}

/// Chart JSON is embedded in a `<script>` block; `</` would end it early.
fn script_json(value: &impl serde::Serialize) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn chart_script(chart: &Chart) -> serde_json::Result<String> {
    Ok(format!(
        "Plotly.newPlot({}, {}, {}, {{\"responsive\": true, \"displayModeBar\": false}});\n",
        script_json(&chart.id)?,
        script_json(&chart.data)?,
        script_json(&chart.layout)?
    ))
}

/// Standalone HTML page with the prediction and every chart of the report.
pub fn report_page(report: &PredictionReport) -> serde_json::Result<String> {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    let mut containers = String::new();
    let mut scripts = String::new();
    for chart in &report.charts {
        let _ = writeln!(
            containers,
            "    <div id=\"{}\" style=\"height: 350px;\"></div>",
            escape_html(&chart.id)
        );
        scripts.push_str(&chart_script(chart)?);
    }

    let notes: String = report
        .notes
        .iter()
        .map(|note| format!("    <p><em>{}</em></p>\n", escape_html(note)))
        .collect();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <title>Heart Disease Prediction App</title>
    <script src="{cdn}"></script>
</head>
<body>
    <h1>Heart Disease Prediction App</h1>
    <h2>Prediction</h2>
    <p>{prediction}</p>
    <h2>Visualizations</h2>
    <p>BMI {bmi:.1} ({category})</p>
{containers}{notes}    <footer><small>Generated {generated}</small></footer>
    <script>
{scripts}    </script>
</body>
</html>
"#,
        cdn = PLOTLY_CDN,
        prediction = escape_html(&report.prediction),
        bmi = report.bmi.value,
        category = report.bmi.category,
    ))
}
