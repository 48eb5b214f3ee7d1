//! Plotly chart builders for the visualizations section.
//!
//! Builders are pure: they take already computed numbers and return a
//! [`Chart`] holding Plotly trace and layout JSON. The frontend hands these to
//! `Plotly.newPlot`, the CLI embeds them in an HTML page.

use crate::bmi::{NORMAL_FROM, OBESE_FROM, OVERWEIGHT_FROM};
use serde::Serialize;
use serde_json::{Value, json};

/// Reference line of the sleep gauge.
pub const SLEEP_TARGET_HOURS: f64 = 8.0;

/// Health-day counts are out of the last 30 days.
pub const DAYS_IN_PERIOD: f64 = 30.0;

pub const BMI_GAUGE_MAX: f64 = 40.0;
pub const SLEEP_GAUGE_MAX: f64 = 24.0;

/// A renderable chart: Plotly `data` and `layout`, plus the element id to draw into.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub id: String,
    pub title: String,
    pub data: Vec<Value>,
    pub layout: Value,
}

fn base_layout(title: &str) -> Value {
    json!({
        "title": { "text": title },
        "margin": { "t": 60, "r": 20, "l": 50, "b": 40 },
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "height": 350
    })
}

/// Gauge with four severity bands and a threshold marker at `value`.
pub fn bmi_gauge(value: f64) -> Chart {
    let trace = json!({
        "type": "indicator",
        "mode": "gauge+number",
        "value": value,
        "domain": { "x": [0, 1], "y": [0, 1] },
        "title": { "text": "BMI" },
        "gauge": {
            "axis": { "range": [null, BMI_GAUGE_MAX] },
            "steps": [
                { "range": [0.0, NORMAL_FROM], "color": "lightgray" },
                { "range": [NORMAL_FROM, OVERWEIGHT_FROM], "color": "green" },
                { "range": [OVERWEIGHT_FROM, OBESE_FROM], "color": "yellow" },
                { "range": [OBESE_FROM, BMI_GAUGE_MAX], "color": "red" }
            ],
            "threshold": {
                "line": { "color": "red", "width": 4 },
                "thickness": 0.75,
                "value": value
            }
        }
    });

    Chart {
        id: "chart-bmi".to_string(),
        title: "BMI".to_string(),
        data: vec![trace],
        layout: base_layout("BMI"),
    }
}

/// One bar per category: physical days, mental days and sleep hours side by side.
pub fn health_days_overview(physical_days: f64, mental_days: f64, sleep_hours: f64) -> Chart {
    let title = "Health Days Overview";
    let trace = json!({
        "type": "bar",
        "x": ["Physical Health", "Mental Health", "Sleep"],
        "y": [physical_days, mental_days, sleep_hours],
        "marker": { "color": "#3b82f6" }
    });

    let mut layout = base_layout(title);
    layout["xaxis"] = json!({ "title": { "text": "Category" } });
    layout["yaxis"] = json!({ "title": { "text": "Days" } });

    Chart {
        id: "chart-health-days".to_string(),
        title: title.to_string(),
        data: vec![trace],
        layout,
    }
}

/// Grouped bars of good vs bad days out of 30 for physical and mental health.
pub fn health_days_good_vs_bad(physical_days: f64, mental_days: f64) -> Chart {
    let title = "Health Days (last 30 days)";
    let categories = ["Physical Health", "Mental Health"];
    let good = json!({
        "type": "bar",
        "name": "Good days",
        "x": categories,
        "y": [DAYS_IN_PERIOD - physical_days, DAYS_IN_PERIOD - mental_days],
        "marker": { "color": "#22c55e" }
    });
    let bad = json!({
        "type": "bar",
        "name": "Bad days",
        "x": categories,
        "y": [physical_days, mental_days],
        "marker": { "color": "#ef4444" }
    });

    let mut layout = base_layout(title);
    layout["barmode"] = json!("group");
    layout["yaxis"] = json!({ "title": { "text": "Days" }, "range": [0.0, DAYS_IN_PERIOD] });
    layout["legend"] = json!({ "orientation": "h", "y": -0.2 });

    Chart {
        id: "chart-health-days".to_string(),
        title: title.to_string(),
        data: vec![good, bad],
        layout,
    }
}

/// Gauge with a delta against the 8 hour target; red/yellow/green/yellow bands.
pub fn sleep_gauge(hours: f64) -> Chart {
    let trace = json!({
        "type": "indicator",
        "mode": "gauge+number+delta",
        "value": hours,
        "delta": { "reference": SLEEP_TARGET_HOURS },
        "domain": { "x": [0, 1], "y": [0, 1] },
        "title": { "text": "Sleep Hours" },
        "gauge": {
            "axis": { "range": [0.0, SLEEP_GAUGE_MAX] },
            "bar": { "color": "#1e3a8a" },
            "steps": [
                { "range": [0.0, 6.0], "color": "red" },
                { "range": [6.0, 7.0], "color": "yellow" },
                { "range": [7.0, 9.0], "color": "green" },
                { "range": [9.0, SLEEP_GAUGE_MAX], "color": "yellow" }
            ],
            "threshold": {
                "line": { "color": "black", "width": 4 },
                "thickness": 0.75,
                "value": SLEEP_TARGET_HOURS
            }
        }
    });

    Chart {
        id: "chart-sleep".to_string(),
        title: "Sleep Hours".to_string(),
        data: vec![trace],
        layout: base_layout("Sleep Hours"),
    }
}

/// Pie of the risk factors that are set, or `None` when none are.
pub fn risk_factor_pie(present: &[&str]) -> Option<Chart> {
    if present.is_empty() {
        return None;
    }

    let title = "Present Risk Factors";
    let trace = json!({
        "type": "pie",
        "labels": present,
        "values": vec![1; present.len()],
        "textinfo": "label"
    });

    Some(Chart {
        id: "chart-risk-factors".to_string(),
        title: title.to_string(),
        data: vec![trace],
        layout: base_layout(title),
    })
}

/// One bar per schema risk factor: 1 when set, 0 when not.
pub fn risk_factor_bar(factors: &[(&str, bool)]) -> Chart {
    let title = "Risk Factors";
    let labels: Vec<&str> = factors.iter().map(|(label, _)| *label).collect();
    let values: Vec<u8> = factors.iter().map(|(_, set)| u8::from(*set)).collect();
    let colors: Vec<&str> = factors
        .iter()
        .map(|(_, set)| if *set { "#ef4444" } else { "#d1d5db" })
        .collect();

    let trace = json!({
        "type": "bar",
        "x": labels,
        "y": values,
        "marker": { "color": colors }
    });

    let mut layout = base_layout(title);
    layout["yaxis"] = json!({ "tickvals": [0, 1], "ticktext": ["No", "Yes"], "range": [0, 1.2] });
    layout["xaxis"] = json!({ "tickangle": -45 });

    Chart {
        id: "chart-risk-factors".to_string(),
        title: title.to_string(),
        data: vec![trace],
        layout,
    }
}
