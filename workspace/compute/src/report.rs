use crate::bmi::{BmiCategory, bmi};
use crate::charts::{self, Chart};
use common::schema::keys;
use common::{BmiSource, HealthChart, PredictionRequest, PredictionResponse, RiskChart, Schema};
use serde::Serialize;

pub const NO_RISK_FACTORS_NOTE: &str = "No risk factors selected.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiReading {
    pub value: f64,
    pub category: BmiCategory,
    pub source: BmiSource,
}

/// Everything the output area shows after a successful prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    /// The endpoint's `Prediction` string, untouched
    pub prediction: String,
    pub bmi: BmiReading,
    pub charts: Vec<Chart>,
    /// Text shown in place of charts that have nothing to draw
    pub notes: Vec<String>,
}

/// BMI shown on the gauge: the slider value when supplied, weight / height^2 otherwise.
pub fn bmi_reading(schema: &Schema, request: &PredictionRequest) -> BmiReading {
    let supplied = match schema.bmi_source {
        BmiSource::Supplied => request.number(keys::BMI),
        BmiSource::Derived => None,
    };

    let value = supplied.unwrap_or_else(|| {
        let weight = request.number(keys::WEIGHT).unwrap_or_default();
        let height = request.number(keys::HEIGHT).unwrap_or(1.0);
        bmi(weight, height)
    });

    BmiReading {
        value,
        category: BmiCategory::from_bmi(value),
        source: schema.bmi_source,
    }
}

/// Builds the charts of the schema's chart plan, in display order.
pub fn build_charts(
    schema: &Schema,
    request: &PredictionRequest,
    bmi_value: f64,
) -> (Vec<Chart>, Vec<String>) {
    let plan = schema.chart_plan();
    let physical = request.number(keys::PHYSICAL_HEALTH_DAYS).unwrap_or_default();
    let mental = request.number(keys::MENTAL_HEALTH_DAYS).unwrap_or_default();
    let sleep = request.number(keys::SLEEP_HOURS).unwrap_or_default();

    let mut built = vec![charts::bmi_gauge(bmi_value)];
    let mut notes = Vec::new();

    built.push(match plan.health {
        HealthChart::Overview => charts::health_days_overview(physical, mental, sleep),
        HealthChart::GoodVsBad => charts::health_days_good_vs_bad(physical, mental),
    });

    if plan.sleep_gauge {
        built.push(charts::sleep_gauge(sleep));
    }

    let factors: Vec<(&str, bool)> = schema
        .risk_factors()
        .map(|field| (field.label, request.flag(field.key).unwrap_or(false)))
        .collect();

    match plan.risk {
        RiskChart::Pie => {
            let present: Vec<&str> = factors
                .iter()
                .filter(|(_, set)| *set)
                .map(|(label, _)| *label)
                .collect();
            match charts::risk_factor_pie(&present) {
                Some(chart) => built.push(chart),
                None => notes.push(NO_RISK_FACTORS_NOTE.to_string()),
            }
        }
        RiskChart::Bar => built.push(charts::risk_factor_bar(&factors)),
    }

    tracing::debug!("Built {} charts and {} notes", built.len(), notes.len());
    (built, notes)
}

pub fn build_report(
    schema: &Schema,
    request: &PredictionRequest,
    response: PredictionResponse,
) -> PredictionReport {
    let bmi = bmi_reading(schema, request);
    let (charts, notes) = build_charts(schema, request, bmi.value);
    PredictionReport {
        prediction: response.prediction,
        bmi,
        charts,
        notes,
    }
}
