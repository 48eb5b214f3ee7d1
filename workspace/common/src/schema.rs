//! Field contract of the prediction endpoint.
//!
//! A [`Schema`] is a revision's field list with the BMI source applied. Its
//! keys are exactly the keys of every request built from it; widget
//! constraints live next to the keys so that a form can never hold a value the
//! endpoint was not designed for.

use crate::revision::{BmiSource, ChartPlan, ErrorHandling, Revision};
use serde::Serialize;

/// Request keys referenced outside the schema tables.
pub mod keys {
    pub const HEIGHT: &str = "HeightInMeters";
    pub const WEIGHT: &str = "WeightInKilograms";
    pub const BMI: &str = "BMI";
    pub const BMI_CATEGORY: &str = "BMI_category";
    pub const PHYSICAL_HEALTH_DAYS: &str = "PhysicalHealthDays";
    pub const MENTAL_HEALTH_DAYS: &str = "MentalHealthDays";
    pub const SLEEP_HOURS: &str = "SleepHours";
    pub const AGE_CATEGORY: &str = "AgeCategory";
    pub const SEX: &str = "Sex";
    pub const RACE_ETHNICITY: &str = "RaceEthnicityCategory";
    pub const GENERAL_HEALTH: &str = "GeneralHealth";
    pub const LAST_CHECKUP: &str = "LastCheckupTime";
    pub const SMOKER_STATUS: &str = "SmokerStatus";
    pub const E_CIGARETTE_USAGE: &str = "ECigaretteUsage";
}

/// Numeric input bounded by `[min, max]` and moved in `step` increments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    /// Decimal places kept after snapping to `step`
    pub precision: u32,
    /// Values are whole numbers and are sent as JSON integers
    pub integer: bool,
}

impl Slider {
    const fn float(min: f64, max: f64, step: f64, default: f64, precision: u32) -> Self {
        Self { min, max, step, default, precision, integer: false }
    }

    const fn int(min: i64, max: i64, default: i64) -> Self {
        Self {
            min: min as f64,
            max: max as f64,
            step: 1.0,
            default: default as f64,
            precision: 0,
            integer: true,
        }
    }

    /// Moves an arbitrary finite number onto the slider track.
    pub fn constrain(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = (self.min + steps * self.step).min(self.max);
        let scale = 10f64.powi(self.precision as i32);
        (snapped * scale).round() / scale
    }
}

/// Closed list of options with a preselected one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Select {
    pub options: &'static [&'static str],
    pub default: usize,
}

impl Select {
    pub fn default_option(&self) -> &'static str {
        self.options[self.default]
    }

    pub fn find(&self, value: &str) -> Option<&'static str> {
        self.options.iter().copied().find(|option| *option == value)
    }
}

/// Yes/no risk indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Toggle {
    pub default: bool,
    /// Shown as a True/False radio pair rather than a checkbox
    pub radio: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "lowercase")]
pub enum Widget {
    Slider(Slider),
    Select(Select),
    Toggle(Toggle),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub widget: Widget,
}

impl Field {
    const fn slider(key: &'static str, label: &'static str, slider: Slider) -> Self {
        Self { key, label, widget: Widget::Slider(slider) }
    }

    const fn select(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
        default: usize,
    ) -> Self {
        Self { key, label, widget: Widget::Select(Select { options, default }) }
    }

    const fn toggle(key: &'static str, label: &'static str, default: bool) -> Self {
        Self { key, label, widget: Widget::Toggle(Toggle { default, radio: false }) }
    }

    /// True/False radio labelled with the raw field key.
    const fn radio(key: &'static str, default: bool) -> Self {
        Self { key, label: key, widget: Widget::Toggle(Toggle { default, radio: true }) }
    }

    pub fn is_risk_factor(&self) -> bool {
        matches!(self.widget, Widget::Toggle(_))
    }
}

// ===================== Options =====================

const AGES_OLDEST_FIRST: &[&str] = &[
    "Age 80 or older",
    "Age 75 to 79",
    "Age 70 to 74",
    "Age 65 to 69",
    "Age 60 to 64",
    "Age 55 to 59",
    "Age 50 to 54",
    "Age 45 to 49",
    "Age 40 to 44",
    "Age 35 to 39",
    "Age 30 to 34",
    "Age 25 to 29",
    "Age 18 to 24",
];

const AGES_YOUNGEST_FIRST: &[&str] = &[
    "Age 18 to 24",
    "Age 25 to 29",
    "Age 30 to 34",
    "Age 35 to 39",
    "Age 40 to 44",
    "Age 45 to 49",
    "Age 50 to 54",
    "Age 55 to 59",
    "Age 60 to 64",
    "Age 65 to 69",
    "Age 70 to 74",
    "Age 75 to 79",
    "Age 80 or older",
];

const SEXES: &[&str] = &["Male", "Female"];

const RACES: &[&str] = &[
    "White only, Non-Hispanic",
    "Hispanic",
    "Black only, Non-Hispanic",
    "Other race only, Non-Hispanic",
];

const GENERAL_HEALTH_MIXED: &[&str] = &["Good", "Very good", "Fair", "Excellent", "Poor"];

const GENERAL_HEALTH_RANKED: &[&str] = &["Excellent", "Very good", "Good", "Fair", "Poor"];

const CHECKUPS: &[&str] = &[
    "Within past year (anytime less than 12 months ago)",
    "Within past 2 years (1 year but less than 2 years ago)",
    "Within past 5 years (2 years but less than 5 years ago)",
    "5 or more years ago",
];

const BMI_CATEGORIES: &[&str] = &["Underweight", "Normal", "Overweight", "Obese"];

const SMOKERS_NEVER_FIRST: &[&str] = &[
    "Never smoked",
    "Former smoker",
    "Current smoker - now smokes every day",
    "Current smoker - now smokes some days",
];

const SMOKERS_CURRENT_FIRST: &[&str] = &[
    "Current smoker - now smokes every day",
    "Current smoker - now smokes some days",
    "Former smoker",
    "Never smoked",
];

const E_CIGARETTES: &[&str] = &[
    "Never used e-cigarettes in my entire life",
    "Not at all (right now)",
    "Use them some days",
    "Use them every day",
];

// ===================== Risk factors =====================

/// Every flag key, with the label the derived revisions show; the full
/// revision labels its radios with the key itself.
const FULL_RISK_FACTORS: &[(&str, &str)] = &[
    ("PhysicalActivities", "Physical activities"),
    ("AlcoholDrinkers", "Alcohol drinker"),
    ("HadAsthma", "Had asthma"),
    ("HadSkinCancer", "Had skin cancer"),
    ("HadCOPD", "Had COPD"),
    ("HadDepressiveDisorder", "Had depressive disorder"),
    ("HadKidneyDisease", "Had kidney disease"),
    ("HadArthritis", "Had arthritis"),
    ("HadDiabetes", "Had diabetes"),
    ("DeafOrHardOfHearing", "Deaf or hard of hearing"),
    ("BlindOrVisionDifficulty", "Blind or vision difficulty"),
    ("DifficultyConcentrating", "Difficulty concentrating"),
    ("DifficultyWalking", "Difficulty walking"),
    ("DifficultyDressingBathing", "Difficulty dressing or bathing"),
    ("DifficultyErrands", "Difficulty with errands"),
    ("ChestScan", "Chest scan"),
    ("HIVTesting", "HIV testing"),
    ("FluVaxLast12", "Flu vaccine in last 12 months"),
    ("PneumoVaxEver", "Pneumonia vaccine ever"),
    ("HighRiskLastYear", "High risk last year"),
    ("CovidPos", "COVID positive"),
];

/// Screening flags the extended revision never sent.
const SCREENING_FLAGS: &[&str] = &[
    "ChestScan",
    "HIVTesting",
    "FluVaxLast12",
    "PneumoVaxEver",
    "CovidPos",
];

const COMPACT_RISK_FACTORS: &[&str] = &[
    "AlcoholDrinkers",
    "HadDiabetes",
    "HadSkinCancer",
    "HadKidneyDisease",
    "HighRiskLastYear",
];

fn risk_label(key: &str) -> &'static str {
    FULL_RISK_FACTORS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or("Unknown risk factor")
}

// ===================== Schemas =====================

fn full_fields(bmi_source: BmiSource) -> Vec<Field> {
    let mut fields = vec![
        Field::slider(keys::HEIGHT, "Height (meters)", Slider::float(0.91, 2.41, 0.01, 1.75, 2)),
        Field::slider(keys::WEIGHT, "Weight (kg)", Slider::float(30.39, 263.08, 0.01, 70.5, 2)),
    ];
    if bmi_source == BmiSource::Supplied {
        fields.push(Field::slider(keys::BMI, "BMI", Slider::float(12.11, 97.65, 0.01, 23.0, 2)));
    }
    fields.extend([
        Field::slider(keys::PHYSICAL_HEALTH_DAYS, "Physical Health Days", Slider::int(0, 30, 2)),
        Field::slider(keys::MENTAL_HEALTH_DAYS, "Mental Health Days", Slider::int(0, 30, 1)),
        Field::slider(keys::SLEEP_HOURS, "Sleep Hours", Slider::int(1, 24, 7)),
        Field::select(keys::AGE_CATEGORY, "Age Category", AGES_OLDEST_FIRST, 9),
        Field::select(keys::SEX, "Sex", SEXES, 0),
        Field::select(keys::RACE_ETHNICITY, "Race/Ethnicity", RACES, 0),
        Field::select(keys::GENERAL_HEALTH, "General Health", GENERAL_HEALTH_MIXED, 1),
        Field::select(keys::LAST_CHECKUP, "Last Checkup Time", CHECKUPS, 0),
        Field::select(keys::BMI_CATEGORY, "BMI Category", BMI_CATEGORIES, 1),
        Field::select(keys::SMOKER_STATUS, "Smoker Status", SMOKERS_NEVER_FIRST, 0),
        Field::select(keys::E_CIGARETTE_USAGE, "E-Cigarette Usage", E_CIGARETTES, 0),
    ]);
    fields.extend(
        FULL_RISK_FACTORS
            .iter()
            .map(|&(key, _)| Field::radio(key, true)),
    );
    fields
}

fn derived_revision_fields(revision: Revision, bmi_source: BmiSource) -> Vec<Field> {
    let sleep = match revision {
        Revision::Extended => Slider::float(0.0, 24.0, 0.5, 7.0, 1),
        _ => Slider::int(0, 24, 7),
    };

    let mut fields = vec![
        Field::slider(keys::HEIGHT, "Height (meters)", Slider::float(0.9, 2.5, 0.01, 1.7, 2)),
        Field::slider(keys::WEIGHT, "Weight (kg)", Slider::float(30.0, 300.0, 0.5, 70.0, 1)),
    ];
    if bmi_source == BmiSource::Supplied {
        fields.push(Field::slider(keys::BMI, "BMI", Slider::float(12.0, 100.0, 0.1, 24.0, 1)));
    }
    fields.extend([
        Field::slider(keys::PHYSICAL_HEALTH_DAYS, "Physical Health Days", Slider::int(0, 30, 0)),
        Field::slider(keys::MENTAL_HEALTH_DAYS, "Mental Health Days", Slider::int(0, 30, 0)),
        Field::slider(keys::SLEEP_HOURS, "Sleep Hours", sleep),
        Field::select(keys::SEX, "Sex", SEXES, 0),
        Field::select(keys::AGE_CATEGORY, "Age Category", AGES_YOUNGEST_FIRST, 2),
        Field::select(keys::RACE_ETHNICITY, "Race/Ethnicity", RACES, 0),
        Field::select(keys::GENERAL_HEALTH, "General Health", GENERAL_HEALTH_RANKED, 2),
        Field::select(keys::LAST_CHECKUP, "Last Checkup Time", CHECKUPS, 0),
        Field::select(keys::SMOKER_STATUS, "Smoker Status", SMOKERS_CURRENT_FIRST, 3),
        Field::select(keys::E_CIGARETTE_USAGE, "E-Cigarette Usage", E_CIGARETTES, 0),
    ]);

    match revision {
        Revision::Compact => fields.extend(
            COMPACT_RISK_FACTORS
                .iter()
                .map(|&key| Field::toggle(key, risk_label(key), false)),
        ),
        _ => fields.extend(
            FULL_RISK_FACTORS
                .iter()
                .filter(|(key, _)| !SCREENING_FLAGS.contains(key))
                .map(|&(key, label)| Field::toggle(key, label, false)),
        ),
    }
    fields
}

/// A revision's field list with the BMI source applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub revision: Revision,
    pub bmi_source: BmiSource,
    pub fields: Vec<Field>,
}

impl Schema {
    /// Resolves the schema for `revision`, using its own BMI source unless overridden.
    pub fn resolve(revision: Revision, bmi_source: Option<BmiSource>) -> Self {
        let bmi_source = bmi_source.unwrap_or_else(|| revision.default_bmi_source());
        let fields = match revision {
            Revision::Full => full_fields(bmi_source),
            Revision::Extended | Revision::Compact => derived_revision_fields(revision, bmi_source),
        };
        tracing::debug!(
            "Resolved schema: revision={}, bmi_source={}, {} fields",
            revision,
            bmi_source,
            fields.len()
        );
        Self { revision, bmi_source, fields }
    }

    pub fn for_revision(revision: Revision) -> Self {
        Self::resolve(revision, None)
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.key)
    }

    pub fn risk_factors(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.is_risk_factor())
    }

    pub fn error_handling(&self) -> ErrorHandling {
        self.revision.error_handling()
    }

    pub fn chart_plan(&self) -> ChartPlan {
        self.revision.chart_plan()
    }
}
