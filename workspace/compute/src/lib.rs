//! Values derived from a submitted form: BMI, the visualizations and the
//! report shown in the output area.

pub mod bmi;
pub mod charts;
pub mod outcome;
pub mod report;

pub use bmi::{BmiCategory, bmi};
pub use charts::Chart;
pub use outcome::{SubmitOutcome, conclude};
pub use report::{BmiReading, PredictionReport, build_report};
