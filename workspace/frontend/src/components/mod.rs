pub mod error;
pub mod form_field;
pub mod layout;
pub mod loading;
pub mod plotly_chart;
pub mod prediction_page;
pub mod report;
