use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::config::Settings;
use common::{BmiSource, Field, FormState, Revision, Schema};

#[derive(Serialize)]
struct FieldContract<'a> {
    #[serde(flatten)]
    field: &'a Field,
    default: Value,
}

#[derive(Serialize)]
struct SchemaContract<'a> {
    revision: Revision,
    bmi_source: BmiSource,
    fields: Vec<FieldContract<'a>>,
}

/// The resolved field contract as pretty JSON: widget constraints plus the
/// value each field is sent with when left untouched.
pub fn print_schema(settings: &Settings) -> Result<String> {
    let schema = Schema::resolve(settings.revision, settings.bmi_source);
    let defaults = FormState::new(schema.clone()).collect();

    let contract = SchemaContract {
        revision: schema.revision,
        bmi_source: schema.bmi_source,
        fields: schema
            .fields
            .iter()
            .map(|field| FieldContract {
                field,
                default: defaults.get(field.key).cloned().unwrap_or(Value::Null),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&contract)?)
}
