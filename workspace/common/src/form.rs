//! Current widget values of the prediction form.
//!
//! Every write goes through the widget that owns the key: sliders clamp and
//! snap, selects only take listed options, toggles only take booleans. Reading
//! the form back with [`FormState::collect`] therefore cannot produce an
//! out-of-range value or a key the schema does not list.

use crate::error::FormError;
use crate::request::PredictionRequest;
use crate::schema::{Field, Schema, Widget};
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Choice(&'static str),
    Flag(bool),
}

impl FieldValue {
    fn to_json(self) -> Value {
        match self {
            FieldValue::Integer(v) => Value::from(v),
            FieldValue::Float(v) => Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null),
            FieldValue::Choice(v) => Value::from(v),
            FieldValue::Flag(v) => Value::Bool(v),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

fn default_value(field: &Field) -> FieldValue {
    match field.widget {
        Widget::Slider(slider) if slider.integer => FieldValue::Integer(slider.default as i64),
        Widget::Slider(slider) => FieldValue::Float(slider.default),
        Widget::Select(select) => FieldValue::Choice(select.default_option()),
        Widget::Toggle(toggle) => FieldValue::Flag(toggle.default),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    schema: Schema,
    values: BTreeMap<&'static str, FieldValue>,
}

impl FormState {
    /// A form showing every widget at its default.
    pub fn new(schema: Schema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|field| (field.key, default_value(field)))
            .collect();
        Self { schema, values }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn get(&self, key: &str) -> Option<FieldValue> {
        self.values.get(key).copied()
    }

    fn field(&self, key: &str) -> Result<Field, FormError> {
        self.schema
            .field(key)
            .copied()
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }

    /// Moves a slider; returns the value it settled on.
    pub fn set_number(&mut self, key: &str, value: f64) -> Result<f64, FormError> {
        let field = self.field(key)?;
        let Widget::Slider(slider) = field.widget else {
            return Err(FormError::WrongType { key: key.to_string(), expected: "a number" });
        };
        if !value.is_finite() {
            return Err(FormError::NotANumber { key: key.to_string(), value: value.to_string() });
        }

        let settled = slider.constrain(value);
        if settled != value {
            tracing::debug!("Slider {} moved from {} to {}", key, value, settled);
        }
        let stored = if slider.integer {
            FieldValue::Integer(settled as i64)
        } else {
            FieldValue::Float(settled)
        };
        self.values.insert(field.key, stored);
        Ok(settled)
    }

    pub fn select(&mut self, key: &str, option: &str) -> Result<(), FormError> {
        let field = self.field(key)?;
        let Widget::Select(select) = field.widget else {
            return Err(FormError::WrongType { key: key.to_string(), expected: "one of its options" });
        };
        let choice = select.find(option).ok_or_else(|| FormError::NotAnOption {
            key: key.to_string(),
            value: option.to_string(),
        })?;
        self.values.insert(field.key, FieldValue::Choice(choice));
        Ok(())
    }

    pub fn set_flag(&mut self, key: &str, value: bool) -> Result<(), FormError> {
        let field = self.field(key)?;
        if !field.is_risk_factor() {
            return Err(FormError::WrongType { key: key.to_string(), expected: "a number or an option" });
        }
        self.values.insert(field.key, FieldValue::Flag(value));
        Ok(())
    }

    /// Applies a raw text value, as submitted by an HTML form or a `KEY=VALUE` flag.
    pub fn apply_str(&mut self, key: &str, raw: &str) -> Result<(), FormError> {
        let field = self.field(key)?;
        match field.widget {
            Widget::Slider(_) => {
                let value = raw.trim().parse::<f64>().map_err(|_| FormError::NotANumber {
                    key: key.to_string(),
                    value: raw.to_string(),
                })?;
                self.set_number(key, value).map(|_| ())
            }
            Widget::Select(_) => self.select(key, raw),
            Widget::Toggle(_) => {
                let value = match raw.trim().to_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    _ => {
                        return Err(FormError::WrongType {
                            key: key.to_string(),
                            expected: "true or false",
                        });
                    }
                };
                self.set_flag(key, value)
            }
        }
    }

    /// Applies a JSON scalar to the widget owning `key`.
    pub fn apply_json(&mut self, key: &str, value: &Value) -> Result<(), FormError> {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(v) => self.set_number(key, v).map(|_| ()),
                None => Err(FormError::NotANumber { key: key.to_string(), value: n.to_string() }),
            },
            Value::String(s) => self.apply_str(key, s),
            Value::Bool(b) => self.set_flag(key, *b),
            _ => Err(FormError::WrongType { key: key.to_string(), expected: "a scalar value" }),
        }
    }

    /// Applies every entry of a JSON object, stopping at the first rejection.
    pub fn apply_all(&mut self, values: &Map<String, Value>) -> Result<(), FormError> {
        for (key, value) in values {
            self.apply_json(key, value)?;
        }
        Ok(())
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.as_f64())
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(FieldValue::Flag(v)) => Some(v),
            _ => None,
        }
    }

    /// Reads the widgets into a fresh request record.
    pub fn collect(&self) -> PredictionRequest {
        let fields: Map<String, Value> = self
            .schema
            .fields
            .iter()
            .map(|field| {
                let value = self
                    .values
                    .get(field.key)
                    .copied()
                    .unwrap_or_else(|| default_value(field));
                (field.key.to_string(), value.to_json())
            })
            .collect();
        tracing::trace!("Collected {} fields for revision {}", fields.len(), self.schema.revision);
        PredictionRequest::from_fields(fields)
    }
}
