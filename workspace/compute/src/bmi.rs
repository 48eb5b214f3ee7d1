use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower edges of the categories after Underweight.
pub const NORMAL_FROM: f64 = 18.5;
pub const OVERWEIGHT_FROM: f64 = 25.0;
pub const OBESE_FROM: f64 = 30.0;

/// Body-mass index in kg/m^2.
///
/// Callers guarantee `height_m > 0`; the form's height slider never goes below its minimum.
pub fn bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Half-open bins: `[0, 18.5)`, `[18.5, 25)`, `[25, 30)`, `[30, inf)`.
    pub fn from_bmi(value: f64) -> Self {
        if value < NORMAL_FROM {
            BmiCategory::Underweight
        } else if value < OVERWEIGHT_FROM {
            BmiCategory::Normal
        } else if value < OBESE_FROM {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
