//! The three request schemas the prediction endpoint has been fed over time,
//! and the presentation/error policies that travel with each of them.

use crate::error::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which survey schema the client speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Revision {
    /// 21 risk flags, user-supplied BMI and BMI category
    #[default]
    Full,
    /// 16 risk flags, BMI derived client-side
    Extended,
    /// 5 risk flags, BMI derived client-side, no error handling
    Compact,
}

impl Revision {
    pub const ALL: [Revision; 3] = [Revision::Full, Revision::Extended, Revision::Compact];

    pub fn as_str(&self) -> &'static str {
        match self {
            Revision::Full => "full",
            Revision::Extended => "extended",
            Revision::Compact => "compact",
        }
    }

    pub fn default_bmi_source(&self) -> BmiSource {
        match self {
            Revision::Full => BmiSource::Supplied,
            Revision::Extended | Revision::Compact => BmiSource::Derived,
        }
    }

    pub fn error_handling(&self) -> ErrorHandling {
        match self {
            Revision::Full | Revision::Extended => ErrorHandling::Inline,
            Revision::Compact => ErrorHandling::Propagate,
        }
    }

    pub fn default_api_url(&self) -> &'static str {
        match self {
            Revision::Full | Revision::Extended => "http://146.190.78.32:8080",
            Revision::Compact => "http://localhost:8000",
        }
    }

    pub fn chart_plan(&self) -> ChartPlan {
        match self {
            Revision::Full => ChartPlan {
                health: HealthChart::Overview,
                sleep_gauge: false,
                risk: RiskChart::Pie,
            },
            Revision::Extended => ChartPlan {
                health: HealthChart::GoodVsBad,
                sleep_gauge: true,
                risk: RiskChart::Bar,
            },
            Revision::Compact => ChartPlan {
                health: HealthChart::GoodVsBad,
                sleep_gauge: false,
                risk: RiskChart::Bar,
            },
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Revision {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(Revision::Full),
            "extended" => Ok(Revision::Extended),
            "compact" => Ok(Revision::Compact),
            _ => Err(ParseEnumError {
                kind: "revision",
                value: s.to_string(),
                expected: "full, extended, compact",
            }),
        }
    }
}

/// Where the BMI value shown (and possibly sent) comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiSource {
    /// Computed as weight / height^2; the endpoint computes its own and no `BMI` key is sent
    Derived,
    /// A user-controlled slider whose value is sent as `BMI`
    Supplied,
}

impl BmiSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiSource::Derived => "derived",
            BmiSource::Supplied => "supplied",
        }
    }
}

impl fmt::Display for BmiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BmiSource {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "derived" => Ok(BmiSource::Derived),
            "supplied" => Ok(BmiSource::Supplied),
            _ => Err(ParseEnumError {
                kind: "BMI source",
                value: s.to_string(),
                expected: "derived, supplied",
            }),
        }
    }
}

/// What a submit does with a failed prediction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorHandling {
    /// Every failure becomes an inline message in the output area
    Inline,
    /// Failures are handed back to the caller untouched
    Propagate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthChart {
    /// Physical, mental and sleep in one bar chart
    Overview,
    /// Good vs bad days out of 30 for physical and mental health
    GoodVsBad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskChart {
    Pie,
    Bar,
}

/// Charts rendered after a successful prediction, besides the BMI gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPlan {
    pub health: HealthChart,
    pub sleep_gauge: bool,
    pub risk: RiskChart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revision_from_str() {
        assert_eq!("full".parse::<Revision>(), Ok(Revision::Full));
        assert_eq!(" Extended ".parse::<Revision>(), Ok(Revision::Extended));
        assert_eq!("COMPACT".parse::<Revision>(), Ok(Revision::Compact));

        let err = "v2".parse::<Revision>().unwrap_err();
        assert_eq!(err.value, "v2");
        assert!(err.to_string().contains("full, extended, compact"));
    }

    #[test]
    fn test_revision_serde_is_lowercase() {
        let json = serde_json::to_string(&Revision::Extended).unwrap();
        assert_eq!(json, "\"extended\"");
        let back: Revision = serde_json::from_str("\"compact\"").unwrap();
        assert_eq!(back, Revision::Compact);
    }

    #[test]
    fn test_revision_policies() {
        assert_eq!(Revision::Full.default_bmi_source(), BmiSource::Supplied);
        assert_eq!(Revision::Extended.default_bmi_source(), BmiSource::Derived);
        assert_eq!(Revision::Compact.error_handling(), ErrorHandling::Propagate);
        assert_eq!(Revision::Full.error_handling(), ErrorHandling::Inline);
        assert!(Revision::Compact.default_api_url().contains("localhost"));
        assert!(Revision::Extended.chart_plan().sleep_gauge);
        assert_eq!(Revision::Full.chart_plan().risk, RiskChart::Pie);
    }

    #[test]
    fn test_bmi_source_from_str() {
        assert_eq!("supplied".parse::<BmiSource>(), Ok(BmiSource::Supplied));
        assert!("measured".parse::<BmiSource>().is_err());
    }
}
