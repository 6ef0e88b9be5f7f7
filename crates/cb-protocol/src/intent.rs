use serde::{Deserialize, Serialize};

/// What kind of answer is sought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// A count.
    Number,
    /// A date.
    Day,
    /// A place.
    Location,
    #[default]
    Unknown,
}

/// How the value is derived from the time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CalculationType {
    RawValue,
    Sum,
    Maximum,
    Minimum,
    #[default]
    Unknown,
}

/// Whether the statistic is a daily delta or a running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementType {
    Daily,
    Cumulative,
    #[default]
    Unknown,
}

/// Which dataset a numeric answer is drawn from.
///
/// Distinct from [`crate::Topic`]: the topic is the subject of the whole
/// sentence, the domain is the quantity the answer ranks or counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValueDomain {
    Cases,
    Vaccinations,
    #[default]
    Unknown,
}

/// The four independent intent axes of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Intent {
    #[serde(default)]
    pub value_type: ValueType,
    #[serde(default)]
    pub calculation_type: CalculationType,
    #[serde(default)]
    pub measurement_type: MeasurementType,
    #[serde(default)]
    pub value_domain: ValueDomain,
}

impl Intent {
    pub fn new(
        value_type: ValueType,
        calculation_type: CalculationType,
        measurement_type: MeasurementType,
        value_domain: ValueDomain,
    ) -> Self {
        Self {
            value_type,
            calculation_type,
            measurement_type,
            value_domain,
        }
    }

    /// True if any axis is still `Unknown`.
    pub fn has_unknown_axis(&self) -> bool {
        self.value_type == ValueType::Unknown
            || self.calculation_type == CalculationType::Unknown
            || self.measurement_type == MeasurementType::Unknown
            || self.value_domain == ValueDomain::Unknown
    }
}
