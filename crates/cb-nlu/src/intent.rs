//! Intent recognition along four independent axes.
//!
//! Each axis has its own ordered list of pattern checks and falls back to
//! `Unknown`. No recognizer looks at another's result; they are only
//! combined by the validator.

use std::sync::Arc;

use cb_protocol::{CalculationType, Intent, MeasurementType, ValueDomain, ValueType};
use cb_treequery::Sentence;

use crate::patterns::PatternTable;

#[derive(Debug, Clone)]
pub struct IntentRecognizer {
    patterns: Arc<PatternTable>,
}

impl IntentRecognizer {
    pub fn new(patterns: Arc<PatternTable>) -> Self {
        Self { patterns }
    }

    pub fn recognize(&self, sentence: &Sentence) -> Intent {
        Intent::new(
            self.recognize_value_type(sentence),
            self.recognize_calculation_type(sentence),
            self.recognize_measurement_type(sentence),
            self.recognize_value_domain(sentence),
        )
    }

    /// "how many" → number; "which day"/"when" → day; "which country"/
    /// "where" → location; a bare "number of" → number.
    pub fn recognize_value_type(&self, sentence: &Sentence) -> ValueType {
        let p = &self.patterns;
        if p.how_many.matches(sentence) {
            ValueType::Number
        } else if p.what_day.matches(sentence) {
            ValueType::Day
        } else if p.what_location.matches(sentence) {
            ValueType::Location
        } else if p.number.matches(sentence) {
            ValueType::Number
        } else {
            ValueType::Unknown
        }
    }

    /// Superlatives first, then explicit sums, then plain counts.
    pub fn recognize_calculation_type(&self, sentence: &Sentence) -> CalculationType {
        let p = &self.patterns;
        if p.maximum.matches(sentence) {
            CalculationType::Maximum
        } else if p.minimum.matches(sentence) {
            CalculationType::Minimum
        } else if p.sum.matches(sentence) {
            CalculationType::Sum
        } else if p.raw_value.matches(sentence) {
            CalculationType::RawValue
        } else {
            CalculationType::Unknown
        }
    }

    /// Explicit running-total markers ("in total", "so far") win over daily
    /// markers; a bare present perfect only counts when no period is named.
    pub fn recognize_measurement_type(&self, sentence: &Sentence) -> MeasurementType {
        let p = &self.patterns;
        if p.cumulative.matches(sentence) {
            MeasurementType::Cumulative
        } else if p.daily.matches(sentence) {
            MeasurementType::Daily
        } else if p.present_perfect.matches(sentence) {
            MeasurementType::Cumulative
        } else {
            MeasurementType::Unknown
        }
    }

    /// The trigger attached to the quantity word decides; otherwise any
    /// vaccination trigger, then any case or COVID trigger.
    pub fn recognize_value_domain(&self, sentence: &Sentence) -> ValueDomain {
        let p = &self.patterns;
        if p.vaccine_quantity.matches(sentence) {
            ValueDomain::Vaccinations
        } else if p.cases_quantity.matches(sentence) {
            ValueDomain::Cases
        } else if p.vaccine_trigger.matches(sentence) {
            ValueDomain::Vaccinations
        } else if p.case_trigger.matches(sentence) || p.covid.matches(sentence) {
            ValueDomain::Cases
        } else {
            ValueDomain::Unknown
        }
    }
}
