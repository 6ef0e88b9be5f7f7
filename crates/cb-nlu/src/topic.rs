//! Topic recognition: cases, vaccinations, both or neither.

use std::sync::Arc;

use cb_protocol::Topic;
use cb_treequery::Sentence;

use crate::patterns::PatternTable;

/// Decides whether a sentence is about cases, vaccinations, or both.
#[derive(Debug, Clone)]
pub struct TopicRecognizer {
    patterns: Arc<PatternTable>,
}

impl TopicRecognizer {
    pub fn new(patterns: Arc<PatternTable>) -> Self {
        Self { patterns }
    }

    pub fn recognize(&self, sentence: &Sentence) -> Topic {
        Topic::from_flags(
            self.is_vaccine_topic(sentence),
            self.is_cases_topic(sentence),
        )
    }

    /// The sentence contains a vaccination trigger.
    pub fn is_vaccine_topic(&self, sentence: &Sentence) -> bool {
        self.patterns.vaccine_trigger.matches(sentence)
    }

    /// The sentence contains a case trigger, or a COVID token that is not
    /// directly linked to a vaccination token.
    ///
    /// "How many people got COVID" is about cases; "How many people got the
    /// COVID vaccine" is not.
    pub fn is_cases_topic(&self, sentence: &Sentence) -> bool {
        if self.patterns.covid.matches(sentence) && !self.patterns.covid_vaccine.matches(sentence) {
            return true;
        }
        self.patterns.case_trigger.matches(sentence)
    }
}
