//! Shared test harness for E2E integration tests.
//!
//! Parses are written out token by token, the way the annotation service
//! would return them, and served through a `MockAnnotator` so the real
//! lexicon, pattern tables, recognizers and validator all run.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;

use cb_nlu::{LexiconConfig, MockAnnotator, Pipeline, Understanding};
use cb_treequery::{EntityLabel, SentenceBuilder};

/// Reference date for every scenario (a Wednesday).
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 3, 17).unwrap()
}

// ── Fixture sentences ───────────────────────────────────────

pub const PER_DAY: &str = "How many people get vaccinated per day?";
pub const SUM_OF_TOTAL: &str = "What is the sum of the total number of cases?";
pub const MOST_VACCINATED_DAY: &str = "On which day were the most people vaccinated in Germany?";
pub const CASES_AND_VACCINATIONS: &str = "How many cases and vaccinations were there yesterday?";
pub const GOT_COVID_VACCINE: &str = "How many people got the COVID vaccine?";
pub const GOT_COVID_YESTERDAY: &str = "How many people got COVID yesterday?";
pub const VACCINATED_UK_SO_FAR: &str = "How many people have been vaccinated in the UK so far?";
pub const FEWEST_INFECTIONS: &str = "Which country had the fewest infections last week?";
pub const VACCINATED_THIS_WEEK: &str = "How many people have been vaccinated this week?";
pub const GERMAN_CASES_THIS_YEAR: &str = "How many cases have there been in Germany this year?";

pub fn per_day() -> SentenceBuilder {
    SentenceBuilder::new(PER_DAY)
        .token("How", "how", "ADV", "advmod", Some(1))
        .token("many", "many", "ADJ", "amod", Some(2))
        .token("people", "people", "NOUN", "nsubjpass", Some(4))
        .token("get", "get", "AUX", "auxpass", Some(4))
        .root("vaccinated", "vaccinate", "VERB")
        .token("per", "per", "ADP", "prep", Some(4))
        .token("day", "day", "NOUN", "pobj", Some(5))
        .token("?", "?", "PUNCT", "punct", Some(4))
}

pub fn sum_of_total() -> SentenceBuilder {
    SentenceBuilder::new(SUM_OF_TOTAL)
        .token("What", "what", "PRON", "attr", Some(1))
        .root("is", "be", "AUX")
        .token("the", "the", "DET", "det", Some(3))
        .token("sum", "sum", "NOUN", "nsubj", Some(1))
        .token("of", "of", "ADP", "prep", Some(3))
        .token("the", "the", "DET", "det", Some(7))
        .token("total", "total", "ADJ", "amod", Some(7))
        .token("number", "number", "NOUN", "pobj", Some(4))
        .token("of", "of", "ADP", "prep", Some(7))
        .token("cases", "case", "NOUN", "pobj", Some(8))
        .token("?", "?", "PUNCT", "punct", Some(1))
}

pub fn most_vaccinated_day() -> SentenceBuilder {
    SentenceBuilder::new(MOST_VACCINATED_DAY)
        .token("On", "on", "ADP", "prep", Some(7))
        .token("which", "which", "DET", "det", Some(2))
        .token("day", "day", "NOUN", "pobj", Some(0))
        .token("were", "be", "AUX", "auxpass", Some(7))
        .token("the", "the", "DET", "det", Some(6))
        .token("most", "most", "ADJ", "amod", Some(6))
        .token("people", "people", "NOUN", "nsubjpass", Some(7))
        .root("vaccinated", "vaccinate", "VERB")
        .token("in", "in", "ADP", "prep", Some(7))
        .token("Germany", "Germany", "PROPN", "pobj", Some(8))
        .token("?", "?", "PUNCT", "punct", Some(7))
        .entity(EntityLabel::Place, 9, 10)
}

pub fn cases_and_vaccinations() -> SentenceBuilder {
    SentenceBuilder::new(CASES_AND_VACCINATIONS)
        .token("How", "how", "ADV", "advmod", Some(1))
        .token("many", "many", "ADJ", "amod", Some(2))
        .token("cases", "case", "NOUN", "nsubj", Some(5))
        .token("and", "and", "CCONJ", "cc", Some(2))
        .token("vaccinations", "vaccination", "NOUN", "conj", Some(2))
        .root("were", "be", "VERB")
        .token("there", "there", "PRON", "expl", Some(5))
        .token("yesterday", "yesterday", "NOUN", "npadvmod", Some(5))
        .token("?", "?", "PUNCT", "punct", Some(5))
        .entity(EntityLabel::Date, 7, 8)
}

pub fn got_covid_vaccine() -> SentenceBuilder {
    SentenceBuilder::new(GOT_COVID_VACCINE)
        .token("How", "how", "ADV", "advmod", Some(1))
        .token("many", "many", "ADJ", "amod", Some(2))
        .token("people", "people", "NOUN", "nsubj", Some(3))
        .root("got", "get", "VERB")
        .token("the", "the", "DET", "det", Some(6))
        .token("COVID", "covid", "PROPN", "compound", Some(6))
        .token("vaccine", "vaccine", "NOUN", "dobj", Some(3))
        .token("?", "?", "PUNCT", "punct", Some(3))
}

pub fn got_covid_yesterday() -> SentenceBuilder {
    SentenceBuilder::new(GOT_COVID_YESTERDAY)
        .token("How", "how", "ADV", "advmod", Some(1))
        .token("many", "many", "ADJ", "amod", Some(2))
        .token("people", "people", "NOUN", "nsubj", Some(3))
        .root("got", "get", "VERB")
        .token("COVID", "covid", "PROPN", "dobj", Some(3))
        .token("yesterday", "yesterday", "NOUN", "npadvmod", Some(3))
        .token("?", "?", "PUNCT", "punct", Some(3))
        // The annotator's well-known false positive.
        .entity(EntityLabel::Place, 4, 5)
        .entity(EntityLabel::Date, 5, 6)
}

pub fn vaccinated_uk_so_far() -> SentenceBuilder {
    SentenceBuilder::new(VACCINATED_UK_SO_FAR)
        .token("How", "how", "ADV", "advmod", Some(1))
        .token("many", "many", "ADJ", "amod", Some(2))
        .token("people", "people", "NOUN", "nsubjpass", Some(5))
        .token("have", "have", "AUX", "aux", Some(5))
        .token("been", "be", "AUX", "auxpass", Some(5))
        .root("vaccinated", "vaccinate", "VERB")
        .token("in", "in", "ADP", "prep", Some(5))
        .token("the", "the", "DET", "det", Some(8))
        .token("UK", "UK", "PROPN", "pobj", Some(6))
        .token("so", "so", "ADV", "advmod", Some(10))
        .token("far", "far", "ADV", "advmod", Some(5))
        .token("?", "?", "PUNCT", "punct", Some(5))
        .entity(EntityLabel::Place, 8, 9)
}

pub fn fewest_infections() -> SentenceBuilder {
    SentenceBuilder::new(FEWEST_INFECTIONS)
        .token("Which", "which", "DET", "det", Some(1))
        .token("country", "country", "NOUN", "nsubj", Some(2))
        .root("had", "have", "VERB")
        .token("the", "the", "DET", "det", Some(5))
        .token("fewest", "few", "ADJ", "amod", Some(5))
        .token("infections", "infection", "NOUN", "dobj", Some(2))
        .token("last", "last", "ADJ", "amod", Some(7))
        .token("week", "week", "NOUN", "npadvmod", Some(2))
        .token("?", "?", "PUNCT", "punct", Some(2))
        .entity(EntityLabel::Date, 6, 8)
}

pub fn vaccinated_this_week() -> SentenceBuilder {
    SentenceBuilder::new(VACCINATED_THIS_WEEK)
        .token("How", "how", "ADV", "advmod", Some(1))
        .token("many", "many", "ADJ", "amod", Some(2))
        .token("people", "people", "NOUN", "nsubjpass", Some(5))
        .token("have", "have", "AUX", "aux", Some(5))
        .token("been", "be", "AUX", "auxpass", Some(5))
        .root("vaccinated", "vaccinate", "VERB")
        .token("this", "this", "DET", "det", Some(7))
        .token("week", "week", "NOUN", "npadvmod", Some(5))
        .token("?", "?", "PUNCT", "punct", Some(5))
        .entity(EntityLabel::Date, 6, 8)
}

pub fn german_cases_this_year() -> SentenceBuilder {
    SentenceBuilder::new(GERMAN_CASES_THIS_YEAR)
        .token("How", "how", "ADV", "advmod", Some(1))
        .token("many", "many", "ADJ", "amod", Some(2))
        .token("cases", "case", "NOUN", "attr", Some(5))
        .token("have", "have", "AUX", "aux", Some(5))
        .token("there", "there", "PRON", "expl", Some(5))
        .root("been", "be", "VERB")
        .token("in", "in", "ADP", "prep", Some(5))
        .token("Germany", "Germany", "PROPN", "pobj", Some(6))
        .token("this", "this", "DET", "det", Some(9))
        .token("year", "year", "NOUN", "npadvmod", Some(5))
        .token("?", "?", "PUNCT", "punct", Some(5))
        .entity(EntityLabel::Place, 7, 8)
        .entity(EntityLabel::Date, 8, 10)
}

/// Every fixture sentence, registered by its text.
pub fn mock_annotator() -> MockAnnotator {
    MockAnnotator::new()
        .with(per_day())
        .with(sum_of_total())
        .with(most_vaccinated_day())
        .with(cases_and_vaccinations())
        .with(got_covid_vaccine())
        .with(got_covid_yesterday())
        .with(vaccinated_uk_so_far())
        .with(fewest_infections())
        .with(vaccinated_this_week())
        .with(german_cases_this_year())
}

// ── Harness ─────────────────────────────────────────────────

/// End-to-end harness: the real pipeline over a mock annotator.
pub struct TestHarness {
    pub pipeline: Arc<Pipeline>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_lexicon(&LexiconConfig::default())
    }

    pub fn with_lexicon(extra: &LexiconConfig) -> Self {
        let pipeline = Pipeline::new(Arc::new(mock_annotator()), extra).unwrap();
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Understand `text` against the fixed reference date.
    pub async fn understand(&self, text: &str) -> Understanding {
        self.pipeline
            .understand(text, today())
            .await
            .unwrap_or_else(|e| panic!("understanding {text:?} failed: {e}"))
    }
}
