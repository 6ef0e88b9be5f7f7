//! Stemmed trigger-word lists.
//!
//! Trigger lists and runtime token stems must come from the same stemmer,
//! otherwise stem lookups silently miss. [`Lexicon::restem`] recomputes
//! token stems with the lexicon's own stemmer before any pattern runs.

use std::collections::BTreeSet;

use cb_treequery::Sentence;
use rust_stemmers::{Algorithm, Stemmer};
use serde::Deserialize;

const PEOPLE_WORDS: &[&str] = &["human", "people", "person", "individual"];

const VACCINE_WORDS: &[&str] = &[
    "shot",
    "vaccine",
    "jab",
    "inoculation",
    "immunization",
    "administer",
];

const CASES_WORDS: &[&str] = &["case", "infection", "test", "positive", "negative"];

const COVID_WORDS: &[&str] = &["covid", "covid-19", "covid19"];

/// Extra trigger words merged into the built-in lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub vaccine: Vec<String>,
    #[serde(default)]
    pub cases: Vec<String>,
    #[serde(default)]
    pub covid: Vec<String>,
}

/// The four stemmed trigger sets and the stemmer that produced them.
pub struct Lexicon {
    stemmer: Stemmer,
    people: BTreeSet<String>,
    vaccine: BTreeSet<String>,
    cases: BTreeSet<String>,
    covid: BTreeSet<String>,
}

impl Lexicon {
    /// Built-in trigger lists only.
    pub fn new() -> Self {
        Self::with_extra(&LexiconConfig::default())
    }

    /// Built-in lists plus the configured extra words.
    pub fn with_extra(extra: &LexiconConfig) -> Self {
        let stemmer = Stemmer::create(Algorithm::English);
        let stem_all = |builtin: &[&str], more: &[String]| -> BTreeSet<String> {
            builtin
                .iter()
                .copied()
                .chain(more.iter().map(String::as_str))
                .map(|w| stem_word(&stemmer, w))
                .collect()
        };

        let people = stem_all(PEOPLE_WORDS, &extra.people);
        let vaccine = stem_all(VACCINE_WORDS, &extra.vaccine);
        let cases = stem_all(CASES_WORDS, &extra.cases);
        let covid = stem_all(COVID_WORDS, &extra.covid);

        tracing::debug!(
            people = people.len(),
            vaccine = vaccine.len(),
            cases = cases.len(),
            covid = covid.len(),
            "trigger lexicon built"
        );

        Self {
            stemmer,
            people,
            vaccine,
            cases,
            covid,
        }
    }

    /// Stem a single word (lowercased first).
    pub fn stem(&self, word: &str) -> String {
        stem_word(&self.stemmer, word)
    }

    /// Recompute every token stem from its surface text.
    pub fn restem(&self, sentence: Sentence) -> Sentence {
        sentence.restem(|token| self.stem(&token.text))
    }

    pub fn people(&self) -> &BTreeSet<String> {
        &self.people
    }

    pub fn vaccine(&self) -> &BTreeSet<String> {
        &self.vaccine
    }

    pub fn cases(&self) -> &BTreeSet<String> {
        &self.cases
    }

    pub fn covid(&self) -> &BTreeSet<String> {
        &self.covid
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("people", &self.people)
            .field("vaccine", &self.vaccine)
            .field("cases", &self.cases)
            .field("covid", &self.covid)
            .finish()
    }
}

fn stem_word(stemmer: &Stemmer, word: &str) -> String {
    stemmer.stem(&word.to_lowercase()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_treequery::SentenceBuilder;

    #[test]
    fn inflections_share_a_stem() {
        let lex = Lexicon::new();
        assert_eq!(lex.stem("vaccines"), lex.stem("vaccine"));
        assert_eq!(lex.stem("Cases"), lex.stem("case"));
        assert_eq!(lex.stem("infections"), lex.stem("infection"));
        assert_eq!(lex.stem("shots"), lex.stem("shot"));
    }

    #[test]
    fn builtin_lists_are_stemmed() {
        let lex = Lexicon::new();
        assert!(lex.vaccine().contains(&lex.stem("vaccinations")));
        assert!(lex.vaccine().contains(&lex.stem("administered")));
        assert!(lex.cases().contains(&lex.stem("tests")));
        assert!(lex.people().contains(&lex.stem("people")));
        assert!(lex.covid().contains(&lex.stem("COVID")));
    }

    #[test]
    fn extra_words_extend_lists() {
        let lex = Lexicon::with_extra(&LexiconConfig {
            vaccine: vec!["booster".into()],
            ..Default::default()
        });
        assert!(lex.vaccine().contains(&lex.stem("boosters")));
        assert!(!Lexicon::new().vaccine().contains(&lex.stem("booster")));
    }

    #[test]
    fn restem_uses_surface_text() {
        let lex = Lexicon::new();
        let s = SentenceBuilder::new("Vaccinations")
            .root("Vaccinations", "vaccination", "NOUN")
            .build()
            .unwrap();
        let s = lex.restem(s);
        assert_eq!(s.token(0).unwrap().stem, lex.stem("vaccinations"));
    }

    #[test]
    fn lexicon_config_from_toml() {
        let cfg: LexiconConfig = toml::from_str(r#"cases = ["hospitalization"]"#).unwrap();
        assert_eq!(cfg.cases, vec!["hospitalization".to_string()]);
        assert!(cfg.vaccine.is_empty());
    }
}
