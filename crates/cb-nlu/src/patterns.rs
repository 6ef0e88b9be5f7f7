//! Compiled pattern tables for topic and intent recognition.
//!
//! Every pattern set is compiled once from a [`Lexicon`]; a naming mistake
//! in a pattern fails here, at start-up, never during classification.

use cb_treequery::{NodeSpec, Pattern, PatternSet, RelOp, TreeResult};

use crate::lexicon::Lexicon;

// ── Lemma lists ───────────────────────────────────────────────

const WH_WORDS: &[&str] = &["which", "what"];
const DAY_WORDS: &[&str] = &["day", "time", "date"];
const COUNTRY_WORDS: &[&str] = &["country", "nation"];
const NUMBER_WORDS: &[&str] = &["amount", "number"];
const MOST_WORDS: &[&str] = &["most"];
const LEAST_WORDS: &[&str] = &["few", "least"];
const MAXIMUM_WORDS: &[&str] = &["maximum", "maximal", "high", "peak"];
const MINIMUM_WORDS: &[&str] = &["minimum", "minimal", "low"];
const PEAK_WORDS: &[&str] = &["peak", "record"];

/// Explicit requests to add daily values up. Period words alone ("this
/// week", "between A and B") only mark the figure as daily.
const SUM_WORDS: &[&str] = &["sum", "combine", "add"];

/// Markers of a running total.
const CUMULATIVE_WORDS: &[&str] = &["total", "cumulative", "overall", "altogether", "ever", "until", "till"];

/// Markers of a daily figure (or a range of daily figures).
const DAILY_WORDS: &[&str] = &[
    "daily", "day", "date", "today", "yesterday", "new", "per", "on", "when", "week", "month",
    "year", "between", "during", "throughout",
];

/// Words a quantity is expressed with; value domains attach to these.
const QUANTITY_WORDS: &[&str] = &[
    "many", "much", "most", "least", "few", "number", "amount", "count", "high", "low", "maximum",
    "minimum", "peak",
];

/// All pattern sets used by the recognizers.
#[derive(Debug, Clone)]
pub struct PatternTable {
    // Topic
    pub vaccine_trigger: PatternSet,
    pub case_trigger: PatternSet,
    pub covid: PatternSet,
    /// A COVID token directly linked to a vaccination token.
    pub covid_vaccine: PatternSet,

    // Value type
    pub how_many: PatternSet,
    pub what_day: PatternSet,
    pub what_location: PatternSet,
    pub number: PatternSet,

    // Calculation type
    pub maximum: PatternSet,
    pub minimum: PatternSet,
    pub sum: PatternSet,
    pub raw_value: PatternSet,

    // Measurement type
    pub cumulative: PatternSet,
    pub daily: PatternSet,
    /// "have been vaccinated": a running total unless a period says otherwise.
    pub present_perfect: PatternSet,

    // Value domain
    pub vaccine_quantity: PatternSet,
    pub cases_quantity: PatternSet,
}

fn lemma(name: &str, words: &[&str]) -> NodeSpec {
    NodeSpec::new(name).lemma(words.iter().copied())
}

fn stem<'a>(name: &str, stems: impl IntoIterator<Item = &'a String>) -> NodeSpec {
    NodeSpec::new(name).stem(stems)
}

/// `root` and `other` related through `op`, as a two-node pattern.
fn pair(name: &str, root: NodeSpec, op: RelOp, other: NodeSpec) -> TreeResult<Pattern> {
    let left = root.name().to_string();
    Pattern::builder(name, root).with(&left, op, other).build()
}

impl PatternTable {
    pub fn new(lexicon: &Lexicon) -> TreeResult<Self> {
        let vaccine = || stem("vaccine", lexicon.vaccine());
        let cases = || stem("cases", lexicon.cases());
        let covid = || stem("covid", lexicon.covid());
        let topic_words = || {
            stem(
                "trigger",
                lexicon
                    .vaccine()
                    .iter()
                    .chain(lexicon.cases())
                    .chain(lexicon.people()),
            )
        };
        let cases_or_covid = || stem("cases", lexicon.cases().iter().chain(lexicon.covid()));
        let quantity = || lemma("quantity", QUANTITY_WORDS);

        // ── Topic ──
        let vaccine_trigger: PatternSet = Pattern::single("vaccine_trigger", vaccine()).into();
        let case_trigger: PatternSet = Pattern::single("case_trigger", cases()).into();
        let covid_set: PatternSet = Pattern::single("covid", covid()).into();
        let covid_vaccine = PatternSet::new(vec![
            pair("covid_headed_by_vaccine", covid(), RelOp::Governor, vaccine())?,
            pair("covid_governs_vaccine", covid(), RelOp::Dependent, vaccine())?,
            pair("vaccine_dominates_covid", vaccine(), RelOp::Descendant, covid())?,
            pair("covid_before_vaccine", covid(), RelOp::RightSibling, vaccine())?,
            pair("vaccine_before_covid", vaccine(), RelOp::RightSibling, covid())?,
        ]);

        // ── Value type ──
        let how_many_pattern = pair(
            "how_many",
            lemma("how", &["how"]),
            RelOp::Governor,
            lemma("many", &["many", "much"]),
        )?;
        let how_many: PatternSet = how_many_pattern.clone().into();
        let what_day = PatternSet::new(vec![
            pair("what_day", lemma("what", WH_WORDS), RelOp::Ancestor, lemma("day", DAY_WORDS))?,
            Pattern::single("when", lemma("when", &["when"])),
        ]);
        let what_location = PatternSet::new(vec![
            pair(
                "what_country",
                lemma("what", WH_WORDS),
                RelOp::Ancestor,
                lemma("country", COUNTRY_WORDS),
            )?,
            pair(
                "what_is_country",
                lemma("what", WH_WORDS),
                RelOp::RightSibling,
                lemma("country", COUNTRY_WORDS),
            )?,
            Pattern::single("where", lemma("where", &["where"])),
        ]);
        let number_pattern = Pattern::single("number", lemma("number", NUMBER_WORDS));
        let number: PatternSet = number_pattern.clone().into();

        // ── Calculation type ──
        let maximum = PatternSet::new(vec![
            pair("most_trigger", lemma("most", MOST_WORDS), RelOp::Ancestor, topic_words())?,
            pair(
                "maximum_number",
                lemma("number", NUMBER_WORDS),
                RelOp::Dependent,
                lemma("maximum", MAXIMUM_WORDS),
            )?,
            Pattern::single("peak", lemma("peak", PEAK_WORDS)),
        ]);
        let minimum = PatternSet::new(vec![
            pair("least_trigger", lemma("least", LEAST_WORDS), RelOp::Ancestor, topic_words())?,
            pair(
                "minimum_number",
                lemma("number", NUMBER_WORDS),
                RelOp::Dependent,
                lemma("minimum", MINIMUM_WORDS),
            )?,
        ]);
        let sum: PatternSet = Pattern::single("sum", lemma("sum", SUM_WORDS)).into();
        let raw_value = PatternSet::new(vec![
            how_many_pattern,
            pair(
                "number_of",
                lemma("number", NUMBER_WORDS),
                RelOp::Dependent,
                lemma("of", &["of"]),
            )?,
            number_pattern,
        ]);

        // ── Measurement type ──
        let cumulative = PatternSet::new(vec![
            Pattern::single("cumulative", lemma("total", CUMULATIVE_WORDS)),
            pair("so_far", lemma("far", &["far"]), RelOp::Dependent, lemma("so", &["so"]))?,
        ]);
        let daily: PatternSet = Pattern::single("daily", lemma("daily", DAILY_WORDS)).into();
        let present_perfect: PatternSet = pair(
            "present_perfect",
            NodeSpec::new("verb").pos(["VERB"]),
            RelOp::Dependent,
            lemma("have", &["have"]).dep(["aux"]),
        )?
        .into();

        // ── Value domain ──
        let vaccine_quantity = PatternSet::new(vec![
            pair("vaccine_over_quantity", quantity(), RelOp::Ancestor, vaccine())?,
            pair("quantity_over_vaccine", quantity(), RelOp::Descendant, vaccine())?,
        ]);
        let cases_quantity = PatternSet::new(vec![
            pair("cases_over_quantity", quantity(), RelOp::Ancestor, cases_or_covid())?,
            pair("quantity_over_cases", quantity(), RelOp::Descendant, cases_or_covid())?,
        ]);

        Ok(Self {
            vaccine_trigger,
            case_trigger,
            covid: covid_set,
            covid_vaccine,
            how_many,
            what_day,
            what_location,
            number,
            maximum,
            minimum,
            sum,
            raw_value,
            cumulative,
            daily,
            present_perfect,
            vaccine_quantity,
            cases_quantity,
        })
    }
}
