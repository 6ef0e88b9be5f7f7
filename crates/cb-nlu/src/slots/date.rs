//! Normalization of temporal entity text into a [`DateSlot`].
//!
//! Relative expressions ("yesterday", "last week") are resolved against an
//! injected reference date so results are reproducible.

use std::sync::LazyLock;

use cb_protocol::DateSlot;
use chrono::{Datelike, Days, Months, NaiveDate};
use regex::Regex;

static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})(?:st|nd|rd|th)\b").unwrap());

static RELATIVE_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(last|this|past|previous|current) (week|month|year)$").unwrap()
});

static LAST_N_DAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:last|past|previous) (\d{1,3}) days$").unwrap());

static BETWEEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^between (.+?) and (.+)$").unwrap());

static FROM_TO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^from (.+?) (?:to|until|till) (.+)$").unwrap());

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4})$").unwrap());

/// Complete calendar dates.
const DAY_FORMATS: &[&str] = &["%Y-%m-%d", "%d %B %Y", "%B %d %Y", "%d.%m.%Y", "%m/%d/%Y"];

/// Day and month only; the reference year is appended before parsing.
const PARTIAL_DAY_FORMATS: &[&str] = &["%d %B %Y", "%B %d %Y"];

/// chrono reads `%Y` from as few as one digit, so "january 2021" would
/// otherwise parse as 20 January of year 21.
const MIN_YEAR: i32 = 1900;

/// Normalize entity text relative to `today`. `None` if the expression
/// is not understood.
pub fn normalize(text: &str, today: NaiveDate) -> Option<DateSlot> {
    parse(&clean(text), today)
}

/// Lowercase, drop ordinal suffixes and commas, collapse whitespace.
fn clean(text: &str) -> String {
    let lower = text.to_lowercase();
    let no_ordinals = ORDINAL.replace_all(&lower, "$1");
    no_ordinals
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse(s: &str, today: NaiveDate) -> Option<DateSlot> {
    for prefix in ["the ", "on ", "in ", "during "] {
        if let Some(rest) = s.strip_prefix(prefix) {
            return parse(rest, today);
        }
    }

    match s {
        "today" | "now" => return Some(DateSlot::day(today)),
        "yesterday" => return today.pred_opt().map(DateSlot::day),
        "day before yesterday" => return today.checked_sub_days(Days::new(2)).map(DateSlot::day),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("since ") {
        let from = parse(rest, today)?;
        return Some(DateSlot::range(from.start(), today));
    }

    if let Some(caps) = BETWEEN.captures(s).or_else(|| FROM_TO.captures(s)) {
        let start = parse(&caps[1], today)?;
        let end = parse(&caps[2], today)?;
        return Some(DateSlot::range(start.start(), end.end()));
    }

    if let Some(caps) = RELATIVE_PERIOD.captures(s) {
        return relative_period(&caps[1], &caps[2], today);
    }

    if let Some(caps) = LAST_N_DAYS.captures(s) {
        let n: u64 = caps[1].parse().ok()?;
        if n == 0 {
            return None;
        }
        let start = today.checked_sub_days(Days::new(n - 1))?;
        return Some(DateSlot::range(start, today));
    }

    if let Some(caps) = YEAR.captures(s) {
        let year: i32 = caps[1].parse().ok()?;
        return Some(DateSlot::range(
            NaiveDate::from_ymd_opt(year, 1, 1)?,
            NaiveDate::from_ymd_opt(year, 12, 31)?,
        ));
    }

    if let Some(date) = parse_day(s, today) {
        return Some(DateSlot::day(date));
    }

    parse_month(s, today)
}

fn relative_period(which: &str, unit: &str, today: NaiveDate) -> Option<DateSlot> {
    let (start, end) = match (which, unit) {
        ("this" | "current", "week") => (week_start(today)?, today),
        ("last" | "previous", "week") => {
            let start = week_start(today)?.checked_sub_days(Days::new(7))?;
            (start, start.checked_add_days(Days::new(6))?)
        }
        ("past", "week") => (today.checked_sub_days(Days::new(6))?, today),
        ("this" | "current", "month") => (today.with_day(1)?, today),
        ("last" | "previous", "month") => {
            let start = today.with_day(1)?.checked_sub_months(Months::new(1))?;
            (start, month_end(start)?)
        }
        ("past", "month") => (today.checked_sub_months(Months::new(1))?.succ_opt()?, today),
        ("this" | "current", "year") => (NaiveDate::from_ymd_opt(today.year(), 1, 1)?, today),
        ("last" | "previous", "year") => (
            NaiveDate::from_ymd_opt(today.year() - 1, 1, 1)?,
            NaiveDate::from_ymd_opt(today.year() - 1, 12, 31)?,
        ),
        ("past", "year") => (today.checked_sub_months(Months::new(12))?.succ_opt()?, today),
        _ => return None,
    };
    Some(DateSlot::range(start, end))
}

fn parse_day(s: &str, today: NaiveDate) -> Option<NaiveDate> {
    DAY_FORMATS
        .iter()
        .find_map(|fmt| parse_plausible(s, fmt))
        .or_else(|| {
            let with_year = format!("{s} {}", today.year());
            PARTIAL_DAY_FORMATS
                .iter()
                .find_map(|fmt| parse_plausible(&with_year, fmt))
        })
}

/// "march 2021" or bare "march" (reference year) as a whole-month range.
fn parse_month(s: &str, today: NaiveDate) -> Option<DateSlot> {
    let first = parse_plausible(&format!("1 {s}"), "%d %B %Y")
        .or_else(|| parse_plausible(&format!("1 {s} {}", today.year()), "%d %B %Y"))?;
    Some(DateSlot::range(first, month_end(first)?))
}

fn parse_plausible(s: &str, fmt: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, fmt)
        .ok()
        .filter(|date| date.year() >= MIN_YEAR)
}

fn week_start(day: NaiveDate) -> Option<NaiveDate> {
    day.checked_sub_days(Days::new(u64::from(day.weekday().num_days_from_monday())))
}

fn month_end(first: NaiveDate) -> Option<NaiveDate> {
    first.checked_add_months(Months::new(1))?.pred_opt()
}
