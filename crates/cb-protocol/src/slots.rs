use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A normalized temporal slot: one calendar day or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateSlot {
    Day { date: NaiveDate },
    Range { start: NaiveDate, end: NaiveDate },
}

impl DateSlot {
    pub fn day(date: NaiveDate) -> Self {
        Self::Day { date }
    }

    /// Build a range, swapping the bounds if they arrive reversed.
    /// A range whose bounds coincide collapses to a single day.
    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        if start == end {
            Self::Day { date: start }
        } else {
            Self::Range { start, end }
        }
    }

    /// First day covered by the slot.
    pub fn start(&self) -> NaiveDate {
        match self {
            Self::Day { date } => *date,
            Self::Range { start, .. } => *start,
        }
    }

    /// Last day covered by the slot (inclusive).
    pub fn end(&self) -> NaiveDate {
        match self {
            Self::Day { date } => *date,
            Self::Range { end, .. } => *end,
        }
    }
}

/// Optional parameters extracted from a query.
///
/// An absent location means "the world"; an absent date means today or
/// all-time depending on the intent (see the executor defaults).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slots {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateSlot>,
    /// Normalized location name (see [`crate::location::normalize`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Slots {
    pub fn new(date: Option<DateSlot>, location: Option<String>) -> Self {
        Self { date, location }
    }

    pub fn has_date(&self) -> bool {
        self.date.is_some()
    }
}
