//! Slot filling: the date and location a query is scoped to.

pub mod date;
pub mod location;

use cb_protocol::{DateSlot, Slots};
use cb_treequery::Sentence;
use chrono::NaiveDate;

/// Extracts [`Slots`] from an annotated sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotFiller;

impl SlotFiller {
    pub fn new() -> Self {
        Self
    }

    pub fn fill(&self, sentence: &Sentence, today: NaiveDate) -> Slots {
        Slots::new(
            self.recognize_date(sentence, today),
            self.recognize_location(sentence),
        )
    }

    /// The first date or time entity that normalizes, in sentence order.
    ///
    /// Entities the normalizer cannot read ("the other day") are skipped
    /// rather than ending the search, so "the other day, on 12 March 2021"
    /// still yields 12 March. Later entities after the first readable one
    /// are ignored.
    pub fn recognize_date(&self, sentence: &Sentence, today: NaiveDate) -> Option<DateSlot> {
        sentence
            .entities()
            .iter()
            .filter(|e| e.label.is_temporal())
            .find_map(|e| {
                let slot = date::normalize(&e.text, today);
                if slot.is_none() {
                    tracing::debug!(entity = %e.text, "temporal entity not understood, skipping");
                }
                slot
            })
    }

    pub fn recognize_location(&self, sentence: &Sentence) -> Option<String> {
        location::recognize(sentence)
    }
}
