//! Location slot: annotator place entities first, gazetteer scan second.

use cb_protocol::location;
use cb_treequery::{EntityLabel, Sentence};

/// The annotator tags "COVID" as a place often enough to matter.
const COVID_ENTITY: &str = "covid";

/// First usable place entity, normalized; otherwise the first token that
/// normalizes to a known location.
///
/// Only geopolitical entities count as places. Non-political `LOC` spans
/// ("the Alps") arrive as [`EntityLabel::Other`] and are never used as-is.
pub fn recognize(sentence: &Sentence) -> Option<String> {
    let entity = sentence
        .entities()
        .iter()
        .filter(|e| e.label == EntityLabel::Place)
        .find(|e| !e.text.trim().eq_ignore_ascii_case(COVID_ENTITY));
    if let Some(entity) = entity {
        return Some(location::normalize(&entity.text));
    }

    sentence
        .tokens()
        .iter()
        // "us" the pronoun is not the United States
        .filter(|t| !t.pos.eq_ignore_ascii_case("PRON"))
        .map(|t| location::normalize(&t.text))
        .find(|name| location::is_known(name))
}
