//! Fluent construction of annotated sentences.
//!
//! Used by mock annotators and tests to describe a parse token by token.

use crate::error::TreeResult;
use crate::tree::{AnnotatedSentence, Entity, EntityLabel, Sentence, Token};

/// Builds an [`AnnotatedSentence`] one token at a time.
#[derive(Debug, Clone, Default)]
pub struct SentenceBuilder {
    sentence: AnnotatedSentence,
}

impl SentenceBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            sentence: AnnotatedSentence {
                text: text.into(),
                tokens: Vec::new(),
                entities: Vec::new(),
            },
        }
    }

    /// Append a token. The stem defaults to the lowercased surface text.
    pub fn token(
        mut self,
        text: &str,
        lemma: &str,
        pos: &str,
        dep: &str,
        head: Option<usize>,
    ) -> Self {
        self.sentence.tokens.push(Token {
            text: text.to_string(),
            lemma: lemma.to_string(),
            stem: text.to_lowercase(),
            pos: pos.to_string(),
            dep: dep.to_string(),
            head,
        });
        self
    }

    /// Append the root token.
    pub fn root(self, text: &str, lemma: &str, pos: &str) -> Self {
        self.token(text, lemma, pos, "ROOT", None)
    }

    /// Attach a named entity covering tokens `start..end`; its text is
    /// taken from those tokens.
    pub fn entity(mut self, label: EntityLabel, start: usize, end: usize) -> Self {
        let text = self
            .sentence
            .tokens
            .get(start..end)
            .unwrap_or(&[])
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        self.sentence.entities.push(Entity {
            label,
            text,
            start,
            end,
        });
        self
    }

    pub fn annotated(self) -> AnnotatedSentence {
        self.sentence
    }

    pub fn build(self) -> TreeResult<Sentence> {
        Sentence::new(self.sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_indexed_sentence() {
        let s = SentenceBuilder::new("Vaccinations in Germany")
            .root("Vaccinations", "vaccination", "NOUN")
            .token("in", "in", "ADP", "prep", Some(0))
            .token("Germany", "Germany", "PROPN", "pobj", Some(1))
            .entity(EntityLabel::Place, 2, 3)
            .build()
            .unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.root(), Some(0));
        assert_eq!(s.entities()[0].text, "Germany");
        assert_eq!(s.token(2).unwrap().stem, "germany");
    }

    #[test]
    fn multi_token_entity_text() {
        let s = SentenceBuilder::new("last week")
            .token("last", "last", "ADJ", "amod", Some(1))
            .root("week", "week", "NOUN")
            .entity(EntityLabel::Date, 0, 2)
            .annotated();
        assert_eq!(s.entities[0].text, "last week");
    }
}
