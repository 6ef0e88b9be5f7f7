//! Mock annotator for testing: serves pre-loaded parses.

use async_trait::async_trait;
use cb_treequery::{AnnotatedSentence, SentenceBuilder};
use std::collections::HashMap;

use crate::annotator::Annotator;
use crate::error::{NluError, NluResult};

/// An annotator that returns pre-loaded parses by exact input text.
#[derive(Debug, Default)]
pub struct MockAnnotator {
    sentences: HashMap<String, AnnotatedSentence>,
}

impl MockAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parse under its own text.
    pub fn add(&mut self, sentence: AnnotatedSentence) {
        self.sentences.insert(sentence.text.clone(), sentence);
    }

    /// Register a parse described with a [`SentenceBuilder`].
    pub fn with(mut self, builder: SentenceBuilder) -> Self {
        self.add(builder.annotated());
        self
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[async_trait]
impl Annotator for MockAnnotator {
    async fn annotate(&self, text: &str) -> NluResult<AnnotatedSentence> {
        self.sentences
            .get(text)
            .cloned()
            .ok_or_else(|| NluError::NotFound(text.to_string()))
    }
}
