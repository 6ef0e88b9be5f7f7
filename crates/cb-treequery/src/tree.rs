//! Annotated sentence model and its adjacency index.

use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};

// ── Annotator output ──────────────────────────────────────────

/// One token of an annotated sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text.
    pub text: String,
    /// Dictionary form.
    pub lemma: String,
    /// Stemmed form, recomputed by the consumer before matching.
    #[serde(default)]
    pub stem: String,
    /// Universal part-of-speech tag (e.g. "NOUN", "ADV").
    #[serde(default)]
    pub pos: String,
    /// Label of the incoming dependency edge (e.g. "nsubj", "ROOT").
    #[serde(default)]
    pub dep: String,
    /// Index of the governing token; `None` for the root.
    #[serde(default)]
    pub head: Option<usize>,
}

/// Named-entity label, reduced to the classes the pipeline cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    /// Countries, cities and states (`GPE`). Non-political locations
    /// (`LOC`: mountain ranges, bodies of water) are `Other`.
    #[serde(alias = "GPE")]
    Place,
    #[serde(alias = "DATE")]
    Date,
    #[serde(alias = "TIME")]
    Time,
    #[serde(other)]
    Other,
}

impl EntityLabel {
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Time)
    }
}

/// A recognized named entity spanning tokens `start..end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub label: EntityLabel,
    pub text: String,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
}

/// Raw annotator output for a single sentence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    pub text: String,
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

// ── Indexed sentence ──────────────────────────────────────────

/// A validated dependency tree with O(1) parent, child and sibling lookups.
#[derive(Debug, Clone)]
pub struct Sentence {
    annotated: AnnotatedSentence,
    root: Option<usize>,
    /// Dependents of each token, in surface order.
    children: Vec<Vec<usize>>,
    /// Position of each token within its governor's `children` list.
    sibling_pos: Vec<usize>,
}

impl Sentence {
    /// Index an annotated sentence, checking that it forms a single tree.
    pub fn new(annotated: AnnotatedSentence) -> TreeResult<Self> {
        let len = annotated.tokens.len();
        let mut root = None;
        let mut children = vec![Vec::new(); len];

        for (i, token) in annotated.tokens.iter().enumerate() {
            match token.head {
                None => match root {
                    None => root = Some(i),
                    Some(first) => return Err(TreeError::MultipleRoots { first, second: i }),
                },
                Some(head) if head >= len => {
                    return Err(TreeError::InvalidHead { token: i, head, len });
                }
                Some(head) if head == i => return Err(TreeError::Cycle(i)),
                Some(head) => children[head].push(i),
            }
        }

        if len > 0 && root.is_none() {
            return Err(TreeError::NoRoot);
        }

        // Every token must reach the root within `len` steps.
        for start in 0..len {
            let mut current = start;
            let mut steps = 0;
            while let Some(head) = annotated.tokens[current].head {
                current = head;
                steps += 1;
                if steps > len {
                    return Err(TreeError::Cycle(start));
                }
            }
        }

        let mut sibling_pos = vec![0; len];
        for deps in &children {
            for (pos, &child) in deps.iter().enumerate() {
                sibling_pos[child] = pos;
            }
        }

        Ok(Self {
            annotated,
            root,
            children,
            sibling_pos,
        })
    }

    pub fn len(&self) -> usize {
        self.annotated.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotated.tokens.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.annotated.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.annotated.tokens
    }

    pub fn token(&self, index: usize) -> Option<&Token> {
        self.annotated.tokens.get(index)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.annotated.entities
    }

    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn head(&self, index: usize) -> Option<usize> {
        self.annotated.tokens.get(index).and_then(|t| t.head)
    }

    pub fn children(&self, index: usize) -> &[usize] {
        self.children.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The dependent that immediately follows `index` under the same governor.
    pub fn next_sibling(&self, index: usize) -> Option<usize> {
        let head = self.head(index)?;
        self.children[head].get(self.sibling_pos[index] + 1).copied()
    }

    /// True if `ancestor` dominates `node` at any depth (strictly).
    pub fn is_ancestor(&self, ancestor: usize, node: usize) -> bool {
        let mut current = self.head(node);
        while let Some(head) = current {
            if head == ancestor {
                return true;
            }
            current = self.head(head);
        }
        false
    }

    /// Rewrite every token's stem. Tree shape is unaffected.
    pub fn restem(mut self, stem: impl Fn(&Token) -> String) -> Self {
        for token in &mut self.annotated.tokens {
            token.stem = stem(token);
        }
        self
    }
}

impl TryFrom<AnnotatedSentence> for Sentence {
    type Error = TreeError;

    fn try_from(annotated: AnnotatedSentence) -> TreeResult<Self> {
        Self::new(annotated)
    }
}
