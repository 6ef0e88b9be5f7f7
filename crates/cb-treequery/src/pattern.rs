//! Pattern model: node predicates, relational operators, pattern sets.

use std::collections::HashSet;
use std::str::FromStr;

use crate::error::{TreeError, TreeResult};
use crate::matcher;
use crate::tree::{Sentence, Token};

// ── Relational operators ──────────────────────────────────────

/// Relation between an already bound node (left) and a new node (right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelOp {
    /// `<`: right is the direct head of left.
    Governor,
    /// `>`: right is a direct dependent of left.
    Dependent,
    /// `<<`: right dominates left at any depth.
    Ancestor,
    /// `>>`: right is dominated by left at any depth.
    Descendant,
    /// `$++`: right immediately follows left under the same governor.
    RightSibling,
}

impl RelOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Governor => "<",
            Self::Dependent => ">",
            Self::Ancestor => "<<",
            Self::Descendant => ">>",
            Self::RightSibling => "$++",
        }
    }

    /// Whether the relation holds between tokens `left` and `right`.
    pub fn holds(&self, sentence: &Sentence, left: usize, right: usize) -> bool {
        match self {
            Self::Governor => sentence.head(left) == Some(right),
            Self::Dependent => sentence.head(right) == Some(left),
            Self::Ancestor => sentence.is_ancestor(right, left),
            Self::Descendant => sentence.is_ancestor(left, right),
            Self::RightSibling => sentence.next_sibling(left) == Some(right),
        }
    }
}

impl FromStr for RelOp {
    type Err = TreeError;

    fn from_str(s: &str) -> TreeResult<Self> {
        match s.trim() {
            "<" => Ok(Self::Governor),
            ">" => Ok(Self::Dependent),
            "<<" => Ok(Self::Ancestor),
            ">>" => Ok(Self::Descendant),
            "$++" => Ok(Self::RightSibling),
            other => Err(TreeError::UnknownOperator(other.to_string())),
        }
    }
}

impl std::fmt::Display for RelOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

// ── Attribute predicates ──────────────────────────────────────

/// A set-membership test on one token attribute.
///
/// Lemma, part-of-speech and dependency comparisons ignore case;
/// stems are compared exactly since both sides come from the same stemmer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Lemma(HashSet<String>),
    Stem(HashSet<String>),
    Pos(HashSet<String>),
    Dep(HashSet<String>),
}

fn lowercase_set<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().to_lowercase())
        .collect()
}

fn contains_ignore_case(set: &HashSet<String>, value: &str) -> bool {
    set.contains(value) || set.contains(&value.to_lowercase())
}

impl Predicate {
    pub fn accepts(&self, token: &Token) -> bool {
        match self {
            Self::Lemma(set) => contains_ignore_case(set, &token.lemma),
            Self::Stem(set) => set.contains(&token.stem),
            Self::Pos(set) => contains_ignore_case(set, &token.pos),
            Self::Dep(set) => contains_ignore_case(set, &token.dep),
        }
    }
}

/// A named pattern node and the predicates its token must satisfy.
///
/// A node without predicates matches any token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    name: String,
    predicates: Vec<Predicate>,
}

impl NodeSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predicates: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lemma<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.predicates.push(Predicate::Lemma(lowercase_set(words)));
        self
    }

    pub fn stem<I, S>(mut self, stems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = stems.into_iter().map(|s| s.as_ref().to_string()).collect();
        self.predicates.push(Predicate::Stem(set));
        self
    }

    pub fn pos<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.predicates.push(Predicate::Pos(lowercase_set(tags)));
        self
    }

    pub fn dep<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.predicates.push(Predicate::Dep(lowercase_set(labels)));
        self
    }

    /// True if `token` satisfies every predicate.
    pub fn accepts(&self, token: &Token) -> bool {
        self.predicates.iter().all(|p| p.accepts(token))
    }
}

// ── Patterns ──────────────────────────────────────────────────

/// Constraint binding `nodes[i + 1]` relative to an earlier node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge {
    pub left: usize,
    pub op: RelOp,
}

/// A compiled tree pattern.
///
/// `nodes[0]` is the root constraint; `edges[i]` relates `nodes[i + 1]` to
/// an earlier node. Node references are resolved at build time, so a
/// compiled pattern can never refer to an unbound node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    nodes: Vec<NodeSpec>,
    edges: Vec<Edge>,
}

impl Pattern {
    /// Start a pattern whose first node is `root`.
    pub fn builder(name: impl Into<String>, root: NodeSpec) -> PatternBuilder {
        PatternBuilder {
            name: name.into(),
            nodes: vec![root],
            edges: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Single-node pattern: some token satisfies `node`.
    pub fn single(name: impl Into<String>, node: NodeSpec) -> Self {
        Self {
            name: name.into(),
            nodes: vec![node],
            edges: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn nodes(&self) -> &[NodeSpec] {
        &self.nodes
    }

    pub(crate) fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// True if at least one full binding exists.
    pub fn matches(&self, sentence: &Sentence) -> bool {
        matcher::count_bindings(self, sentence, Some(1)) > 0
    }

    /// Number of distinct full bindings.
    pub fn match_count(&self, sentence: &Sentence) -> usize {
        matcher::count_bindings(self, sentence, None)
    }
}

/// Accumulates constraints; reports the first naming error on `build`.
#[derive(Debug, Clone)]
pub struct PatternBuilder {
    name: String,
    nodes: Vec<NodeSpec>,
    edges: Vec<Edge>,
    pending: Vec<TreeError>,
}

impl PatternBuilder {
    /// Add a node related to the already bound node `left` through `op`.
    pub fn with(mut self, left: &str, op: RelOp, right: NodeSpec) -> Self {
        let left_index = self.nodes.iter().position(|n| n.name == left);
        let duplicate = self.nodes.iter().any(|n| n.name == right.name);

        match left_index {
            None => self.pending.push(TreeError::UnboundNode {
                pattern: self.name.clone(),
                node: left.to_string(),
            }),
            Some(_) if duplicate => self.pending.push(TreeError::DuplicateNode {
                pattern: self.name.clone(),
                node: right.name.clone(),
            }),
            Some(left) => {
                self.edges.push(Edge { left, op });
                self.nodes.push(right);
            }
        }
        self
    }

    pub fn build(self) -> TreeResult<Pattern> {
        if let Some(err) = self.pending.into_iter().next() {
            return Err(err);
        }
        Ok(Pattern {
            name: self.name,
            nodes: self.nodes,
            edges: self.edges,
        })
    }
}

/// Alternative patterns; matches if any member matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn matches(&self, sentence: &Sentence) -> bool {
        self.patterns.iter().any(|p| p.matches(sentence))
    }

    /// Total bindings across all alternatives.
    pub fn match_count(&self, sentence: &Sentence) -> usize {
        self.patterns.iter().map(|p| p.match_count(sentence)).sum()
    }
}

impl From<Pattern> for PatternSet {
    fn from(pattern: Pattern) -> Self {
        Self {
            patterns: vec![pattern],
        }
    }
}

impl From<Vec<Pattern>> for PatternSet {
    fn from(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }
}
