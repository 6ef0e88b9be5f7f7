//! Backtracking search for pattern bindings.
//!
//! Candidates for every node are filtered by attribute predicates first;
//! relations are only checked between surviving candidates, which keeps
//! the branching factor small on realistic sentences.

use crate::pattern::Pattern;
use crate::tree::Sentence;

/// Count full bindings of `pattern` in `sentence`, stopping at `limit`.
pub(crate) fn count_bindings(pattern: &Pattern, sentence: &Sentence, limit: Option<usize>) -> usize {
    if sentence.is_empty() || pattern.is_empty() {
        return 0;
    }

    let candidates: Vec<Vec<usize>> = pattern
        .nodes()
        .iter()
        .map(|node| {
            sentence
                .tokens()
                .iter()
                .enumerate()
                .filter(|(_, token)| node.accepts(token))
                .map(|(i, _)| i)
                .collect()
        })
        .collect();

    if candidates.iter().any(Vec::is_empty) {
        return 0;
    }

    let mut search = Search {
        pattern,
        sentence,
        candidates,
        binding: Vec::with_capacity(pattern.len()),
        found: 0,
        limit,
    };
    search.extend();

    tracing::trace!(
        pattern = pattern.name(),
        matches = search.found,
        "pattern evaluated"
    );
    search.found
}

struct Search<'a> {
    pattern: &'a Pattern,
    sentence: &'a Sentence,
    candidates: Vec<Vec<usize>>,
    /// Token bound to each node so far.
    binding: Vec<usize>,
    found: usize,
    limit: Option<usize>,
}

impl Search<'_> {
    /// Bind the next node. Returns true once the limit is reached.
    fn extend(&mut self) -> bool {
        let depth = self.binding.len();
        if depth == self.pattern.len() {
            self.found += 1;
            return self.limit.is_some_and(|limit| self.found >= limit);
        }

        for i in 0..self.candidates[depth].len() {
            let candidate = self.candidates[depth][i];
            if depth > 0 {
                let edge = self.pattern.edges()[depth - 1];
                let left = self.binding[edge.left];
                if !edge.op.holds(self.sentence, left, candidate) {
                    continue;
                }
            }

            self.binding.push(candidate);
            let done = self.extend();
            self.binding.pop();
            if done {
                return true;
            }
        }
        false
    }
}
