//! The concept graph: concept store, pair index and chain in one handle

use relata_dsl::Token;
use std::collections::HashMap;
use tracing::trace;

use super::chain::{Chain, Fact, RelationKind};
use super::concept::Concept;
use super::pair::Pair;
use crate::application::explorer::Explorer;

/// Store for concepts, pairs and facts.
///
/// Everything is insertion-ordered and grows monotonically; the only way to
/// shrink the graph is [`ConceptGraph::clear`].
#[derive(Debug, Clone, Default)]
pub struct ConceptGraph {
    concepts: Vec<Concept>,
    concept_index: HashMap<String, usize>,
    pairs: Vec<Pair>,
    pair_index: HashMap<Pair, usize>,
    chain: Chain,
}

impl ConceptGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an atom, or return the concept already known under `name`
    pub fn add_concept(&mut self, name: &str) -> &Concept {
        self.insert_concept(name, || Concept::atom(name))
    }

    /// Register a boxed concept, or return the concept already known under
    /// `name` (which keeps its original shape)
    pub fn add_boxed(&mut self, name: &str, content: Vec<Token>) -> &Concept {
        self.insert_concept(name, || Concept::boxed(name, content))
    }

    fn insert_concept(&mut self, name: &str, make: impl FnOnce() -> Concept) -> &Concept {
        let existing = self.concept_index.get(name).copied();
        let index = match existing {
            Some(index) => index,
            None => {
                let index = self.concepts.len();
                self.concepts.push(make());
                self.concept_index.insert(name.to_string(), index);
                index
            }
        };
        &self.concepts[index]
    }

    /// Register a pair and both endpoints; idempotent
    pub fn add_pair(&mut self, subject: &str, object: &str) -> &Pair {
        self.add_concept(subject);
        self.add_concept(object);

        let pair = Pair::new(subject, object);
        let existing = self.pair_index.get(&pair).copied();
        let index = match existing {
            Some(index) => index,
            None => {
                let index = self.pairs.len();
                self.pair_index.insert(pair.clone(), index);
                self.pairs.push(pair);
                index
            }
        };
        &self.pairs[index]
    }

    /// Record `subject -> object = truth`, creating the pair if needed.
    ///
    /// Returns `false` when the same `(pair, truth)` was already in the chain.
    pub fn add_fact(&mut self, subject: &str, object: &str, truth: bool, kind: RelationKind) -> bool {
        let pair = self.add_pair(subject, object).clone();
        let appended = self.chain.append(Fact { pair, truth, kind });
        if appended {
            trace!(subject, object, truth, "fact appended");
        }
        appended
    }

    /// Look up a concept by name
    pub fn concept(&self, name: &str) -> Option<&Concept> {
        self.concept_index.get(name).map(|&index| &self.concepts[index])
    }

    /// Exact pair lookup; never creates
    pub fn pair(&self, subject: &str, object: &str) -> Option<&Pair> {
        self.pair_index
            .get(&Pair::new(subject, object))
            .map(|&index| &self.pairs[index])
    }

    /// Last-write-wins truth value of `subject -> object`
    pub fn current_state(&self, subject: &str, object: &str) -> Option<bool> {
        self.chain.current_state(&Pair::new(subject, object))
    }

    /// All concepts in registration order
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    /// All pairs in creation order
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// All facts in chain order
    pub fn facts(&self) -> &[Fact] {
        self.chain.facts()
    }

    /// The underlying chain
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Read-only query view
    pub fn explorer(&self) -> Explorer<'_> {
        Explorer::new(self)
    }

    /// The chain as text, one fact per line in chain order
    pub fn serialize(&self) -> String {
        self.chain.lines().collect::<Vec<_>>().join("\n")
    }

    /// Drop every concept, pair and fact
    pub fn clear(&mut self) {
        self.concepts.clear();
        self.concept_index.clear();
        self.pairs.clear();
        self.pair_index.clear();
        self.chain.clear();
    }
}
