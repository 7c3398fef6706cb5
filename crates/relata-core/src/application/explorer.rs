//! Read-only views over a [`ConceptGraph`]
//!
//! Every query answers absence with `None` or an empty collection.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::chain::Fact;
use crate::domain::concept::Concept;
use crate::domain::graph::ConceptGraph;
use crate::domain::pair::Pair;

/// `subject -> object -> truth` for every pair with a known state
pub type BlockState = BTreeMap<String, BTreeMap<String, bool>>;

/// Aggregate size of a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of distinct concepts
    pub concepts: usize,
    /// Number of distinct pairs
    pub pairs: usize,
    /// Number of facts in the chain
    pub facts: usize,
    /// `facts / concepts`, or zero for an empty graph
    pub average_facts_per_concept: f64,
}

/// Query layer borrowed from a graph
#[derive(Debug, Clone, Copy)]
pub struct Explorer<'g> {
    graph: &'g ConceptGraph,
}

impl<'g> Explorer<'g> {
    /// Wrap a graph
    pub fn new(graph: &'g ConceptGraph) -> Self {
        Self { graph }
    }

    /// Concept lookup by name
    pub fn concept_by_name(&self, name: &str) -> Option<&'g Concept> {
        self.graph.concept(name)
    }

    /// Exact pair lookup
    pub fn pair(&self, subject: &str, object: &str) -> Option<&'g Pair> {
        self.graph.pair(subject, object)
    }

    /// Last-write-wins truth value, `None` when unknown
    pub fn current_state(&self, subject: &str, object: &str) -> Option<bool> {
        self.graph.current_state(subject, object)
    }

    /// The whole chain in order
    pub fn facts(&self) -> &'g [Fact] {
        self.graph.facts()
    }

    /// Facts with `name` in either position, in chain order
    pub fn facts_for(&self, name: &str) -> Vec<&'g Fact> {
        self.graph
            .facts()
            .iter()
            .filter(|fact| fact.pair.touches(name))
            .collect()
    }

    /// Pairs with `name` in either position, in creation order
    pub fn pairs_for(&self, name: &str) -> Vec<&'g Pair> {
        self.graph
            .pairs()
            .iter()
            .filter(|pair| pair.touches(name))
            .collect()
    }

    /// De-duplicated concepts sharing a pair with `name`, first appearance first
    pub fn related_concepts(&self, name: &str) -> Vec<&'g Concept> {
        self.other_endpoints(name, |_| true)
    }

    /// Concepts `y` for which `name -> y` or `y -> name` currently has `truth`
    pub fn concepts_with_state(&self, name: &str, truth: bool) -> Vec<&'g Concept> {
        self.other_endpoints(name, |pair| {
            self.graph.chain().current_state(pair) == Some(truth)
        })
    }

    fn other_endpoints(&self, name: &str, keep: impl Fn(&Pair) -> bool) -> Vec<&'g Concept> {
        let mut seen = HashSet::new();
        let mut related = Vec::new();
        for pair in self.pairs_for(name) {
            if !keep(pair) {
                continue;
            }
            let Some(other) = pair.other(name) else {
                continue;
            };
            if !seen.insert(other) {
                continue;
            }
            if let Some(concept) = self.graph.concept(other) {
                related.push(concept);
            }
        }
        related
    }

    /// Current state of every pair, nested by subject then object
    pub fn block_state(&self) -> BlockState {
        let mut state = BlockState::new();
        for pair in self.graph.pairs() {
            if let Some(truth) = self.graph.chain().current_state(pair) {
                state
                    .entry(pair.subject.clone())
                    .or_default()
                    .insert(pair.object.clone(), truth);
            }
        }
        state
    }

    /// Aggregate counts
    pub fn stats(&self) -> GraphStats {
        let concepts = self.graph.concepts().len();
        let facts = self.graph.facts().len();
        let average_facts_per_concept = if concepts == 0 {
            0.0
        } else {
            facts as f64 / concepts as f64
        };

        GraphStats {
            concepts,
            pairs: self.graph.pairs().len(),
            facts,
            average_facts_per_concept,
        }
    }
}
