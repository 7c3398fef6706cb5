//! One-hop transitive propagation over the pair index

use tracing::{debug, trace};

use crate::domain::graph::ConceptGraph;
use crate::domain::pair::Pair;

/// Derives missing facts from chains of two known pairs.
///
/// For every pair `(a, b)` and every pair `(x, a)` with a known state, the
/// missing pair `(x, b)` receives `state(x, a)` when `(a, b)` holds and the
/// negation of it otherwise, including when `(a, b)` has no facts yet.
/// Self-loops are never created.
///
/// A run is a single relaxation pass over the pairs that exist when it
/// starts; pairs it creates are not used as premises until the next run.
/// The relation kind of a fact never gates the rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct InferenceEngine;

impl InferenceEngine {
    /// Create an engine
    pub fn new() -> Self {
        Self
    }

    /// Run one pass, returning how many facts were appended
    pub fn infer_missing_pairs(&self, graph: &mut ConceptGraph) -> usize {
        let snapshot: Vec<Pair> = graph.pairs().to_vec();
        let mut inferred = 0;

        for base in &snapshot {
            // a base pair without facts reads as not holding
            let base_fact = graph.chain().latest(base);
            let base_state = base_fact.map(|fact| fact.truth);
            let kind = base_fact.map(|fact| fact.kind).unwrap_or_default();

            for dependent in snapshot.iter().filter(|pair| pair.object == base.subject) {
                let Some(dep_state) = graph.chain().current_state(dependent) else {
                    continue;
                };
                let target = Pair::new(dependent.subject.as_str(), base.object.as_str());
                if target.is_self_loop() {
                    continue;
                }
                if graph.pair(&target.subject, &target.object).is_some() {
                    continue;
                }

                let truth = if base_state == Some(true) { dep_state } else { !dep_state };
                trace!(
                    subject = %dependent.subject,
                    object = %base.object,
                    truth,
                    via = %base.subject,
                    "inferred fact"
                );
                if graph.add_fact(&dependent.subject, &base.object, truth, kind) {
                    inferred += 1;
                }
            }
        }

        if inferred > 0 {
            debug!(inferred, pairs = graph.pairs().len(), "inference pass complete");
        }
        inferred
    }
}
