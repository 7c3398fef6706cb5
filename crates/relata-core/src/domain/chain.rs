//! The chain: an append-only log of signed relationship facts

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::pair::Pair;

/// Caller-attached category of a fact.
///
/// The tag is metadata only. Deduplication, serialization and inference all
/// ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// `is` / `isnt`
    #[default]
    Identity,
    /// `has` / `hasnt`
    Property,
}

/// A recorded `(pair, truth)` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// The pair the fact is about
    pub pair: Pair,
    /// Whether the relationship holds
    pub truth: bool,
    /// Caller-attached category
    #[serde(default)]
    pub kind: RelationKind,
}

impl Fact {
    /// Create a fact of the default kind
    pub fn new(pair: Pair, truth: bool) -> Self {
        Self {
            pair,
            truth,
            kind: RelationKind::default(),
        }
    }

    /// Subject name
    pub fn subject(&self) -> &str {
        &self.pair.subject
    }

    /// Object name
    pub fn object(&self) -> &str {
        &self.pair.object
    }

    /// Truth value
    pub fn truth(&self) -> bool {
        self.truth
    }

    /// Caller-attached category
    pub fn kind(&self) -> RelationKind {
        self.kind
    }
}

/// Serialized form: `<subject> is <object>` or `<subject> isnt <object>`
impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.truth { "is" } else { "isnt" };
        write!(f, "{} {} {}", self.pair.subject, verb, self.pair.object)
    }
}

/// Append-only fact log.
///
/// Never holds two entries with the same `(pair, truth)`, but may hold both
/// truth values for one pair. The latest entry per pair is indexed so the
/// current state lookup is O(1).
#[derive(Debug, Clone, Default)]
pub struct Chain {
    facts: Vec<Fact>,
    seen: HashSet<(Pair, bool)>,
    latest: HashMap<Pair, usize>,
}

impl Chain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fact. Returns `false` if the same `(pair, truth)` is already
    /// recorded, in which case nothing changes.
    pub fn append(&mut self, fact: Fact) -> bool {
        let key = (fact.pair.clone(), fact.truth);
        if self.seen.contains(&key) {
            return false;
        }
        self.seen.insert(key);
        self.latest.insert(fact.pair.clone(), self.facts.len());
        self.facts.push(fact);
        true
    }

    /// The most recently appended fact for a pair
    pub fn latest(&self, pair: &Pair) -> Option<&Fact> {
        self.latest.get(pair).map(|&index| &self.facts[index])
    }

    /// Last-write-wins truth value; `None` when the pair has no facts
    pub fn current_state(&self, pair: &Pair) -> Option<bool> {
        self.latest(pair).map(Fact::truth)
    }

    /// All facts in append order
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Number of facts
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// True when nothing has been appended
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// One serialized fact per line, in chain order
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.facts.iter().map(Fact::to_string)
    }

    pub(crate) fn clear(&mut self) {
        self.facts.clear();
        self.seen.clear();
        self.latest.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fact(subject: &str, object: &str, truth: bool) -> Fact {
        Fact::new(Pair::new(subject, object), truth)
    }

    #[test]
    fn test_duplicate_fact_is_ignored() {
        let mut chain = Chain::new();
        assert!(chain.append(fact("a", "b", true)));
        assert!(!chain.append(fact("a", "b", true)));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_duplicate_ignores_kind() {
        let mut chain = Chain::new();
        chain.append(fact("a", "b", true));
        let mut property = fact("a", "b", true);
        property.kind = RelationKind::Property;
        assert!(!chain.append(property));
    }

    #[test]
    fn test_last_write_wins() {
        let mut chain = Chain::new();
        chain.append(fact("a", "b", true));
        chain.append(fact("a", "b", false));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.current_state(&Pair::new("a", "b")), Some(false));
    }

    #[test]
    fn test_reasserting_older_value_does_not_flip_state() {
        // the (pair, true) entry already exists, so it is not appended again
        let mut chain = Chain::new();
        chain.append(fact("a", "b", true));
        chain.append(fact("a", "b", false));
        chain.append(fact("a", "b", true));
        assert_eq!(chain.current_state(&Pair::new("a", "b")), Some(false));
    }

    #[test]
    fn test_unknown_state() {
        let chain = Chain::new();
        assert_eq!(chain.current_state(&Pair::new("a", "b")), None);
    }

    #[test]
    fn test_lines_render_in_order() {
        let mut chain = Chain::new();
        chain.append(fact("a", "b", true));
        chain.append(fact("b", "c", false));
        let lines: Vec<String> = chain.lines().collect();
        assert_eq!(lines, vec!["a is b", "b isnt c"]);
    }
}
