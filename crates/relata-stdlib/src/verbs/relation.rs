//! `is`, `isnt`, `has`, `hasnt`

use relata_core::{ConceptGraph, CoreError, Hook, HookOutcome, RelationKind};
use relata_dsl::Token;
use tracing::debug;

use super::BuiltinVerb;

/// A relationship verb.
///
/// In the middle of a three-token line it asserts a fact:
/// `cat is animal` records `(cat, animal) = true`.
///
/// At the front of a line it is a guard: `is cat animal say yes` hands
/// `say yes` back to the dispatcher only if `(cat, animal)` currently holds
/// the verb's polarity. Unknown state never passes the guard.
#[derive(Debug, Clone, Copy)]
pub struct RelationHook {
    verb: BuiltinVerb,
    truth: bool,
    kind: RelationKind,
}

impl RelationHook {
    /// Build the hook for a relationship verb; `say` is rejected
    pub fn new(verb: BuiltinVerb) -> Result<Self, CoreError> {
        match (verb.polarity(), verb.relation_kind()) {
            (Some(truth), Some(kind)) => Ok(Self { verb, truth, kind }),
            _ => Err(CoreError::UnknownHook(format!(
                "'{}' is not a relationship verb",
                verb
            ))),
        }
    }

    fn usage(&self) -> CoreError {
        let verb = self.verb.as_str();
        CoreError::usage(
            verb,
            format!("<subject> {verb} <object>  |  {verb} <subject> <object> [then...]"),
        )
    }

    fn assert_fact(&self, graph: &mut ConceptGraph, subject: &Token, object: &Token) -> HookOutcome {
        let appended = graph.add_fact(subject.name(), object.name(), self.truth, self.kind);
        debug!(
            verb = self.verb.as_str(),
            subject = subject.name(),
            object = object.name(),
            appended,
            "relationship asserted"
        );
        HookOutcome::Done
    }

    fn guard(&self, graph: &ConceptGraph, subject: &Token, object: &Token, rest: &[Token]) -> HookOutcome {
        let state = graph.current_state(subject.name(), object.name());
        if state == Some(self.truth) {
            HookOutcome::from_tokens(rest.to_vec())
        } else {
            debug!(
                verb = self.verb.as_str(),
                subject = subject.name(),
                object = object.name(),
                ?state,
                "guard did not hold"
            );
            HookOutcome::Done
        }
    }
}

impl Hook for RelationHook {
    fn verb(&self) -> &str {
        self.verb.as_str()
    }

    fn invoke(
        &self,
        graph: &mut ConceptGraph,
        line: &[Token],
        _block: Option<&[Token]>,
    ) -> Result<HookOutcome, CoreError> {
        let verb = self.verb.as_str();
        let position = line.iter().position(|token| token.name() == verb);

        match (position, line) {
            (Some(0), [_, subject, object, rest @ ..]) => Ok(self.guard(graph, subject, object, rest)),
            (Some(1), [subject, _, object]) => Ok(self.assert_fact(graph, subject, object)),
            _ => Err(self.usage()),
        }
    }
}
