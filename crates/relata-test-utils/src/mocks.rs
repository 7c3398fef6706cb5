//! Hooks for exercising the dispatch protocol

use parking_lot::Mutex;
use relata_core::{ConceptGraph, CoreError, Hook, HookOutcome};
use relata_dsl::Token;
use std::sync::Arc;

/// One recorded hook call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The statement-line the hook was found in
    pub line: Vec<Token>,
    /// The block, when the line was a header
    pub block: Option<Vec<Token>>,
}

/// Records every call and answers with a scripted outcome.
///
/// Clones share the recording, so keep one handle and register another.
#[derive(Debug, Clone)]
pub struct RecordingHook {
    verb: String,
    outcome: HookOutcome,
    calls: Arc<Mutex<Vec<Invocation>>>,
}

impl RecordingHook {
    /// A hook that records and returns nothing
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            outcome: HookOutcome::Done,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer every call with these tokens
    pub fn returning(mut self, tokens: Vec<Token>) -> Self {
        self.outcome = HookOutcome::from_tokens(tokens);
        self
    }

    /// Boxed clone for registration
    pub fn boxed(&self) -> Box<dyn Hook> {
        Box::new(self.clone())
    }

    /// Calls so far
    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.lock().clone()
    }

    /// Number of calls so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Hook for RecordingHook {
    fn verb(&self) -> &str {
        &self.verb
    }

    fn invoke(
        &self,
        _graph: &mut ConceptGraph,
        line: &[Token],
        block: Option<&[Token]>,
    ) -> Result<HookOutcome, CoreError> {
        self.calls.lock().push(Invocation {
            line: line.to_vec(),
            block: block.map(<[Token]>::to_vec),
        });
        Ok(self.outcome.clone())
    }
}

/// Always fails with the given error
#[derive(Debug, Clone)]
pub struct FailingHook {
    verb: String,
    error: CoreError,
}

impl FailingHook {
    /// Fail with a [`CoreError::HookFailed`] carrying `message`
    pub fn new(verb: impl Into<String>, message: impl Into<String>) -> Self {
        let verb = verb.into();
        let error = CoreError::hook_failed(verb.clone(), message);
        Self { verb, error }
    }
}

impl Hook for FailingHook {
    fn verb(&self) -> &str {
        &self.verb
    }

    fn invoke(
        &self,
        _graph: &mut ConceptGraph,
        _line: &[Token],
        _block: Option<&[Token]>,
    ) -> Result<HookOutcome, CoreError> {
        Err(self.error.clone())
    }
}
