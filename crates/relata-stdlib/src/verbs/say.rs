//! `say`

use relata_core::{ConceptGraph, CoreError, Hook, HookOutcome};
use relata_dsl::{join_tokens, Token};
use std::sync::Arc;

use crate::output::OutputSink;

/// Output verb: `say hello world` emits `hello world`.
///
/// As a block header it also emits every line of the block.
#[derive(Clone)]
pub struct SayHook {
    sink: Arc<dyn OutputSink>,
}

impl SayHook {
    /// Emit to `sink`
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl Hook for SayHook {
    fn verb(&self) -> &str {
        "say"
    }

    fn invoke(
        &self,
        _graph: &mut ConceptGraph,
        line: &[Token],
        block: Option<&[Token]>,
    ) -> Result<HookOutcome, CoreError> {
        let words: &[Token] = match line.iter().position(|token| token.name() == "say") {
            Some(position) => &line[position + 1..],
            None => &[],
        };
        let block = block.unwrap_or_default();

        if words.is_empty() && block.is_empty() {
            return Err(CoreError::usage("say", "say <words...>"));
        }
        if !words.is_empty() {
            self.sink.emit(&join_tokens(words));
        }
        for entry in block {
            self.sink.emit(entry.name());
        }
        Ok(HookOutcome::Done)
    }
}
