//! Statement dispatch: hook recognition, continuation and inference scheduling

use relata_dsl::{explode, join_tokens, triples, Statement, Token};
use std::collections::VecDeque;
use tracing::{debug, trace};

use super::inference::InferenceEngine;
use crate::domain::graph::ConceptGraph;
use crate::error::CoreError;
use crate::hook::{HookOutcome, HookRegistry};

/// Counters for one [`Dispatcher::parse`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Statement-lines processed
    pub statements: usize,
    /// Hook invocations, continuations included
    pub hook_calls: usize,
    /// Facts appended by inference passes
    pub inferred: usize,
}

/// A line waiting to be parsed, with the block it heads (if any)
struct PendingLine {
    tokens: Vec<Token>,
    block: Option<Vec<Token>>,
}

/// Walks statement-lines, invokes hooks and runs inference after each line.
///
/// Hook continuations are processed with a work queue instead of recursion,
/// so a long chain of continuations does not grow the stack.
pub struct Dispatcher<'h> {
    hooks: &'h HookRegistry,
    inference: InferenceEngine,
    max_continuations: Option<usize>,
}

impl<'h> Dispatcher<'h> {
    /// Create a dispatcher over a hook registry
    pub fn new(hooks: &'h HookRegistry) -> Self {
        Self {
            hooks,
            inference: InferenceEngine::new(),
            max_continuations: None,
        }
    }

    /// Fail a statement once its hooks have continued more than `limit` times.
    ///
    /// The count covers every triple of a block-shaped statement.
    pub fn with_max_continuations(mut self, limit: Option<usize>) -> Self {
        self.max_continuations = limit;
        self
    }

    /// Parse every statement in order. The first hook error aborts the call.
    pub fn parse(
        &self,
        graph: &mut ConceptGraph,
        statements: &[Statement],
    ) -> Result<ParseSummary, CoreError> {
        let mut summary = ParseSummary::default();
        for statement in statements {
            summary.hook_calls += self.parse_statement(graph, statement)?;
            summary.inferred += self.inference.infer_missing_pairs(graph);
            summary.statements += 1;
        }
        Ok(summary)
    }

    /// Parse one statement-line without running inference.
    ///
    /// Block-shaped lines are exploded into words, registered as a boxed
    /// concept, and fed through [`Dispatcher::parse_line`] three words at a
    /// time. Returns the number of hook invocations.
    pub fn parse_statement(
        &self,
        graph: &mut ConceptGraph,
        statement: &Statement,
    ) -> Result<usize, CoreError> {
        let mut continuations = 0;
        if !statement.is_block_shaped() {
            return self.dispatch(
                graph,
                &statement.tokens,
                statement.block.as_deref(),
                &mut continuations,
            );
        }

        let words = explode(&statement.tokens);
        let name = join_tokens(&words);
        trace!(boxed = %name, "registering block content");
        graph.add_boxed(&name, words.clone());

        let mut calls = 0;
        for triple in triples(&words) {
            calls += self.dispatch(graph, triple, None, &mut continuations)?;
        }
        Ok(calls)
    }

    /// Dispatch one line: invoke the first hook found in it, then keep
    /// parsing whatever the hook hands back. A line without a hook only
    /// registers its tokens as concepts. Returns the number of hook
    /// invocations.
    pub fn parse_line(
        &self,
        graph: &mut ConceptGraph,
        tokens: &[Token],
        block: Option<&[Token]>,
    ) -> Result<usize, CoreError> {
        let mut continuations = 0;
        self.dispatch(graph, tokens, block, &mut continuations)
    }

    /// `continuations` is shared by every line of one statement
    fn dispatch(
        &self,
        graph: &mut ConceptGraph,
        tokens: &[Token],
        block: Option<&[Token]>,
        continuations: &mut usize,
    ) -> Result<usize, CoreError> {
        let mut queue = VecDeque::from([PendingLine {
            tokens: tokens.to_vec(),
            block: block.map(<[Token]>::to_vec),
        }]);
        let mut calls = 0;

        while let Some(line) = queue.pop_front() {
            let found = line
                .tokens
                .iter()
                .find_map(|token| self.hooks.get(token.name()).map(|hook| (token, hook)));

            let Some((verb, hook)) = found else {
                for token in &line.tokens {
                    graph.add_concept(token.name());
                }
                continue;
            };

            debug!(verb = %verb, line = %join_tokens(&line.tokens), "dispatching hook");
            calls += 1;

            match hook.invoke(graph, &line.tokens, line.block.as_deref())? {
                HookOutcome::Done => {}
                HookOutcome::Continue(next) if next.is_empty() => {}
                HookOutcome::Continue(next) => {
                    *continuations += 1;
                    if let Some(limit) = self.max_continuations {
                        if *continuations > limit {
                            return Err(CoreError::ContinuationLimit(limit));
                        }
                    }
                    trace!(next = %join_tokens(&next), "hook continued");
                    queue.push_back(PendingLine {
                        tokens: next,
                        block: None,
                    });
                }
            }
        }

        Ok(calls)
    }
}
