//! Hooks: reserved words mapped to externally supplied behaviour
//!
//! A hook receives the whole statement-line it was found in and, when that
//! line is a block header, the block's raw lines. It may read and write the
//! graph. What it returns decides whether parsing continues: a non-empty
//! token sequence is parsed as a fresh statement-line, anything else ends
//! dispatch for the line.

use relata_dsl::Token;
use std::collections::HashMap;
use std::fmt;

use crate::domain::graph::ConceptGraph;
use crate::error::CoreError;

/// What a hook hands back to the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Nothing further to parse
    Done,
    /// Parse these tokens as the next statement-line
    Continue(Vec<Token>),
}

impl HookOutcome {
    /// `Continue` for a non-empty sequence, `Done` otherwise
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        if tokens.is_empty() {
            HookOutcome::Done
        } else {
            HookOutcome::Continue(tokens)
        }
    }
}

/// Behaviour registered under a reserved word
pub trait Hook {
    /// The reserved word this hook answers to by default
    fn verb(&self) -> &str;

    /// Run the hook for one statement-line
    fn invoke(
        &self,
        graph: &mut ConceptGraph,
        line: &[Token],
        block: Option<&[Token]>,
    ) -> Result<HookOutcome, CoreError>;
}

/// Adapts a closure into a [`Hook`], for plugin verbs that need no state
pub struct FnHook<F> {
    verb: String,
    func: F,
}

impl<F> FnHook<F>
where
    F: Fn(&mut ConceptGraph, &[Token], Option<&[Token]>) -> Result<HookOutcome, CoreError>,
{
    /// Wrap `func` under `verb`
    pub fn new(verb: impl Into<String>, func: F) -> Self {
        Self {
            verb: verb.into(),
            func,
        }
    }
}

impl<F> Hook for FnHook<F>
where
    F: Fn(&mut ConceptGraph, &[Token], Option<&[Token]>) -> Result<HookOutcome, CoreError>,
{
    fn verb(&self) -> &str {
        &self.verb
    }

    fn invoke(
        &self,
        graph: &mut ConceptGraph,
        line: &[Token],
        block: Option<&[Token]>,
    ) -> Result<HookOutcome, CoreError> {
        (self.func)(graph, line, block)
    }
}

/// Name-to-hook table consulted by the dispatcher
#[derive(Default)]
pub struct HookRegistry {
    hooks: HashMap<String, Box<dyn Hook>>,
}

impl HookRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook under its own verb, returning any hook it replaces
    pub fn register(&mut self, hook: Box<dyn Hook>) -> Option<Box<dyn Hook>> {
        let verb = hook.verb().to_string();
        self.register_as(verb, hook)
    }

    /// Register a hook under an explicit name
    pub fn register_as(&mut self, name: impl Into<String>, hook: Box<dyn Hook>) -> Option<Box<dyn Hook>> {
        self.hooks.insert(name.into(), hook)
    }

    /// Move every hook from `other` into this registry; `other` wins on clashes
    pub fn merge(&mut self, other: HookRegistry) {
        self.hooks.extend(other.hooks);
    }

    /// Hook registered under `name`
    pub fn get(&self, name: &str) -> Option<&dyn Hook> {
        self.hooks.get(name).map(|hook| hook.as_ref())
    }

    /// Whether `name` is a reserved word
    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// Registered names, sorted
    pub fn verbs(&self) -> Vec<&str> {
        let mut verbs: Vec<&str> = self.hooks.keys().map(String::as_str).collect();
        verbs.sort_unstable();
        verbs
    }

    /// Number of registered hooks
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// True when no hooks are registered
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("verbs", &self.verbs())
            .finish()
    }
}
