//! A runtime wired to the standard verbs with captured output

use relata_core::{ConceptGraph, CoreError, Dispatcher, Hook, HookRegistry, ParseSummary};
use relata_dsl::tokenize;
use relata_stdlib::{standard_registry, BufferSink};
use std::sync::Arc;

/// Graph, standard hooks and a buffered `say`
pub struct TestRuntime {
    /// The graph every run writes to
    pub graph: ConceptGraph,
    /// Registered hooks
    pub hooks: HookRegistry,
    /// Everything `say` emitted
    pub output: BufferSink,
}

impl TestRuntime {
    /// Standard verbs only
    pub fn new() -> Self {
        let output = BufferSink::new();
        let hooks = standard_registry(Arc::new(output.clone()))
            .expect("built-in verbs always construct");
        Self {
            graph: ConceptGraph::new(),
            hooks,
            output,
        }
    }

    /// Add or replace a hook
    pub fn with_hook(mut self, hook: Box<dyn Hook>) -> Self {
        self.hooks.register(hook);
        self
    }

    /// Tokenize and parse `source` into the graph
    pub fn run(&mut self, source: &str) -> Result<ParseSummary, CoreError> {
        Dispatcher::new(&self.hooks).parse(&mut self.graph, &tokenize(source))
    }

    /// Lines emitted by `say`
    pub fn said(&self) -> Vec<String> {
        self.output.lines()
    }
}

impl Default for TestRuntime {
    fn default() -> Self {
        Self::new()
    }
}
