//! Compiler facade
//!
//! Owns one graph and one hook registry. Every `compile` call adds to the
//! same graph until [`Compiler::reset`] clears it.

use relata_core::{
    BlockState, ConceptGraph, Dispatcher, Explorer, Fact, GraphStats, Hook, HookRegistry,
    ParseSummary,
};
use relata_dsl::tokenize;
use relata_stdlib::{standard_registry, OutputSink, StdoutSink};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::CompilerConfig;
use crate::error::RelataResult;

/// Compiles relata source into graph state
#[derive(Debug)]
pub struct Compiler {
    graph: ConceptGraph,
    hooks: HookRegistry,
    config: CompilerConfig,
}

/// Builds a [`Compiler`] from configuration, an output sink and plugin verbs
pub struct CompilerBuilder {
    config: CompilerConfig,
    sink: Arc<dyn OutputSink>,
    plugins: HookRegistry,
}

#[derive(Serialize)]
struct StateDocument<'a> {
    stats: GraphStats,
    state: BlockState,
    facts: &'a [Fact],
}

impl CompilerBuilder {
    fn new() -> Self {
        Self {
            config: CompilerConfig::default(),
            sink: Arc::new(StdoutSink),
            plugins: HookRegistry::new(),
        }
    }

    /// Use `config` instead of the defaults
    pub fn with_config(mut self, config: CompilerConfig) -> Self {
        self.config = config;
        self
    }

    /// Send `say` output to `sink` instead of stdout
    pub fn with_sink(mut self, sink: Arc<dyn OutputSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Register a plugin verb; it replaces a built-in of the same name
    pub fn with_plugin(mut self, hook: Box<dyn Hook>) -> Self {
        self.plugins.register(hook);
        self
    }

    /// Register a plugin under an explicit name
    pub fn with_plugin_as(mut self, name: impl Into<String>, hook: Box<dyn Hook>) -> Self {
        self.plugins.register_as(name, hook);
        self
    }

    /// Validate the configuration and assemble the registry
    pub fn build(self) -> RelataResult<Compiler> {
        self.config.validate()?;

        let mut hooks = standard_registry(self.sink)?;
        hooks.merge(self.plugins);
        debug!(verbs = ?hooks.verbs(), "hook registry assembled");

        Ok(Compiler {
            graph: ConceptGraph::new(),
            hooks,
            config: self.config,
        })
    }
}

impl Compiler {
    /// Start building a compiler
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    /// A compiler with the built-in verbs, default configuration and stdout output
    pub fn new() -> RelataResult<Self> {
        Self::builder().build()
    }

    /// Compile `source` and return the serialized chain of every fact so far
    pub fn compile(&mut self, source: &str) -> RelataResult<String> {
        self.run(source)?;
        let mut output = self.graph.serialize();
        if self.config.trailing_newline && !output.is_empty() {
            output.push('\n');
        }
        Ok(output)
    }

    /// Compile `source` and return the graph
    pub fn compile_to_state(&mut self, source: &str) -> RelataResult<&ConceptGraph> {
        self.run(source)?;
        Ok(&self.graph)
    }

    /// Forget every concept, pair and fact
    pub fn reset(&mut self) {
        self.graph.clear();
        info!("compiler state reset");
    }

    /// The graph built so far
    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    /// Query layer over the graph built so far
    pub fn explorer(&self) -> Explorer<'_> {
        self.graph.explorer()
    }

    /// The registered hooks
    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Active configuration
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Stats, block state and facts as a pretty-printed JSON document
    pub fn state_json(&self) -> RelataResult<String> {
        let explorer = self.graph.explorer();
        let document = StateDocument {
            stats: explorer.stats(),
            state: explorer.block_state(),
            facts: explorer.facts(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn run(&mut self, source: &str) -> RelataResult<ParseSummary> {
        let statements = tokenize(source);
        info!(statements = statements.len(), "compiling");

        let summary = Dispatcher::new(&self.hooks)
            .with_max_continuations(self.config.max_continuations)
            .parse(&mut self.graph, &statements)?;

        info!(
            facts = self.graph.facts().len(),
            concepts = self.graph.concepts().len(),
            hook_calls = summary.hook_calls,
            inferred = summary.inferred,
            "compiled"
        );
        Ok(summary)
    }
}
