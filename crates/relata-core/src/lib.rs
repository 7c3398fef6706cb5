//!
//! Relata Core - runtime for the relata relationship language
//!
//! This crate holds the concept graph (concepts, directed pairs and the
//! append-only fact chain), the read-only query layer, the one-hop inference
//! engine, and the dispatcher that walks tokenized statement-lines and hands
//! reserved words to hooks.
//!
//! ```
//! use relata_core::{ConceptGraph, Dispatcher, HookRegistry};
//! use relata_dsl::tokenize;
//!
//! let hooks = HookRegistry::new();
//! let mut graph = ConceptGraph::new();
//! Dispatcher::new(&hooks)
//!     .parse(&mut graph, &tokenize("red green blue"))
//!     .unwrap();
//!
//! assert_eq!(graph.explorer().stats().concepts, 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - concepts, pairs, facts and the graph that holds them
pub mod domain;

/// Application services - querying, inference and dispatch
pub mod application;

/// Hook trait and registry
pub mod hook;

/// Error types
pub mod error;

// Re-export key types
pub use application::dispatcher::{Dispatcher, ParseSummary};
pub use application::explorer::{BlockState, Explorer, GraphStats};
pub use application::inference::InferenceEngine;
pub use domain::chain::{Chain, Fact, RelationKind};
pub use domain::concept::Concept;
pub use domain::graph::ConceptGraph;
pub use domain::pair::Pair;
pub use error::CoreError;
pub use hook::{FnHook, Hook, HookOutcome, HookRegistry};
