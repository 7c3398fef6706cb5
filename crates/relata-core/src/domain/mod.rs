/// Concepts and boxed concepts
pub mod concept;

/// Directed concept pairs
pub mod pair;

/// The append-only fact log
pub mod chain;

/// The graph handle tying concepts, pairs and chain together
pub mod graph;
