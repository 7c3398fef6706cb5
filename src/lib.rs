//!
//! Relata - a small relationship language
//!
//! Programs are lines of plain words. Reserved words (`is`, `isnt`, `has`,
//! `hasnt`, `say`, and any plugin verbs) are dispatched to hooks that record
//! facts about directed pairs of concepts, test them, or produce output.
//! After every statement one pass of inference derives `A -> C` from
//! `A -> B` and `B -> C`.
//!
//! ```
//! use relata::Compiler;
//! use relata_stdlib::BufferSink;
//! use std::sync::Arc;
//!
//! let said = BufferSink::new();
//! let mut compiler = Compiler::builder()
//!     .with_sink(Arc::new(said.clone()))
//!     .build()
//!     .unwrap();
//!
//! let chain = compiler
//!     .compile("cat is mammal\nmammal is animal\nis cat animal say meow")
//!     .unwrap();
//!
//! assert_eq!(chain, "cat is mammal\nmammal is animal\ncat is animal");
//! assert_eq!(said.lines(), vec!["meow"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Compiler facade
pub mod compiler;

/// Configuration
pub mod config;

/// Error types
pub mod error;

pub use compiler::{Compiler, CompilerBuilder};
pub use config::CompilerConfig;
pub use error::{RelataError, RelataResult};

pub use relata_core::{ConceptGraph, CoreError, Explorer, Hook, HookOutcome, HookRegistry};
pub use relata_stdlib::{BufferSink, OutputSink, StdoutSink};

/// Returns the version of the relata crate
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize tracing from `RUST_LOG`, falling back to the environment's `RELATA_LOG_LEVEL`
pub fn init_tracing() {
    init_tracing_with(&CompilerConfig::load());
}

/// Initialize tracing from `RUST_LOG`, falling back to `config.log_level`
pub fn init_tracing_with(config: &CompilerConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
