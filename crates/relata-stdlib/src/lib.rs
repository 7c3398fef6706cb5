//!
//! Standard library of verbs for the relata runtime
//!
//! Provides the built-in reserved words (`is`, `isnt`, `has`, `hasnt`,
//! `say`) as [`relata_core::Hook`] implementations, and a factory that
//! assembles them into a registry. Plugin verbs from elsewhere are merged
//! on top of this registry by the caller.

pub mod factory;
pub mod output;
pub mod verbs;

pub use factory::{create_builtin, create_hook, standard_registry};
pub use output::{BufferSink, OutputSink, StdoutSink};
pub use verbs::{BuiltinVerb, RelationHook, SayHook, UnknownVerb};
