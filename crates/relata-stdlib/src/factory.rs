//! Factory for the standard hook registry

use relata_core::{CoreError, Hook, HookRegistry};
use std::sync::Arc;

use crate::output::OutputSink;
use crate::verbs::{BuiltinVerb, RelationHook, SayHook};

/// Build the hook for one built-in verb
pub fn create_builtin(verb: BuiltinVerb, sink: Arc<dyn OutputSink>) -> Result<Box<dyn Hook>, CoreError> {
    match verb {
        BuiltinVerb::Say => Ok(Box::new(SayHook::new(sink))),
        relationship => Ok(Box::new(RelationHook::new(relationship)?)),
    }
}

/// Creates a hook instance based on its reserved word.
pub fn create_hook(verb: &str, sink: Arc<dyn OutputSink>) -> Result<Box<dyn Hook>, CoreError> {
    let verb: BuiltinVerb = verb
        .parse()
        .map_err(|_| CoreError::UnknownHook(verb.to_string()))?;
    create_builtin(verb, sink)
}

/// A registry holding every built-in verb, with `say` writing to `sink`
pub fn standard_registry(sink: Arc<dyn OutputSink>) -> Result<HookRegistry, CoreError> {
    let mut registry = HookRegistry::new();
    for verb in BuiltinVerb::ALL {
        registry.register(create_builtin(verb, Arc::clone(&sink))?);
    }
    Ok(registry)
}
