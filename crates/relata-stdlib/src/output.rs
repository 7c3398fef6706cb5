//! Where `say` writes to

use std::sync::{Arc, Mutex, PoisonError};

/// Destination for text emitted by output verbs
pub trait OutputSink: Send + Sync {
    /// Emit one line of text
    fn emit(&self, text: &str);
}

/// Prints each line to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, text: &str) {
        tracing::info!(target: "relata::say", "{}", text);
        println!("{}", text);
    }
}

/// Keeps every emitted line in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferSink {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forget everything emitted so far
    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl OutputSink for BufferSink {
    fn emit(&self, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
    }
}
