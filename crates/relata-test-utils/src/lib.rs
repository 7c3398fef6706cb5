//! Testing utilities for the relata runtime
//!
//! Hooks that record or fail on demand, a small runtime harness wired to the
//! standard verbs, program fixtures, and assertions over graph state.

pub mod assertions;
pub mod fixtures;
pub mod harness;
pub mod mocks;

pub use assertions::{assert_fact, assert_no_fact, assert_state, fact_lines};
pub use harness::TestRuntime;
pub use mocks::{FailingHook, Invocation, RecordingHook};
pub use relata_stdlib::BufferSink;

/// Initialize tracing for tests with a default configuration
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("relata=debug,relata_dsl=trace,relata_core=debug,relata_stdlib=debug")
        .with_test_writer()
        .try_init();
}
