// Relata Integration Tests
//
// Cross-crate tests that drive whole programs through the compiler

/// Shared setup for the integration tests
pub mod utils {
    use relata::{Compiler, CompilerConfig, Hook, RelataResult};
    use relata_test_utils::BufferSink;
    use std::sync::Arc;

    /// A compiler whose `say` output is captured
    pub fn buffered_compiler() -> (Compiler, BufferSink) {
        buffered_compiler_with(CompilerConfig::default(), Vec::new())
    }

    /// A compiler with captured output, a configuration and plugin verbs
    pub fn buffered_compiler_with(
        config: CompilerConfig,
        plugins: Vec<Box<dyn Hook>>,
    ) -> (Compiler, BufferSink) {
        relata_test_utils::init_test_tracing();

        let sink = BufferSink::new();
        let builder = plugins.into_iter().fold(
            Compiler::builder()
                .with_config(config)
                .with_sink(Arc::new(sink.clone())),
            |builder, plugin| builder.with_plugin(plugin),
        );
        let compiler = builder.build().expect("compiler should build");
        (compiler, sink)
    }

    /// Compile `source` on a fresh compiler, returning the chain and what was said
    pub fn compile(source: &str) -> (RelataResult<String>, Vec<String>) {
        let (mut compiler, sink) = buffered_compiler();
        let result = compiler.compile(source);
        (result, sink.lines())
    }
}
