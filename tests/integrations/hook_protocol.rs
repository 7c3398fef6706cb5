//! How reserved words hand control to hooks and back

use pretty_assertions::assert_eq;
use relata::{CompilerConfig, CoreError, RelataError};
use relata_dsl::{tokens, Token};
use relata_integration_tests::utils::{buffered_compiler_with, compile};
use relata_test_utils::{FailingHook, Invocation, RecordingHook};

#[test]
fn test_guard_continues_into_say() {
    let (_, said) = compile("A is B\nis A B say yes");
    assert_eq!(said, vec!["yes"]);
}

#[test]
fn test_guard_on_unknown_pair_does_nothing() {
    let (result, said) = compile("is A B say yes\nisnt A B say no");
    assert_eq!(result.unwrap(), "");
    assert!(said.is_empty());
}

#[test]
fn test_plugin_receives_line_and_block() {
    let note = RecordingHook::new("note");
    let (mut compiler, _) = buffered_compiler_with(CompilerConfig::default(), vec![note.boxed()]);

    compiler
        .compile("keep this note\nnote\n  first line\n  second line")
        .unwrap();

    assert_eq!(
        note.invocations(),
        vec![
            Invocation {
                line: tokens("keep this note"),
                block: None,
            },
            Invocation {
                line: tokens("note"),
                block: Some(vec![Token::from("first line"), Token::from("second line")]),
            },
        ]
    );
}

#[test]
fn test_continuation_is_parsed_as_a_new_line() {
    let redirect = RecordingHook::new("redirect").returning(tokens("x is y"));
    let (mut compiler, _) =
        buffered_compiler_with(CompilerConfig::default(), vec![redirect.boxed()]);

    let output = compiler.compile("redirect now").unwrap();
    assert_eq!(output, "x is y");
    assert_eq!(redirect.call_count(), 1);
}

#[test]
fn test_first_reserved_word_wins() {
    let probe = RecordingHook::new("probe");
    let (mut compiler, said) = buffered_compiler_with(CompilerConfig::default(), vec![probe.boxed()]);

    // `probe` is met before `say`, so `say` is never invoked
    compiler.compile("probe then say hi").unwrap();
    assert_eq!(probe.call_count(), 1);
    assert!(said.lines().is_empty());
}

#[test]
fn test_plugin_overrides_builtin() {
    let say = RecordingHook::new("say");
    let (mut compiler, said) = buffered_compiler_with(CompilerConfig::default(), vec![say.boxed()]);

    compiler.compile("say hello").unwrap();
    assert_eq!(say.call_count(), 1);
    assert!(said.lines().is_empty());
}

#[test]
fn test_hook_error_aborts_the_program() {
    let (mut compiler, said) = buffered_compiler_with(
        CompilerConfig::default(),
        vec![Box::new(FailingHook::new("explode", "boom"))],
    );

    let err = compiler
        .compile("a is b\nexplode now\nsay unreachable")
        .unwrap_err();
    match err {
        RelataError::Core(CoreError::HookFailed { verb, message }) => {
            assert_eq!(verb, "explode");
            assert_eq!(message, "boom");
        }
        other => panic!("Expected HookFailed, got {:?}", other),
    }
    assert!(said.lines().is_empty());
    assert_eq!(compiler.graph().current_state("a", "b"), Some(true));
}

#[test]
fn test_usage_error_names_the_pattern() {
    let (result, _) = compile("cat is big animal");
    let message = result.unwrap_err().to_string();
    assert!(message.contains("'is'"), "{}", message);
    assert!(message.contains("<subject> is <object>"), "{}", message);
}

#[test]
fn test_continuation_limit() {
    let again = RecordingHook::new("again").returning(tokens("again"));
    let config = CompilerConfig {
        max_continuations: Some(10),
        ..CompilerConfig::default()
    };
    let (mut compiler, _) = buffered_compiler_with(config, vec![again.boxed()]);

    let err = compiler.compile("again").unwrap_err();
    assert!(matches!(err, RelataError::Core(CoreError::ContinuationLimit(10))));
    assert_eq!(again.call_count(), 11);
}

#[test]
fn test_guards_chain() {
    let (_, said) = compile("a is b\nc has d\nis a b has c d say both");
    assert_eq!(said, vec!["both"]);
}
