//! Observable properties of compiled programs

use pretty_assertions::assert_eq;
use relata_integration_tests::utils::{buffered_compiler, compile};
use relata_test_utils::{assert_fact, assert_no_fact, assert_state, fixtures};

#[test]
fn test_repeated_statement_is_idempotent() {
    let (once, _) = compile("cat is animal");
    let (thrice, _) = compile("cat is animal\ncat is animal\ncat is animal");
    assert_eq!(once.unwrap(), thrice.unwrap());
}

#[test]
fn test_pairs_are_directional() {
    let (mut compiler, _) = buffered_compiler();
    let graph = compiler.compile_to_state("cat is animal").unwrap();
    assert_state(graph, "cat", "animal", Some(true));
    assert_state(graph, "animal", "cat", None);
    assert!(graph.pair("animal", "cat").is_none());
}

#[test]
fn test_last_write_wins() {
    let (mut compiler, _) = buffered_compiler();
    let graph = compiler.compile_to_state(fixtures::CONTRADICTION).unwrap();
    assert_state(graph, "sky", "blue", Some(false));
    assert_fact(graph, "sky is blue");
    assert_fact(graph, "sky isnt blue");
}

#[test]
fn test_repeating_an_earlier_fact_does_not_restore_it() {
    // (pair, truth) is already in the chain, so the repeat is not appended
    let (mut compiler, _) = buffered_compiler();
    let graph = compiler
        .compile_to_state("sky is blue\nsky isnt blue\nsky is blue")
        .unwrap();
    assert_state(graph, "sky", "blue", Some(false));
    assert_eq!(graph.facts().len(), 2);
}

#[test]
fn test_positive_transitive_closure() {
    let (output, _) = compile("a is b\nb is c");
    assert_eq!(output.unwrap(), "a is b\nb is c\na is c");
}

#[test]
fn test_negative_transitive_closure() {
    let (output, _) = compile("a is b\nb isnt c");
    assert_eq!(output.unwrap(), "a is b\nb isnt c\na isnt c");
}

#[test]
fn test_taxonomy_closure() {
    let (mut compiler, _) = buffered_compiler();
    let graph = compiler.compile_to_state(fixtures::TAXONOMY).unwrap();
    assert_state(graph, "cat", "animal", Some(true));
    assert_state(graph, "mammal", "plant", Some(false));
    assert_state(graph, "cat", "plant", Some(false));
}

#[test]
fn test_inference_never_creates_self_loops() {
    let (mut compiler, _) = buffered_compiler();
    let graph = compiler.compile_to_state("a is b\nb is a").unwrap();
    assert!(graph.pair("a", "a").is_none());
    assert!(graph.pair("b", "b").is_none());
    assert_eq!(graph.facts().len(), 2);
}

#[test]
fn test_inference_does_not_overwrite_explicit_facts() {
    let (mut compiler, _) = buffered_compiler();
    let graph = compiler
        .compile_to_state("a isnt c\na is b\nb is c")
        .unwrap();
    assert_state(graph, "a", "c", Some(false));
    assert_no_fact(graph, "a is c");
}

#[test]
fn test_serialized_output_recompiles_to_the_same_chain() {
    let (first, _) = compile("a is b\nb is c\nc isnt d\nx has y");
    let first = first.unwrap();

    let (second, _) = compile(&first);
    let second = second.unwrap();

    for line in first.lines() {
        assert!(second.lines().any(|fact| fact == line), "lost '{}'", line);
    }
    assert_eq!(first, second);
}

#[test]
fn test_has_serializes_as_is() {
    let (output, _) = compile("cat has fur\ncat hasnt wings");
    assert_eq!(output.unwrap(), "cat is fur\ncat isnt wings");
}

#[test]
fn test_block_ends_at_unindented_line() {
    let (mut compiler, said) = buffered_compiler();
    let graph = compiler
        .compile_to_state("say\n  hello there\nback home")
        .unwrap();
    assert_eq!(said.lines(), vec!["hello there"]);

    let boxed = graph.concept("hello there").unwrap();
    assert!(boxed.is_boxed());
    assert!(graph.concept("back").is_some());
    assert!(graph.concept("home").is_some());
}

#[test]
fn test_block_of_relationships_takes_part_in_inference() {
    let (mut compiler, said) = buffered_compiler();
    let graph = compiler.compile_to_state(fixtures::BLOCK_PROGRAM).unwrap();
    assert_state(graph, "cat", "plant", Some(false));
    assert_eq!(said.lines(), vec!["right"]);
}

#[test]
fn test_blank_lines_do_not_break_blocks() {
    let (mut compiler, said) = buffered_compiler();
    compiler
        .compile_to_state("say\n  first\n\n  second\n\nafter")
        .unwrap();
    assert_eq!(said.lines(), vec!["first", "second"]);
}

#[test]
fn test_plain_words_become_concepts() {
    let (mut compiler, _) = buffered_compiler();
    let graph = compiler.compile_to_state("red green blue").unwrap();
    assert_eq!(graph.concepts().len(), 3);
    assert!(graph.facts().is_empty());
}

#[test]
fn test_long_chain_is_closed_statement_by_statement() {
    let (mut compiler, _) = buffered_compiler();
    let graph = compiler
        .compile_to_state(&fixtures::sequential_chain(5))
        .unwrap();
    assert_state(graph, "c0", "c2", Some(true));
    assert_state(graph, "c3", "c5", Some(true));
}

#[test]
fn test_reversed_order_flips_the_state() {
    let (mut compiler, _) = buffered_compiler();
    let graph = compiler.compile_to_state("sky isnt blue\nsky is blue").unwrap();
    assert_state(graph, "sky", "blue", Some(true));
}

#[test]
fn test_orphan_indented_line_is_one_boxed_concept() {
    let (mut compiler, _) = buffered_compiler();
    let graph = compiler.compile_to_state("  big red ball").unwrap();

    let boxed = graph.concept("big red ball").unwrap();
    assert!(boxed.is_boxed());
    let words: Vec<&str> = boxed.content().unwrap().iter().map(|t| t.name()).collect();
    assert_eq!(words, vec!["big", "red", "ball"]);
    assert!(graph.facts().is_empty());
}
