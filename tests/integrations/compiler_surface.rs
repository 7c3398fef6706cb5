//! The compiler facade: accumulation, reset, export and configuration

use pretty_assertions::assert_eq;
use relata::{Compiler, CompilerConfig, RelataError};
use relata_core::RelationKind;
use relata_integration_tests::utils::{buffered_compiler, buffered_compiler_with};
use relata_test_utils::fixtures;

#[test]
fn test_state_accumulates_across_calls() {
    let (mut compiler, _) = buffered_compiler();
    compiler.compile("a is b").unwrap();
    let output = compiler.compile("b is c").unwrap();
    assert_eq!(output, "a is b\nb is c\na is c");
}

#[test]
fn test_reset_clears_everything() {
    let (mut compiler, _) = buffered_compiler();
    compiler.compile(fixtures::TAXONOMY).unwrap();
    compiler.reset();

    let stats = compiler.explorer().stats();
    assert_eq!((stats.concepts, stats.pairs, stats.facts), (0, 0, 0));
    assert_eq!(compiler.compile("x is y").unwrap(), "x is y");
}

#[test]
fn test_explorer_over_compiled_state() {
    let (mut compiler, _) = buffered_compiler();
    compiler.compile(fixtures::TAXONOMY).unwrap();
    let explorer = compiler.explorer();

    let mut related: Vec<&str> = explorer
        .related_concepts("cat")
        .into_iter()
        .map(|concept| concept.name())
        .collect();
    related.sort();
    assert_eq!(related, vec!["animal", "mammal", "plant"]);

    let state = explorer.block_state();
    assert_eq!(state["cat"]["plant"], false);
    assert_eq!(state["mammal"]["animal"], true);
}

#[test]
fn test_kind_follows_the_verb() {
    let (mut compiler, _) = buffered_compiler();
    let graph = compiler.compile_to_state("cat has fur\ncat is animal").unwrap();
    let kinds: Vec<RelationKind> = graph.facts().iter().map(|fact| fact.kind()).collect();
    assert_eq!(kinds, vec![RelationKind::Property, RelationKind::Identity]);
}

#[test]
fn test_state_json_document() {
    let (mut compiler, _) = buffered_compiler();
    compiler.compile("a is b\nb is c").unwrap();
    let json: serde_json::Value = serde_json::from_str(&compiler.state_json().unwrap()).unwrap();

    assert_eq!(json["stats"]["concepts"], 3);
    assert_eq!(json["stats"]["facts"], 3);
    assert_eq!(json["state"]["a"]["c"], true);
    assert_eq!(json["facts"].as_array().unwrap().len(), 3);
}

#[test]
fn test_config_from_yaml_drives_output() {
    let config = CompilerConfig::from_yaml_str("trailing_newline: true").unwrap();
    let (mut compiler, _) = buffered_compiler_with(config, Vec::new());
    assert_eq!(compiler.compile("a is b").unwrap(), "a is b\n");
}

#[test]
fn test_invalid_yaml_is_a_config_error() {
    assert!(matches!(
        CompilerConfig::from_yaml_str("trailing_newline: [1, 2]"),
        Err(RelataError::ConfigParse(_))
    ));
}

#[test]
fn test_default_compiler_has_every_builtin() {
    let compiler = Compiler::new().unwrap();
    assert_eq!(compiler.hooks().verbs(), vec!["has", "hasnt", "is", "isnt", "say"]);
}
