//! Assertions over graph state

use relata_core::ConceptGraph;

/// The serialized chain, one fact per entry
pub fn fact_lines(graph: &ConceptGraph) -> Vec<String> {
    graph.chain().lines().collect()
}

/// Assert the current state of `subject -> object`
pub fn assert_state(graph: &ConceptGraph, subject: &str, object: &str, expected: Option<bool>) {
    let actual = graph.current_state(subject, object);
    assert_eq!(
        actual, expected,
        "state of ({}, {}) was {:?}, expected {:?}\nchain:\n{}",
        subject,
        object,
        actual,
        expected,
        graph.serialize()
    );
}

/// Assert the chain contains `line`, e.g. `"a is c"`
pub fn assert_fact(graph: &ConceptGraph, line: &str) {
    let lines = fact_lines(graph);
    assert!(
        lines.iter().any(|fact| fact == line),
        "expected fact '{}' in chain:\n{}",
        line,
        lines.join("\n")
    );
}

/// Assert the chain does not contain `line`
pub fn assert_no_fact(graph: &ConceptGraph, line: &str) {
    let lines = fact_lines(graph);
    assert!(
        !lines.iter().any(|fact| fact == line),
        "unexpected fact '{}' in chain:\n{}",
        line,
        lines.join("\n")
    );
}
