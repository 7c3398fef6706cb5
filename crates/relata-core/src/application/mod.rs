/// Read-only query layer
pub mod explorer;

/// One-hop transitive inference
pub mod inference;

/// Statement-line dispatch and hook continuation
pub mod dispatcher;
