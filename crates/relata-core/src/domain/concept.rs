//! Concepts: the named atoms of the graph

use relata_dsl::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named atom. Identity is the name; nothing else is compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Concept {
    /// A plain named atom
    Atom {
        /// The concept's name
        name: String,
    },
    /// A concept materialised from block content, carrying that content
    Boxed {
        /// The full joined text of the content
        name: String,
        /// The words the concept was built from, in order
        content: Vec<Token>,
    },
}

impl Concept {
    /// Create a plain atom
    pub fn atom(name: impl Into<String>) -> Self {
        Concept::Atom { name: name.into() }
    }

    /// Create a boxed concept
    pub fn boxed(name: impl Into<String>, content: Vec<Token>) -> Self {
        Concept::Boxed {
            name: name.into(),
            content,
        }
    }

    /// The concept's name
    pub fn name(&self) -> &str {
        match self {
            Concept::Atom { name } | Concept::Boxed { name, .. } => name,
        }
    }

    /// Nested content, for boxed concepts only
    pub fn content(&self) -> Option<&[Token]> {
        match self {
            Concept::Atom { .. } => None,
            Concept::Boxed { content, .. } => Some(content),
        }
    }

    /// Whether this concept was built from block content
    pub fn is_boxed(&self) -> bool {
        matches!(self, Concept::Boxed { .. })
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
