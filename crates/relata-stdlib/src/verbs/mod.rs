//! Built-in reserved words

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use relata_core::RelationKind;

pub mod relation;
pub mod say;

pub use relation::RelationHook;
pub use say::SayHook;

/// The closed set of verbs the standard library provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinVerb {
    /// `a is b`, or `is a b ...` as a guard
    Is,
    /// `a isnt b`, or `isnt a b ...` as a guard
    Isnt,
    /// `a has b`, or `has a b ...` as a guard
    Has,
    /// `a hasnt b`, or `hasnt a b ...` as a guard
    Hasnt,
    /// `say words...`
    Say,
}

/// A word that is not a built-in verb
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown verb: {0}")]
pub struct UnknownVerb(pub String);

impl BuiltinVerb {
    /// Every built-in verb
    pub const ALL: [BuiltinVerb; 5] = [
        BuiltinVerb::Is,
        BuiltinVerb::Isnt,
        BuiltinVerb::Has,
        BuiltinVerb::Hasnt,
        BuiltinVerb::Say,
    ];

    /// The reserved word
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinVerb::Is => "is",
            BuiltinVerb::Isnt => "isnt",
            BuiltinVerb::Has => "has",
            BuiltinVerb::Hasnt => "hasnt",
            BuiltinVerb::Say => "say",
        }
    }

    /// Truth value a relationship verb asserts or tests for
    pub fn polarity(&self) -> Option<bool> {
        match self {
            BuiltinVerb::Is | BuiltinVerb::Has => Some(true),
            BuiltinVerb::Isnt | BuiltinVerb::Hasnt => Some(false),
            BuiltinVerb::Say => None,
        }
    }

    /// Kind tag recorded on facts a relationship verb asserts
    pub fn relation_kind(&self) -> Option<RelationKind> {
        match self {
            BuiltinVerb::Is | BuiltinVerb::Isnt => Some(RelationKind::Identity),
            BuiltinVerb::Has | BuiltinVerb::Hasnt => Some(RelationKind::Property),
            BuiltinVerb::Say => None,
        }
    }
}

impl FromStr for BuiltinVerb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuiltinVerb::ALL
            .into_iter()
            .find(|verb| verb.as_str() == s)
            .ok_or_else(|| UnknownVerb(s.to_string()))
    }
}

impl fmt::Display for BuiltinVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
