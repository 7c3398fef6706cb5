//! Directed pairs of concepts

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered pair of concept names. `(a, b)` and `(b, a)` are different pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair {
    /// First element
    pub subject: String,
    /// Second element
    pub object: String,
}

impl Pair {
    /// Create a pair
    pub fn new(subject: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            object: object.into(),
        }
    }

    /// True when both endpoints name the same concept
    pub fn is_self_loop(&self) -> bool {
        self.subject == self.object
    }

    /// True when `name` is either endpoint
    pub fn touches(&self, name: &str) -> bool {
        self.subject == name || self.object == name
    }

    /// The endpoint opposite `name`, if `name` is an endpoint at all
    pub fn other(&self, name: &str) -> Option<&str> {
        if self.subject == name {
            Some(&self.object)
        } else if self.object == name {
            Some(&self.subject)
        } else {
            None
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.subject, self.object)
    }
}
