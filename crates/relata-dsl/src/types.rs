use serde::{Deserialize, Serialize};
use std::fmt;

/// A word-token produced by the tokenizer.
///
/// A token is just a name. Block content is carried as tokens whose name is
/// a whole source line, so a token name may contain spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(pub String);

impl Token {
    /// Create a token from anything string-like
    pub fn new(name: impl Into<String>) -> Self {
        Token(name.into())
    }

    /// The token's name
    pub fn name(&self) -> &str {
        &self.0
    }

    /// True when the name holds more than one word
    pub fn contains_space(&self) -> bool {
        self.0.contains(' ')
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token(s)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token(s.to_string())
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build a token sequence from a whitespace-separated string.
///
/// Mostly a convenience for hooks and tests.
pub fn tokens(text: &str) -> Vec<Token> {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .map(Token::from)
        .collect()
}

/// Join token names back into a single space-separated string
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::name)
        .collect::<Vec<_>>()
        .join(" ")
}
