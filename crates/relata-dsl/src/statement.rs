use serde::{Deserialize, Serialize};

use crate::types::{join_tokens, Token};

/// How the tokenizer arrived at a statement-line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    /// An unindented line split into words
    Plain,
    /// An unindented line followed by indented lines
    Header,
    /// The indented lines following a header, one token per line
    Block,
    /// An indented line with no header above it
    Boxed,
}

/// One statement-line handed to the dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Word-tokens of the line, in source order
    pub tokens: Vec<Token>,

    /// For a header: the raw lines of the block it introduces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Vec<Token>>,

    /// Where the line came from
    pub kind: StatementKind,
}

impl Statement {
    /// Create a plain statement from tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            block: None,
            kind: StatementKind::Plain,
        }
    }

    /// Create a statement of the given kind
    pub fn with_kind(tokens: Vec<Token>, kind: StatementKind) -> Self {
        Self {
            tokens,
            block: None,
            kind,
        }
    }

    /// Whether the tokenizer merged raw block content into this line.
    ///
    /// See [`is_block_shaped`].
    pub fn is_block_shaped(&self) -> bool {
        is_block_shaped(&self.tokens)
    }

    /// The line as text
    pub fn text(&self) -> String {
        join_tokens(&self.tokens)
    }
}

/// A line is block-shaped when it is a single multi-word token, or when it
/// has several tokens and every one of them is multi-word.
pub fn is_block_shaped(tokens: &[Token]) -> bool {
    match tokens {
        [] => false,
        [single] => single.contains_space(),
        many => many.iter().all(Token::contains_space),
    }
}

/// Split merged tokens back into individual words
pub fn explode(tokens: &[Token]) -> Vec<Token> {
    tokens
        .iter()
        .flat_map(|token| token.name().split(' '))
        .filter(|word| !word.is_empty())
        .map(Token::from)
        .collect()
}

/// Consecutive `[subject, relator, object]` groups; an incomplete tail is dropped
pub fn triples(tokens: &[Token]) -> std::slice::ChunksExact<'_, Token> {
    tokens.chunks_exact(3)
}
