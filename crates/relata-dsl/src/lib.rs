//! # Relata DSL
//!
//! Relata programs are lines of text such as `cat is animal` or
//! `cat isnt dog`. This crate turns that text into statement-lines for the
//! runtime in `relata-core`: it splits words, detects indentation-delimited
//! blocks, and provides the helpers the dispatcher uses to recognise and
//! unpack block content.
//!
//! ## Example
//!
//! ```
//! use relata_dsl::{tokenize, StatementKind};
//!
//! let source = "cat is animal\nfacts\n  dog is animal\n  animal isnt plant\n";
//! let lines = tokenize(source);
//!
//! assert_eq!(lines.len(), 3);
//! assert_eq!(lines[0].text(), "cat is animal");
//! assert_eq!(lines[1].kind, StatementKind::Header);
//! assert!(lines[2].is_block_shaped());
//! ```

mod lexer;
mod statement;
mod types;

pub use lexer::tokenize;
pub use statement::{explode, is_block_shaped, triples, Statement, StatementKind};
pub use types::{join_tokens, tokens, Token};

/// Returns a version string for the Relata DSL crate
///
/// # Examples
///
/// ```
/// use relata_dsl::version;
///
/// assert!(version().starts_with("0."));
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
