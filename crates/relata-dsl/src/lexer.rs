use tracing::trace;

use crate::statement::{Statement, StatementKind};
use crate::types::{join_tokens, tokens, Token};

/// A non-blank physical line with its measured indentation
struct SourceLine<'a> {
    indent: usize,
    text: &'a str,
}

impl<'a> SourceLine<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let indent = raw.len() - raw.trim_start().len();
        Some(Self { indent, text })
    }

    /// Indented content becomes one token, re-joined with single spaces
    fn as_raw_token(&self) -> Token {
        Token::from(join_tokens(&tokens(self.text)))
    }
}

/// Convert source text into statement-lines.
///
/// Unindented lines are split into word-tokens. An unindented line whose
/// next line is indented becomes a block header: the header is emitted on its
/// own and the indented lines that follow are collected, unsplit, into one
/// block statement. An indented line without a header is emitted as a
/// single-token boxed statement. Blank lines are dropped before any of this
/// happens, so they neither open nor close a block.
///
/// # Examples
///
/// ```
/// use relata_dsl::{tokenize, StatementKind};
///
/// let lines = tokenize("cat is animal\nsay\n  hello world\n");
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[1].kind, StatementKind::Header);
/// assert_eq!(lines[2].tokens[0].name(), "hello world");
/// ```
pub fn tokenize(text: &str) -> Vec<Statement> {
    let lines: Vec<SourceLine<'_>> = text.split('\n').filter_map(SourceLine::parse).collect();

    let mut statements = Vec::new();
    // index of the open header in `statements`, and the block collected so far
    let mut open_block: Option<(usize, Vec<Token>)> = None;

    for (position, line) in lines.iter().enumerate() {
        if line.indent > 0 {
            match open_block.as_mut() {
                Some((_, buffer)) => buffer.push(line.as_raw_token()),
                None => statements.push(Statement::with_kind(
                    vec![line.as_raw_token()],
                    StatementKind::Boxed,
                )),
            }
            continue;
        }

        if let Some((header, buffer)) = open_block.take() {
            close_block(&mut statements, header, buffer);
        }

        let words = tokens(line.text);
        let opens_block = lines
            .get(position + 1)
            .is_some_and(|next| next.indent > 0);

        if opens_block {
            statements.push(Statement::with_kind(words, StatementKind::Header));
            open_block = Some((statements.len() - 1, Vec::new()));
        } else {
            statements.push(Statement::new(words));
        }
    }

    if let Some((header, buffer)) = open_block.take() {
        close_block(&mut statements, header, buffer);
    }

    trace!(statements = statements.len(), "tokenized source");
    statements
}

fn close_block(statements: &mut Vec<Statement>, header: usize, buffer: Vec<Token>) {
    statements[header].block = Some(buffer.clone());
    statements.push(Statement::with_kind(buffer, StatementKind::Block));
}
