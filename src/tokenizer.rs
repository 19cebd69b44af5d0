//! Lexical analysis: turns the raw source string into a vector of tokens.
//!
//! The tokenizer is intentionally tiny – it classifies the character under a
//! single cursor and consumes a maximal run: parentheses, digit runs, letter
//! runs, quoted strings, and whitespace. Anything else is a lexical error.

use crate::error::{CompileError, CompileResult};

/// Kinds of tokens recognised by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  /// A single `(` or `)`.
  Paren,
  /// A run of ASCII letters.
  Name,
  /// A run of ASCII digits, kept as text and never numerically parsed.
  Number,
  /// The interior of a double-quoted literal, quotes excluded.
  Str,
  Eof,
}

/// Thin wrapper for lexical information needed by later stages. The token
/// text is recovered by slicing the source with `loc` and `len`.
#[derive(Debug, Clone)]
pub struct Token {
  pub kind: TokenKind,
  pub loc: usize,
  pub len: usize,
}

impl Token {
  /// Convenience constructor to keep the `tokenize` loop readable.
  pub fn new(kind: TokenKind, loc: usize, len: usize) -> Self {
    Self { kind, loc, len }
  }
}

/// Lex the input into a flat vector of tokens terminated by an `Eof` marker.
pub fn tokenize(input: &str) -> CompileResult<Vec<Token>> {
  let mut tokens = Vec::new();
  let bytes = input.as_bytes();
  let mut i = 0;

  while i < bytes.len() {
    let c = bytes[i];

    // Exactly space, tab and newline separate tokens; every other control
    // character falls through to the unknown-character error below.
    if matches!(c, b' ' | b'\t' | b'\n') {
      i += 1;
      continue;
    }

    if c == b'(' || c == b')' {
      tokens.push(Token::new(TokenKind::Paren, i, 1));
      i += 1;
      continue;
    }

    if c.is_ascii_digit() {
      let start = i;
      i += 1;
      while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
      }
      tokens.push(Token::new(TokenKind::Number, start, i - start));
      continue;
    }

    if c == b'"' {
      let start = i + 1;
      let mut end = start;
      while end < bytes.len() && bytes[end] != b'"' {
        end += 1;
      }
      if end == bytes.len() {
        return Err(CompileError::lexical(input, i, "unterminated string literal"));
      }
      // `loc`/`len` cover the interior only; the quotes are consumed but not
      // stored, and no escape processing happens.
      tokens.push(Token::new(TokenKind::Str, start, end - start));
      i = end + 1;
      continue;
    }

    // The full ASCII alphabet is accepted here, `z` and `Z` included.
    if c.is_ascii_alphabetic() {
      let start = i;
      i += 1;
      while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
        i += 1;
      }
      tokens.push(Token::new(TokenKind::Name, start, i - start));
      continue;
    }

    let invalid_char = input[i..].chars().next().unwrap_or('\0');
    return Err(CompileError::lexical(
      input,
      i,
      format!("unknown character '{}'", invalid_char.escape_default()),
    ));
  }

  tokens.push(Token::new(TokenKind::Eof, input.len(), 0));
  Ok(tokens)
}

/// Return the slice from the source that produced this token.
pub fn token_text<'a>(token: &Token, source: &'a str) -> &'a str {
  let end = token.loc + token.len;
  &source[token.loc..end]
}

/// Human-friendly description used in diagnostics.
pub fn describe_token(token: Option<&Token>, source: &str) -> String {
  match token {
    Some(t) => match t.kind {
      TokenKind::Eof => "EOF".to_string(),
      _ => token_text(t, source).to_string(),
    },
    None => "EOF".to_string(),
  }
}
