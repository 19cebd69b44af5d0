//! Recursive-descent parser producing the program AST.
//!
//! The grammar is the classic S-expression shape: a program is a flat
//! sequence of forms, and a form is either a literal or a parenthesized call
//! whose first element names the callee. A single forward-only cursor
//! (`TokenStream`) is threaded through the recursive `parse_form` calls, one
//! stack frame per nesting level.

use crate::error::{CompileError, CompileResult};
use crate::tokenizer::{Token, TokenKind, describe_token, token_text};

/// Literal payloads recognised by the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
  Number,
  Str,
}

/// Expression tree produced by the parser. The set is closed: code
/// generation matches over exactly these variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
  Literal {
    kind: LiteralKind,
    value: String,
  },
  Call {
    callee: String,
    args: Vec<AstNode>,
  },
}

impl AstNode {
  pub fn literal(kind: LiteralKind, value: impl Into<String>) -> Self {
    Self::Literal {
      kind,
      value: value.into(),
    }
  }

  pub fn call(callee: impl Into<String>, args: Vec<AstNode>) -> Self {
    Self::Call {
      callee: callee.into(),
      args,
    }
  }
}

/// Synthetic root node: top-level forms in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
  pub body: Vec<AstNode>,
}

/// Parse a sequence of top-level forms from the token stream. An empty
/// stream is a valid, empty program.
pub fn parse(tokens: Vec<Token>, source: &str) -> CompileResult<Program> {
  let mut stream = TokenStream::new(tokens, source);
  let mut body = Vec::new();

  while !stream.is_eof() {
    body.push(parse_form(&mut stream)?);
  }

  Ok(Program { body })
}

fn parse_form(stream: &mut TokenStream) -> CompileResult<AstNode> {
  if let Some(kind) = stream.peek_literal() {
    let value = stream.take_text();
    return Ok(AstNode::literal(kind, value));
  }

  if stream.equal("(") {
    return parse_call(stream);
  }

  let (loc, got) = stream.here();
  Err(CompileError::syntax(
    stream.source,
    loc,
    format!("expected a literal or \"(\", but got \"{got}\""),
  ))
}

/// Parse the remainder of a call form, the opening `(` already consumed.
fn parse_call(stream: &mut TokenStream) -> CompileResult<AstNode> {
  let (callee, _) = stream.get_name()?;
  let mut args = Vec::new();

  loop {
    if stream.equal(")") {
      break;
    }
    if stream.is_eof() {
      return Err(CompileError::syntax(
        stream.source,
        stream.source.len(),
        format!("expected \")\" to close the call to \"{callee}\", but reached end of input"),
      ));
    }
    args.push(parse_form(stream)?);
  }

  Ok(AstNode::call(callee, args))
}

/// Lightweight cursor over the token vector.
struct TokenStream<'a> {
  tokens: Vec<Token>,
  source: &'a str,
  pos: usize,
}

impl<'a> TokenStream<'a> {
  /// Take ownership of the token stream; the parser will advance `pos` as it consumes input.
  fn new(tokens: Vec<Token>, source: &'a str) -> Self {
    Self {
      tokens,
      source,
      pos: 0,
    }
  }

  fn peek(&self) -> Option<&Token> {
    self.tokens.get(self.pos)
  }

  /// Literal kind of the current token, if it is one.
  fn peek_literal(&self) -> Option<LiteralKind> {
    match self.peek().map(|token| token.kind) {
      Some(TokenKind::Number) => Some(LiteralKind::Number),
      Some(TokenKind::Str) => Some(LiteralKind::Str),
      _ => None,
    }
  }

  /// Consume the current token and return its source text. Only called once
  /// the caller has established the token's kind.
  fn take_text(&mut self) -> String {
    let text = match self.peek() {
      Some(token) => token_text(token, self.source).to_string(),
      None => String::new(),
    };
    self.pos += 1;
    text
  }

  /// Consume the current token if it is the given parenthesis.
  fn equal(&mut self, paren: &str) -> bool {
    if let Some(token) = self.peek()
      && token.kind == TokenKind::Paren
      && token_text(token, self.source) == paren
    {
      self.pos += 1;
      return true;
    }
    false
  }

  /// Parse the current token as the callee name of a call form. Anything
  /// other than a `Name` token in callee position is rejected.
  fn get_name(&mut self) -> CompileResult<(String, usize)> {
    if let Some(token) = self.peek()
      && token.kind == TokenKind::Name
    {
      let name = token_text(token, self.source).to_string();
      let loc = token.loc;
      self.pos += 1;
      return Ok((name, loc));
    }

    let (loc, got) = self.here();
    Err(CompileError::syntax(
      self.source,
      loc,
      format!("expected a name after \"(\", but got \"{got}\""),
    ))
  }

  /// Location and description of the current token, for diagnostics.
  fn here(&self) -> (usize, String) {
    match self.peek() {
      Some(token) => (token.loc, describe_token(Some(token), self.source)),
      None => (self.source.len(), "EOF".to_string()),
    }
  }

  fn is_eof(&self) -> bool {
    matches!(self.peek().map(|token| token.kind), Some(TokenKind::Eof) | None)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tokenizer::tokenize;

  fn parse_source(source: &str) -> CompileResult<Program> {
    parse(tokenize(source)?, source)
  }

  #[test]
  fn builds_a_nested_tree_in_source_order() {
    let source = r#"(add 3 (sub 4 (len "foo")))"#;
    let program = parse_source(source).expect("parser should succeed");

    let expected = AstNode::call(
      "add",
      vec![
        AstNode::literal(LiteralKind::Number, "3"),
        AstNode::call(
          "sub",
          vec![
            AstNode::literal(LiteralKind::Number, "4"),
            AstNode::call("len", vec![AstNode::literal(LiteralKind::Str, "foo")]),
          ],
        ),
      ],
    );
    assert_eq!(program.body, vec![expected]);
  }

  #[test]
  fn collects_top_level_forms_in_order() {
    let program = parse_source("(a) 1 (b)").unwrap();

    assert_eq!(
      program.body,
      vec![
        AstNode::call("a", vec![]),
        AstNode::literal(LiteralKind::Number, "1"),
        AstNode::call("b", vec![]),
      ]
    );
  }

  #[test]
  fn empty_token_stream_is_an_empty_program() {
    let program = parse_source("").unwrap();
    assert!(program.body.is_empty());
  }

  // Callee position is validated: the first element of a call must be a
  // name, not any token that happens to sit there.
  #[test]
  fn rejects_a_non_name_callee() {
    let err = parse_source("(3 4)").expect_err("should err");
    assert!(err.to_string().contains("expected a name after \"(\""));
  }

  #[test]
  fn rejects_a_stray_closing_paren() {
    let err = parse_source("(a)) ").expect_err("should err");
    assert!(err.to_string().contains("expected a literal or \"(\""));
  }

  #[test]
  fn rejects_an_unclosed_call() {
    let err = parse_source("(add 1 2").expect_err("should err");
    assert!(err.to_string().contains("reached end of input"));
  }
}
