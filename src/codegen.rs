//! Code generation: render the AST as conventional function-call syntax.
//!
//! The emitter walks the tree bottom-up, producing one line per top-level
//! form terminated by a semicolon. String literals are re-quoted with their
//! embedded quote and control characters escaped; numbers pass through
//! verbatim.

use crate::parser::{AstNode, LiteralKind, Program};

/// Render a whole program, newline-joined. An empty program renders as the
/// empty string.
pub fn generate(program: &Program) -> String {
  let lines: Vec<String> = program
    .body
    .iter()
    .map(|node| format!("{};", emit(node)))
    .collect();
  lines.join("\n")
}

/// Render a single node recursively.
fn emit(node: &AstNode) -> String {
  match node {
    AstNode::Literal {
      kind: LiteralKind::Number,
      value,
    } => value.clone(),
    AstNode::Literal {
      kind: LiteralKind::Str,
      value,
    } => format!("{value:?}"),
    AstNode::Call { callee, args } => {
      let rendered: Vec<String> = args.iter().map(emit).collect();
      format!("{callee}({})", rendered.join(", "))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_an_empty_argument_list() {
    let program = Program {
      body: vec![AstNode::call("f", vec![])],
    };
    assert_eq!(generate(&program), "f();");
  }

  #[test]
  fn escapes_string_literals() {
    let program = Program {
      body: vec![AstNode::call(
        "print",
        vec![AstNode::literal(LiteralKind::Str, "a\nb \"quoted\"")],
      )],
    };
    assert_eq!(generate(&program), r#"print("a\nb \"quoted\"");"#);
  }

  #[test]
  fn empty_program_renders_as_empty_string() {
    assert_eq!(generate(&Program::default()), "");
  }
}
