//! Shared error reporting used across the compilation pipeline.
//!
//! Diagnostics are kept lightweight – each error carries the quoted source
//! line and a caret marker pointing at the offending byte. Every failure is
//! fatal to the compile call; there is no recovery or partial output.

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Snafu)]
pub enum CompileError {
  /// The tokenizer hit a character it cannot classify, or a scan ran out of
  /// input before reaching its terminator.
  #[snafu(display("{source_line}\n{marker} lexical error: {message}"))]
  Lexical {
    source_line: String,
    marker: String,
    message: String,
  },
  /// The parser hit a token that cannot start or continue a form.
  #[snafu(display("{source_line}\n{marker} syntax error: {message}"))]
  Syntax {
    source_line: String,
    marker: String,
    message: String,
  },
}

impl CompileError {
  /// Lexical error anchored at a specific byte offset in the source.
  pub fn lexical(source: &str, loc: usize, message: impl Into<String>) -> Self {
    let (source_line, marker) = annotate(source, loc);
    Self::Lexical {
      source_line,
      marker,
      message: message.into(),
    }
  }

  /// Syntax error anchored at a specific byte offset in the source.
  pub fn syntax(source: &str, loc: usize, message: impl Into<String>) -> Self {
    let (source_line, marker) = annotate(source, loc);
    Self::Syntax {
      source_line,
      marker,
      message: message.into(),
    }
  }
}

fn annotate(source: &str, loc: usize) -> (String, String) {
  let source_line = format!("'{source}'");
  let safe_loc = loc.min(source.len());
  let char_offset = source[..safe_loc].chars().count() + 1; // account for opening quote
  let marker = format!("{}^", " ".repeat(char_offset));
  (source_line, marker)
}
