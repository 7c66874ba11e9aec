use serde::{Deserialize, Serialize};

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed token: unterminated quoted string, unbalanced braces.
    Lex,
    /// Token sequence does not match the grammar.
    Syntax,
    /// Directive name absent from the descriptor table.
    UnknownDirective,
    /// Directive used outside all of its legal contexts.
    Context,
    /// Wrong argument count or missing required block.
    Arity,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Lex => "lex",
            ErrorKind::Syntax => "syntax",
            ErrorKind::UnknownDirective => "unknown_directive",
            ErrorKind::Context => "context",
            ErrorKind::Arity => "arity",
        }
    }
}

/// A parse failure. The first error aborts the whole parse; no partial tree
/// is returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{file}:{line}: {message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub file: String,
    pub line: u32,
    /// Byte offset of the offending token in the source text.
    pub offset: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(
        kind: ErrorKind,
        file: &str,
        line: u32,
        offset: usize,
        message: impl Into<String>,
    ) -> Self {
        ParseError {
            kind,
            file: file.to_owned(),
            line,
            offset,
            message: message.into(),
        }
    }

    pub fn lex(file: &str, line: u32, offset: usize, err: LexError) -> Self {
        ParseError::new(ErrorKind::Lex, file, line, offset, err.to_string())
    }

    pub fn syntax(file: &str, line: u32, offset: usize, message: impl Into<String>) -> Self {
        ParseError::new(ErrorKind::Syntax, file, line, offset, message)
    }

    /// Serialize to the JSON shape printed by the CLI. Always includes all fields.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "file":    self.file,
            "kind":    self.kind.as_str(),
            "line":    self.line,
            "message": self.message,
            "offset":  self.offset,
        })
    }
}

/// Lexical failures. Each one ends the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated quoted string")]
    UnterminatedQuote,
    #[error("unmatched closing block")]
    UnmatchedClose,
    #[error("unclosed block")]
    UnclosedBlock,
}
