#![allow(clippy::result_large_err)]
//! ngxparse-core: syntax front end for nginx configuration files.
//!
//! Tokenizes configuration text, parses it into a syntax tree and validates
//! every directive's placement and argument count against a table of known
//! directives, the way nginx's own configuration reader does.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`parse()`] / [`parse_with()`] -- text to validated [`Document`]
//! - [`materialize()`] -- [`Document`] to the plain [`Config`] tree
//! - [`DescriptorTable`] -- directive names, contexts and arities
//! - [`Lexer`] -- the token stream on its own
//! - [`dump`] -- splitting `nginx -T` output into per-file sections
//! - [`ParseError`] -- the single error returned by a failed parse

pub mod ast;
pub mod context;
pub mod directives;
pub mod dump;
pub mod error;
pub mod lexer;
pub mod materialize;
pub mod parser;

// ── Convenience re-exports: key types ────────────────────────────────

pub use ast::Document;
pub use directives::{DescriptorTable, ExtensionError, ExtensionFile};
pub use error::{ErrorKind, LexError, ParseError};
pub use lexer::{Lexer, Token, TokenKind};
pub use materialize::{Config, Directive};
pub use parser::ParseOptions;

// ── Convenience re-exports: entry points ─────────────────────────────

pub use materialize::materialize;
pub use parser::{parse, parse_with};
