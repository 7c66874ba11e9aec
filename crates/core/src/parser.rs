//! Recursive-descent parser with directive validation.
//!
//! Tokens are pulled from the [`Lexer`] on demand. Validation is driven by a
//! [`DescriptorTable`] and a [`ContextStack`] owned by the parse session; the
//! first failure aborts the parse and no partial tree is returned.

use crate::ast::{Argument, BlockBody, Comment, Directive, Document, EmptyLine, List, Node};
use crate::context::{ContextStack, Level};
use crate::directives::{Arity, Body, DescriptorTable, DirectiveSpec};
use crate::error::{ErrorKind, ParseError};
use crate::lexer::{Lexer, Token, TokenKind};

/// Tokens that may be pushed back onto the stream.
const LOOKAHEAD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Check directive names, placement and arity against the table.
    pub validate: bool,
    /// Enforce every arity shape instead of only "exactly one argument" and
    /// "requires a block".
    pub strict_arity: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            validate: true,
            strict_arity: false,
        }
    }
}

/// Parse and validate `src` against the builtin directive table.
pub fn parse(filename: &str, src: &str) -> Result<Document, ParseError> {
    parse_with(filename, src, DescriptorTable::builtin(), ParseOptions::default())
}

pub fn parse_with(
    filename: &str,
    src: &str,
    table: &DescriptorTable,
    options: ParseOptions,
) -> Result<Document, ParseError> {
    tracing::debug!(file = filename, bytes = src.len(), ?options, "parse started");
    let mut parser = Parser::new(filename, src, table, options);
    let result = parser.parse_document();
    // The lexer may still hold unread input after an early failure.
    parser.lexer.cancel();

    match result {
        Ok(root) => {
            let doc = Document {
                filename: filename.to_owned(),
                root,
            };
            tracing::debug!(
                file = filename,
                directives = doc.directive_count(),
                "parse finished"
            );
            Ok(doc)
        }
        Err(e) => {
            tracing::debug!(
                file = filename,
                kind = e.kind.as_str(),
                line = e.line,
                offset = e.offset,
                "parse failed: {}",
                e.message
            );
            Err(e)
        }
    }
}

// ──────────────────────────────────────────────
// Parser
// ──────────────────────────────────────────────

/// What kind of list is being read and therefore what ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    TopLevel,
    Block,
    /// Data rows: names are not looked up.
    Freeform,
}

struct Parser<'a, 't> {
    lexer: Lexer<'a>,
    pending: Vec<Token<'a>>,
    src_len: usize,
    last_line: u32,
    table: &'t DescriptorTable,
    options: ParseOptions,
    stack: ContextStack,
    filename: String,
}

impl<'a, 't> Parser<'a, 't> {
    fn new(filename: &str, src: &'a str, table: &'t DescriptorTable, options: ParseOptions) -> Self {
        Parser {
            lexer: Lexer::new(src),
            pending: Vec::with_capacity(LOOKAHEAD),
            src_len: src.len(),
            last_line: 1,
            table,
            options,
            stack: ContextStack::new(),
            filename: filename.to_owned(),
        }
    }

    // -- Token stream -------------------------------------------

    fn next(&mut self) -> Result<Token<'a>, ParseError> {
        let tok = match self.pending.pop() {
            Some(t) => t,
            None => self.lexer.next().unwrap_or(Token {
                kind: TokenKind::Eof,
                text: "",
                offset: self.src_len,
                line: self.last_line,
            }),
        };
        self.last_line = tok.line;
        if let TokenKind::Error(e) = tok.kind {
            return Err(ParseError::lex(&self.filename, tok.line, tok.offset, e));
        }
        Ok(tok)
    }

    fn backup(&mut self, tok: Token<'a>) {
        assert!(
            self.pending.len() < LOOKAHEAD,
            "parser lookahead exceeded {} tokens",
            LOOKAHEAD
        );
        self.pending.push(tok);
    }

    fn peek(&mut self) -> Result<Token<'a>, ParseError> {
        let tok = self.next()?;
        self.backup(tok);
        Ok(tok)
    }

    fn err(&self, kind: ErrorKind, at: &Token<'_>, msg: impl Into<String>) -> ParseError {
        ParseError::new(kind, &self.filename, at.line, at.offset, msg)
    }

    fn unexpected(&self, tok: &Token<'_>) -> ParseError {
        ParseError::syntax(
            &self.filename,
            tok.line,
            tok.offset,
            format!("unexpected token: {}", tok),
        )
    }

    // -- Lists --------------------------------------------------

    fn parse_document(&mut self) -> Result<List, ParseError> {
        self.stack.push(Level::Root);
        let root = self.parse_list(Scope::TopLevel)?;
        self.stack.pop(Level::Root);
        Ok(root)
    }

    /// Read items until end of input (top level) or a consumed `}` (blocks).
    fn parse_list(&mut self, scope: Scope) -> Result<List, ParseError> {
        let mut nodes = Vec::new();
        loop {
            let tok = self.next()?;
            match tok.kind {
                TokenKind::Eof if scope == Scope::TopLevel => break,
                TokenKind::CloseBlock if scope != Scope::TopLevel => break,
                TokenKind::Newline => {
                    let mut run = 1;
                    while self.peek()?.kind == TokenKind::Newline {
                        self.next()?;
                        run += 1;
                    }
                    if run >= 2 {
                        nodes.push(Node::EmptyLine(EmptyLine {
                            offset: tok.offset,
                            line: tok.line,
                        }));
                    }
                }
                TokenKind::Comment => nodes.push(Node::Comment(Comment {
                    text: tok.text.to_owned(),
                    offset: tok.offset,
                    line: tok.line,
                })),
                TokenKind::Word => nodes.push(Node::Directive(self.parse_directive(tok, scope)?)),
                TokenKind::Quoted if scope != Scope::TopLevel => {
                    nodes.push(Node::Directive(self.parse_directive(tok, scope)?))
                }
                _ => return Err(self.unexpected(&tok)),
            }
        }
        Ok(List { nodes })
    }

    // -- Directives ---------------------------------------------

    fn parse_directive(&mut self, name_tok: Token<'a>, scope: Scope) -> Result<Directive, ParseError> {
        let name = name_tok.text;
        let check = self.options.validate && scope != Scope::Freeform;
        // Placement is checked before the arguments and body are read.
        let spec = if check {
            Some(self.lookup(&name_tok)?)
        } else {
            None
        };

        let mut args = Vec::new();
        let body = loop {
            let tok = self.next()?;
            match tok.kind {
                TokenKind::Word | TokenKind::Quoted => args.push(Argument {
                    text: tok.text.to_owned(),
                    offset: tok.offset,
                    quoted: tok.kind == TokenKind::Quoted,
                }),
                TokenKind::Newline => {}
                TokenKind::Terminator => break None,
                TokenKind::OpenBlock => break Some(self.parse_body(name, scope)?),
                _ => {
                    return Err(ParseError::syntax(
                        &self.filename,
                        tok.line,
                        tok.offset,
                        format!("unterminated directive `{}`: unexpected {}", name, tok),
                    ))
                }
            }
        };

        if let Some(spec) = spec {
            self.check_arity(&name_tok, spec, &args, body.is_some())?;
        }

        Ok(Directive {
            name: name.to_owned(),
            offset: name_tok.offset,
            line: name_tok.line,
            args,
            body,
        })
    }

    /// Look the name up and check it may appear in the current context.
    fn lookup(&self, name_tok: &Token<'_>) -> Result<&'t DirectiveSpec, ParseError> {
        let table = self.table;
        let name = name_tok.text;
        let Some(spec) = table.get(name) else {
            return Err(self.err(
                ErrorKind::UnknownDirective,
                name_tok,
                format!("invalid directive: `{}`", name),
            ));
        };
        let ctx = self.stack.current();
        if !spec.descriptors.iter().any(|d| d.contexts.intersects(ctx)) {
            return Err(self.err(
                ErrorKind::Context,
                name_tok,
                format!("wrong context for directive `{}`", name),
            ));
        }
        Ok(spec)
    }

    /// Parse what follows a consumed `{`, up to and including its `}`.
    fn parse_body(&mut self, name: &str, scope: Scope) -> Result<BlockBody, ParseError> {
        let kind = if scope == Scope::Freeform {
            Body::Freeform
        } else {
            self.table.body(name)
        };
        match kind {
            Body::Opaque => self.parse_opaque(),
            Body::Freeform => Ok(BlockBody::Freeform(self.parse_list(Scope::Freeform)?)),
            Body::Directives => {
                let level = Level::from_name(name);
                if let Some(level) = level {
                    self.stack.push(level);
                }
                let list = self.parse_list(Scope::Block)?;
                if let Some(level) = level {
                    self.stack.pop(level);
                }
                Ok(BlockBody::Block(list))
            }
        }
    }

    fn parse_opaque(&mut self) -> Result<BlockBody, ParseError> {
        assert!(
            self.pending.is_empty(),
            "opaque body scanned with {} tokens pushed back",
            self.pending.len()
        );
        let span = self.lexer.balanced_span();
        match span.kind {
            TokenKind::Opaque => {}
            TokenKind::Error(e) => {
                return Err(ParseError::lex(&self.filename, span.line, span.offset, e))
            }
            _ => return Err(self.unexpected(&span)),
        }
        let close = self.next()?;
        if close.kind != TokenKind::CloseBlock {
            return Err(self.unexpected(&close));
        }
        Ok(BlockBody::Opaque {
            code: span.text.to_owned(),
            offset: span.offset,
            line: span.line,
        })
    }

    // -- Arity --------------------------------------------------

    fn check_arity(
        &self,
        name_tok: &Token<'_>,
        spec: &DirectiveSpec,
        args: &[Argument],
        has_block: bool,
    ) -> Result<(), ParseError> {
        let name = name_tok.text;
        let ctx = self.stack.current();
        let applicable: Vec<_> = spec
            .descriptors
            .iter()
            .filter(|d| d.contexts.intersects(ctx))
            .collect();
        let wrong_count = || {
            self.err(
                ErrorKind::Arity,
                name_tok,
                format!("invalid number of arguments for directive `{}`", name),
            )
        };
        let needs_block = || {
            self.err(
                ErrorKind::Arity,
                name_tok,
                format!("directive `{}` expects a block", name),
            )
        };

        if !self.options.strict_arity {
            let count_fits = applicable.iter().any(|d| d.arity.accepts(args.len()));
            if args.len() > 1
                && !count_fits
                && applicable.iter().any(|d| d.arity == Arity::Take(1))
            {
                return Err(wrong_count());
            }
            if !has_block && applicable.iter().any(|d| d.block) {
                return Err(needs_block());
            }
            return Ok(());
        }

        let counted: Vec<_> = applicable
            .into_iter()
            .filter(|d| d.arity.accepts(args.len()))
            .collect();
        if counted.is_empty() {
            return Err(wrong_count());
        }
        let shaped: Vec<_> = counted.into_iter().filter(|d| d.block == has_block).collect();
        if shaped.is_empty() {
            if has_block {
                return Err(self.err(
                    ErrorKind::Arity,
                    name_tok,
                    format!("directive `{}` does not take a block", name),
                ));
            }
            return Err(needs_block());
        }
        let flag_ok = args.first().is_some_and(|a| is_flag_value(&a.text));
        if !shaped.iter().any(|d| d.arity != Arity::Flag || flag_ok) {
            let value = args.first().map_or("", |a| a.text.as_str());
            return Err(self.err(
                ErrorKind::Arity,
                name_tok,
                format!(
                    "invalid value '{}' for directive `{}`, it must be 'on' or 'off'",
                    value, name
                ),
            ));
        }
        Ok(())
    }
}

fn is_flag_value(s: &str) -> bool {
    s.eq_ignore_ascii_case("on") || s.eq_ignore_ascii_case("off")
}
