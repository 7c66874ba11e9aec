//! Pull-based tokenizer for nginx configuration text.
//!
//! The lexer hands out one token at a time through [`Iterator`]. Nothing is
//! buffered beyond the token being returned, and once the end-of-input token
//! or an error token has been produced the iterator is exhausted.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::LexError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare word: a directive name or an unquoted argument.
    Word,
    /// Single- or double-quoted string, delimiters included in the text.
    Quoted,
    /// `#` comment up to (not including) the end of the line.
    Comment,
    /// `;`
    Terminator,
    /// `{`
    OpenBlock,
    /// `}`
    CloseBlock,
    Newline,
    /// Run of spaces, tabs or carriage returns. Only produced in lossless mode.
    Whitespace,
    /// Uninterpreted interior of an opaque block, see [`Lexer::balanced_span`].
    Opaque,
    Eof,
    Error(LexError),
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::Quoted => "quoted",
            TokenKind::Comment => "comment",
            TokenKind::Terminator => "terminator",
            TokenKind::OpenBlock => "open_block",
            TokenKind::CloseBlock => "close_block",
            TokenKind::Newline => "newline",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Opaque => "opaque",
            TokenKind::Eof => "eof",
            TokenKind::Error(_) => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The exact source span of the token.
    pub text: &'a str,
    /// Byte offset of the first byte of `text`.
    pub offset: usize,
    /// Line of the first byte of `text`, starting at 1.
    pub line: u32,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Word => write!(f, "word '{}'", self.text),
            TokenKind::Quoted => write!(f, "string {}", self.text),
            TokenKind::Comment => f.write_str("comment"),
            TokenKind::Terminator => f.write_str("';'"),
            TokenKind::OpenBlock => f.write_str("'{'"),
            TokenKind::CloseBlock => f.write_str("'}'"),
            TokenKind::Newline => f.write_str("newline"),
            TokenKind::Whitespace => f.write_str("whitespace"),
            TokenKind::Opaque => f.write_str("opaque block"),
            TokenKind::Eof => f.write_str("end of input"),
            TokenKind::Error(e) => write!(f, "{}", e),
        }
    }
}

pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: u32,
    /// Nesting depth of `{` seen so far.
    depth: usize,
    keep_whitespace: bool,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Lexer {
            src,
            pos: 0,
            line: 1,
            depth: 0,
            keep_whitespace: false,
            done: false,
        }
    }

    /// A lexer that also yields [`TokenKind::Whitespace`] tokens, so that the
    /// concatenated token texts reproduce the input exactly.
    pub fn lossless(src: &'a str) -> Self {
        Lexer {
            keep_whitespace: true,
            ..Lexer::new(src)
        }
    }

    /// Stop producing tokens. Subsequent calls to `next` return `None`.
    pub fn cancel(&mut self) {
        self.done = true;
    }

    fn peek_char(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn token(&self, kind: TokenKind, start: usize, line: u32) -> Token<'a> {
        Token {
            kind,
            text: &self.src[start..self.pos],
            offset: start,
            line,
        }
    }

    fn fail(&mut self, err: LexError, start: usize, line: u32) -> Token<'a> {
        self.done = true;
        self.token(TokenKind::Error(err), start, line)
    }

    fn next_token(&mut self) -> Option<Token<'a>> {
        if self.done {
            return None;
        }
        loop {
            let start = self.pos;
            let line = self.line;
            let Some(c) = self.bump() else {
                if self.depth > 0 {
                    return Some(self.fail(LexError::UnclosedBlock, start, line));
                }
                self.done = true;
                return Some(self.token(TokenKind::Eof, start, line));
            };
            let tok = match c {
                ' ' | '\t' | '\r' => {
                    while matches!(self.peek_char(), Some(' ' | '\t' | '\r')) {
                        self.bump();
                    }
                    if !self.keep_whitespace {
                        continue;
                    }
                    self.token(TokenKind::Whitespace, start, line)
                }
                '\n' => self.token(TokenKind::Newline, start, line),
                ';' => self.token(TokenKind::Terminator, start, line),
                '{' => {
                    self.depth += 1;
                    self.token(TokenKind::OpenBlock, start, line)
                }
                '}' => {
                    if self.depth == 0 {
                        return Some(self.fail(LexError::UnmatchedClose, start, line));
                    }
                    self.depth -= 1;
                    self.token(TokenKind::CloseBlock, start, line)
                }
                '#' => {
                    while !matches!(self.peek_char(), None | Some('\n')) {
                        self.bump();
                    }
                    self.token(TokenKind::Comment, start, line)
                }
                '"' | '\'' => return Some(self.lex_quoted(c, start, line)),
                _ => {
                    let mut prev = c;
                    while let Some(n) = self.peek_char() {
                        if n == '{' && prev == '$' {
                            self.lex_braced_variable();
                            prev = '}';
                            continue;
                        }
                        if is_word_end(n) {
                            break;
                        }
                        self.bump();
                        prev = n;
                    }
                    self.token(TokenKind::Word, start, line)
                }
            };
            return Some(tok);
        }
    }

    /// Consume a `{name}` following `$` as part of the current word. The
    /// braces do not open a block. A name cut short by a word end keeps what
    /// was read so far.
    fn lex_braced_variable(&mut self) {
        self.bump();
        while let Some(n) = self.peek_char() {
            if n == '}' {
                self.bump();
                return;
            }
            if is_word_end(n) {
                return;
            }
            self.bump();
        }
    }

    fn lex_quoted(&mut self, quote: char, start: usize, line: u32) -> Token<'a> {
        loop {
            match self.bump() {
                None | Some('\n') => return self.fail(LexError::UnterminatedQuote, start, line),
                Some('\\') => {
                    if matches!(self.bump(), None | Some('\n')) {
                        return self.fail(LexError::UnterminatedQuote, start, line);
                    }
                }
                Some(c) if c == quote => return self.token(TokenKind::Quoted, start, line),
                Some(_) => {}
            }
        }
    }

    /// Consume the interior of a block whose `{` has just been returned,
    /// counting nested braces without interpreting anything else.
    ///
    /// Returns an [`TokenKind::Opaque`] token covering everything up to the
    /// matching `}`; that brace is left for the next call to `next`, which
    /// yields it as an ordinary [`TokenKind::CloseBlock`].
    pub fn balanced_span(&mut self) -> Token<'a> {
        let start = self.pos;
        let line = self.line;
        if self.done {
            return self.token(TokenKind::Eof, start, line);
        }
        let mut open = 1usize;
        while let Some(c) = self.peek_char() {
            match c {
                '{' => open += 1,
                '}' => {
                    open -= 1;
                    if open == 0 {
                        return self.token(TokenKind::Opaque, start, line);
                    }
                }
                _ => {}
            }
            self.bump();
        }
        self.fail(LexError::UnclosedBlock, start, line)
    }
}

fn is_word_end(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | ';' | '{' | '"' | '\'')
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.next_token()
    }
}

impl FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).map(|t| t.kind).collect()
    }

    fn texts(src: &str) -> Vec<&str> {
        Lexer::new(src).map(|t| t.text).collect()
    }

    #[test]
    fn empty_input_yields_only_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn quoted_strings_keep_delimiters() {
        assert_eq!(texts(r#""tis a string""#), vec![r#""tis a string""#, ""]);
        assert_eq!(texts(r"'it\'s a me'"), vec![r"'it\'s a me'", ""]);
    }

    #[test]
    fn simple_directive() {
        use TokenKind::*;
        assert_eq!(
            kinds("listen 80;\n"),
            vec![Word, Word, Terminator, Newline, Eof]
        );
        assert_eq!(texts("listen  80;"), vec!["listen", "80", ";", ""]);
    }

    #[test]
    fn blocks_and_comments() {
        use TokenKind::*;
        assert_eq!(
            kinds("http { # main\n}"),
            vec![Word, OpenBlock, Comment, Newline, CloseBlock, Eof]
        );
        let comment = Lexer::new("# hello world\n").next().unwrap();
        assert_eq!(comment.text, "# hello world");
    }

    #[test]
    fn variables_are_plain_word_characters() {
        assert_eq!(
            texts("set $a ${host}x;"),
            vec!["set", "$a", "${host}x", ";", ""]
        );
    }

    #[test]
    fn braced_variables_do_not_open_blocks() {
        use TokenKind::*;
        assert_eq!(
            texts("return 301 https://${host}$request_uri;"),
            vec!["return", "301", "https://${host}$request_uri", ";", ""]
        );
        assert_eq!(
            kinds("if ($a) { set $b ${a}; }"),
            vec![Word, Word, OpenBlock, Word, Word, Word, Terminator, CloseBlock, Eof]
        );
        assert_eq!(texts("a ${b;"), vec!["a", "${b", ";", ""]);
        assert_eq!(
            kinds("a x{ }"),
            vec![Word, Word, OpenBlock, CloseBlock, Eof]
        );
    }

    #[test]
    fn quote_ends_a_word() {
        assert_eq!(texts(r#"a"b""#), vec!["a", r#""b""#, ""]);
    }

    #[test]
    fn offsets_and_lines() {
        let toks: Vec<_> = Lexer::new("a;\n  b {\n}").collect();
        let b = toks.iter().find(|t| t.text == "b").unwrap();
        assert_eq!(b.offset, 5);
        assert_eq!(b.line, 2);
        let close = toks.iter().find(|t| t.kind == TokenKind::CloseBlock).unwrap();
        assert_eq!(close.line, 3);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        let toks: Vec<_> = Lexer::new("\"unterminated").collect();
        assert_eq!(toks.len(), 1);
        assert_eq!(
            toks[0].kind,
            TokenKind::Error(LexError::UnterminatedQuote)
        );
        assert_eq!(toks[0].to_string(), "unterminated quoted string");
    }

    #[test]
    fn newline_inside_quote_is_an_error() {
        let last = Lexer::new("a \"b\nc\";").last().unwrap();
        assert_eq!(last.kind, TokenKind::Error(LexError::UnterminatedQuote));
        let last = Lexer::new("a \"b\\\nc\";").last().unwrap();
        assert_eq!(last.kind, TokenKind::Error(LexError::UnterminatedQuote));
    }

    #[test]
    fn unbalanced_braces() {
        let last = Lexer::new("a { b; } }").last().unwrap();
        assert_eq!(last.kind, TokenKind::Error(LexError::UnmatchedClose));
        let last = Lexer::new("a { b;").last().unwrap();
        assert_eq!(last.kind, TokenKind::Error(LexError::UnclosedBlock));
    }

    #[test]
    fn stops_after_error() {
        let mut lx = Lexer::new("} more tokens here;");
        assert!(matches!(lx.next().unwrap().kind, TokenKind::Error(_)));
        assert!(lx.next().is_none());
        assert!(lx.next().is_none());
    }

    #[test]
    fn cancel_ends_the_stream() {
        let mut lx = Lexer::new("a b c d;");
        lx.next();
        lx.cancel();
        assert!(lx.next().is_none());
    }

    #[test]
    fn lossless_mode_reproduces_input() {
        let src = "user  nginx;\r\nhttp {\n\t# c\n  server_name \"a b\" 'c';\n\n  set $u ${scheme}://$host;\n}\n";
        let rebuilt: String = Lexer::lossless(src).map(|t| t.text).collect();
        assert_eq!(rebuilt, src);
    }

    #[test]
    fn balanced_span_counts_braces_only() {
        let src = "content_by_lua_block {\n  -- it's { fine\n  ngx.say(\"}\")\n}\n";
        let mut lx = Lexer::new(src);
        assert_eq!(lx.next().unwrap().kind, TokenKind::Word);
        assert_eq!(lx.next().unwrap().kind, TokenKind::OpenBlock);
        let body = lx.balanced_span();
        assert_eq!(body.kind, TokenKind::Opaque);
        assert_eq!(body.text, "\n  -- it's { fine\n  ngx.say(\"}\")\n");
        assert_eq!(body.line, 1);
        let close = lx.next().unwrap();
        assert_eq!(close.kind, TokenKind::CloseBlock);
        assert_eq!(close.line, 4);
        assert_eq!(lx.next().unwrap().kind, TokenKind::Newline);
        assert_eq!(lx.next().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn balanced_span_reports_unclosed_block() {
        let mut lx = Lexer::new("x { a { b }");
        lx.next();
        lx.next();
        let t = lx.balanced_span();
        assert_eq!(t.kind, TokenKind::Error(LexError::UnclosedBlock));
        assert!(lx.next().is_none());
    }
}
