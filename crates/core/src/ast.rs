//! Syntax tree produced by the parser.
//!
//! Nodes own their children; source positions are carried per node and the
//! file name lives once on the [`Document`].

// ──────────────────────────────────────────────
// Document
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub filename: String,
    pub root: List,
}

impl Document {
    /// Number of directives in the whole tree, nested ones included.
    pub fn directive_count(&self) -> usize {
        self.root.directive_count()
    }
}

/// An ordered sequence of items: the top level of a file or the inside of a
/// block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct List {
    pub nodes: Vec<Node>,
}

impl List {
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Directive(d) => Some(d),
            _ => None,
        })
    }

    fn directive_count(&self) -> usize {
        self.directives()
            .map(|d| {
                1 + match &d.body {
                    Some(BlockBody::Block(list)) | Some(BlockBody::Freeform(list)) => {
                        list.directive_count()
                    }
                    _ => 0,
                }
            })
            .sum()
    }
}

// ──────────────────────────────────────────────
// Nodes
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directive(Directive),
    Comment(Comment),
    /// A run of two or more newlines, collapsed.
    EmptyLine(EmptyLine),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub offset: usize,
    pub line: u32,
    pub args: Vec<Argument>,
    /// Present when the directive ended with `{ ... }` instead of `;`.
    pub body: Option<BlockBody>,
}

impl Directive {
    /// Nested items of an ordinary or freeform block.
    pub fn block(&self) -> Option<&List> {
        match &self.body {
            Some(BlockBody::Block(list)) | Some(BlockBody::Freeform(list)) => Some(list),
            _ => None,
        }
    }
}

/// A bare word or quoted string, exactly as written (quotes kept).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub text: String,
    pub offset: usize,
    pub quoted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockBody {
    /// Nested directives.
    Block(List),
    /// Data rows; entry names were not checked against the descriptor table.
    Freeform(List),
    /// Foreign code between the braces, not tokenized.
    Opaque { code: String, offset: usize, line: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment text including the leading `#`.
    pub text: String,
    pub offset: usize,
    pub line: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyLine {
    /// Position of the first newline of the run.
    pub offset: usize,
    pub line: u32,
}
