//! Directive descriptor table: which directives exist, where they may
//! appear and how many arguments they take.
//!
//! The builtin table is the generated [`baseline`] overlaid with the
//! hand-maintained [`extensions`]. It is built once and never mutated; a
//! caller that needs more directives clones it and adds to the copy with
//! [`DescriptorTable::with_extensions`].

mod baseline;
mod custom;
mod extensions;

use std::collections::HashMap;
use std::fmt;
use std::ops::BitOr;
use std::sync::OnceLock;

pub use custom::{ExtensionError, ExtensionFile, ExtensionSpec};

// ──────────────────────────────────────────────
// Context flags
// ──────────────────────────────────────────────

/// A set of configuration contexts, one bit per context.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Contexts(u32);

impl Contexts {
    pub const NONE: Contexts = Contexts(0);
    pub const MAIN: Contexts = Contexts(1 << 0);
    pub const EVENT: Contexts = Contexts(1 << 1);
    pub const MAIL_MAIN: Contexts = Contexts(1 << 2);
    pub const MAIL_SRV: Contexts = Contexts(1 << 3);
    pub const STREAM_MAIN: Contexts = Contexts(1 << 4);
    pub const STREAM_SRV: Contexts = Contexts(1 << 5);
    pub const STREAM_UPS: Contexts = Contexts(1 << 6);
    pub const HTTP_MAIN: Contexts = Contexts(1 << 7);
    pub const HTTP_SRV: Contexts = Contexts(1 << 8);
    pub const HTTP_LOC: Contexts = Contexts(1 << 9);
    pub const HTTP_UPS: Contexts = Contexts(1 << 10);
    /// `if` inside `server`.
    pub const HTTP_SIF: Contexts = Contexts(1 << 11);
    /// `if` inside `location`.
    pub const HTTP_LIF: Contexts = Contexts(1 << 12);
    /// `limit_except`.
    pub const HTTP_LMT: Contexts = Contexts(1 << 13);
    pub const ANY: Contexts = Contexts((1 << 14) - 1);

    const NAMES: [(&'static str, Contexts); 14] = [
        ("main", Contexts::MAIN),
        ("event", Contexts::EVENT),
        ("mail_main", Contexts::MAIL_MAIN),
        ("mail_srv", Contexts::MAIL_SRV),
        ("stream_main", Contexts::STREAM_MAIN),
        ("stream_srv", Contexts::STREAM_SRV),
        ("stream_ups", Contexts::STREAM_UPS),
        ("http_main", Contexts::HTTP_MAIN),
        ("http_srv", Contexts::HTTP_SRV),
        ("http_loc", Contexts::HTTP_LOC),
        ("http_ups", Contexts::HTTP_UPS),
        ("http_sif", Contexts::HTTP_SIF),
        ("http_lif", Contexts::HTTP_LIF),
        ("http_lmt", Contexts::HTTP_LMT),
    ];

    pub const fn union(self, other: Contexts) -> Contexts {
        Contexts(self.0 | other.0)
    }

    pub const fn intersects(self, other: Contexts) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Look up a single context by its lowercase name (`"http_loc"`).
    pub fn from_name(name: &str) -> Option<Contexts> {
        Contexts::NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
    }

    /// Names of the contexts in this set, in declaration order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Contexts::NAMES
            .into_iter()
            .filter(move |(_, c)| self.intersects(*c))
            .map(|(n, _)| n)
    }
}

impl BitOr for Contexts {
    type Output = Contexts;

    fn bitor(self, rhs: Contexts) -> Contexts {
        self.union(rhs)
    }
}

impl fmt::Debug for Contexts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.names().collect();
        write!(f, "Contexts({})", names.join(" | "))
    }
}

// ──────────────────────────────────────────────
// Descriptors
// ──────────────────────────────────────────────

/// How many arguments a directive takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    NoArgs,
    Take(u8),
    /// Inclusive range, e.g. `Range(1, 3)` for one to three arguments.
    Range(u8, u8),
    AtLeast(u8),
    /// Exactly one argument, `on` or `off`.
    Flag,
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::NoArgs => count == 0,
            Arity::Take(n) => count == n as usize,
            Arity::Range(min, max) => (min as usize..=max as usize).contains(&count),
            Arity::AtLeast(n) => count >= n as usize,
            Arity::Flag => count == 1,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::NoArgs => f.write_str("none"),
            Arity::Take(n) => write!(f, "{}", n),
            Arity::Range(min, max) => write!(f, "{}-{}", min, max),
            Arity::AtLeast(n) => write!(f, "{}+", n),
            Arity::Flag => f.write_str("flag"),
        }
    }
}

/// One legal shape of a directive: where it may appear, how many arguments
/// it takes there, and whether it must be followed by a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub contexts: Contexts,
    pub arity: Arity,
    pub block: bool,
}

impl Descriptor {
    pub const fn new(contexts: Contexts, arity: Arity) -> Self {
        Descriptor {
            contexts,
            arity,
            block: false,
        }
    }

    pub const fn block(contexts: Contexts, arity: Arity) -> Self {
        Descriptor {
            contexts,
            arity,
            block: true,
        }
    }
}

/// How the body of a directive's block is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    /// Nested directives, validated like everything else.
    #[default]
    Directives,
    /// Data rows (`map`, `geo`, `types`, ...): parsed with the ordinary
    /// grammar, but entry names are not looked up.
    Freeform,
    /// Foreign code, kept as an uninterpreted balanced-brace span.
    Opaque,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveSpec {
    pub descriptors: Vec<Descriptor>,
    pub body: Body,
}

// ──────────────────────────────────────────────
// Table
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct DescriptorTable {
    directives: HashMap<String, DirectiveSpec>,
}

static BUILTIN: OnceLock<DescriptorTable> = OnceLock::new();

/// Directives whose blocks hold data rows rather than directives.
const FREEFORM: &[&str] = &["map", "geo", "split_clients", "types", "match", "charset_map"];

impl DescriptorTable {
    /// The baseline plus the builtin third-party extensions.
    pub fn builtin() -> &'static DescriptorTable {
        BUILTIN.get_or_init(|| {
            let mut table = DescriptorTable::default();
            for (name, descriptors) in baseline::BASELINE {
                table.insert_static(name, descriptors, Body::Directives);
            }
            for name in FREEFORM {
                if let Some(spec) = table.directives.get_mut(*name) {
                    spec.body = Body::Freeform;
                }
            }
            for (name, descriptors, body) in extensions::EXTENSIONS {
                table.insert_static(name, descriptors, *body);
            }
            tracing::debug!(directives = table.len(), "built directive descriptor table");
            table
        })
    }

    fn insert_static(&mut self, name: &str, descriptors: &[Descriptor], body: Body) {
        self.directives
            .entry(name.to_owned())
            .and_modify(|spec| spec.descriptors.extend_from_slice(descriptors))
            .or_insert_with(|| DirectiveSpec {
                descriptors: descriptors.to_vec(),
                body,
            });
    }

    /// A copy of this table with additional directives. Extensions may only
    /// introduce new names.
    pub fn with_extensions(&self, file: &ExtensionFile) -> Result<DescriptorTable, ExtensionError> {
        let mut table = self.clone();
        for ext in &file.directive {
            if self.directives.contains_key(&ext.name) {
                return Err(ExtensionError::Redefined(ext.name.clone()));
            }
            let descriptor = ext.to_descriptor()?;
            table
                .directives
                .entry(ext.name.clone())
                .or_insert_with(|| DirectiveSpec {
                    descriptors: Vec::new(),
                    body: ext.body,
                })
                .descriptors
                .push(descriptor);
        }
        Ok(table)
    }

    pub fn get(&self, name: &str) -> Option<&DirectiveSpec> {
        self.directives.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.directives.contains_key(name)
    }

    /// Body kind of a directive; unknown names read their body as directives.
    pub fn body(&self, name: &str) -> Body {
        self.directives
            .get(name)
            .map_or(Body::Directives, |spec| spec.body)
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_has_core_directives() {
        let table = DescriptorTable::builtin();
        for name in ["http", "server", "location", "listen", "events", "include"] {
            assert!(table.contains(name), "missing {}", name);
        }
        assert!(!table.contains("no_such_directive"));
    }

    #[test]
    fn server_has_a_shape_per_context() {
        let spec = DescriptorTable::builtin().get("server").unwrap();
        let in_http = spec
            .descriptors
            .iter()
            .find(|d| d.contexts.intersects(Contexts::HTTP_MAIN))
            .unwrap();
        assert!(in_http.block);
        assert_eq!(in_http.arity, Arity::NoArgs);
        let in_upstream = spec
            .descriptors
            .iter()
            .find(|d| d.contexts.intersects(Contexts::HTTP_UPS))
            .unwrap();
        assert!(!in_upstream.block);
        assert_eq!(in_upstream.arity, Arity::AtLeast(1));
    }

    #[test]
    fn extensions_never_shadow_the_baseline() {
        let base: HashSet<_> = baseline::BASELINE.iter().map(|(n, _)| *n).collect();
        for (name, _, _) in extensions::EXTENSIONS {
            assert!(!base.contains(name), "{} is already in the baseline", name);
        }
    }

    #[test]
    fn body_kinds() {
        let table = DescriptorTable::builtin();
        assert_eq!(table.body("map"), Body::Freeform);
        assert_eq!(table.body("types"), Body::Freeform);
        assert_eq!(table.body("access_by_lua_block"), Body::Opaque);
        assert_eq!(table.body("content_by_lua_block"), Body::Opaque);
        assert_eq!(table.body("server"), Body::Directives);
        assert_eq!(table.body("unknown"), Body::Directives);
    }

    #[test]
    fn include_is_legal_everywhere() {
        let spec = DescriptorTable::builtin().get("include").unwrap();
        assert_eq!(spec.descriptors[0].contexts, Contexts::ANY);
    }

    #[test]
    fn every_descriptor_has_a_context() {
        for (name, spec) in &DescriptorTable::builtin().directives {
            for d in &spec.descriptors {
                assert!(!d.contexts.is_empty(), "{} has an empty context set", name);
            }
        }
    }

    #[test]
    fn arity_accepts() {
        assert!(Arity::NoArgs.accepts(0));
        assert!(!Arity::NoArgs.accepts(1));
        assert!(Arity::Take(2).accepts(2));
        assert!(!Arity::Take(2).accepts(3));
        assert!(Arity::Range(1, 3).accepts(3));
        assert!(!Arity::Range(1, 3).accepts(0));
        assert!(Arity::AtLeast(2).accepts(7));
        assert!(!Arity::AtLeast(2).accepts(1));
        assert!(Arity::Flag.accepts(1));
    }

    #[test]
    fn context_names_round_trip() {
        let c = Contexts::HTTP_SRV | Contexts::HTTP_LOC;
        let names: Vec<_> = c.names().collect();
        assert_eq!(names, vec!["http_srv", "http_loc"]);
        assert_eq!(Contexts::from_name("http_lmt"), Some(Contexts::HTTP_LMT));
        assert_eq!(Contexts::from_name("nope"), None);
    }
}
