//! User-supplied descriptor extensions, deserialized from a document such as
//!
//! ```toml
//! [[directive]]
//! name = "vhost_traffic_status"
//! contexts = ["http_main", "http_srv", "http_loc"]
//! args = "flag"
//! ```

use serde::Deserialize;

use super::{Arity, Body, Contexts, Descriptor};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtensionError {
    #[error("directive `{0}` is already defined and cannot be redefined")]
    Redefined(String),
    #[error("directive `{name}`: unknown context '{context}'")]
    UnknownContext { name: String, context: String },
    #[error("directive `{name}`: no contexts given")]
    NoContexts { name: String },
    #[error("directive `{name}`: invalid argument count '{args}' (expected none, N, N-M, N+ or flag)")]
    InvalidArity { name: String, args: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtensionFile {
    #[serde(default)]
    pub directive: Vec<ExtensionSpec>,
}

/// One legal shape of an extension directive. Repeat the entry with the same
/// name to give a directive several shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtensionSpec {
    pub name: String,
    pub contexts: Vec<String>,
    pub args: String,
    #[serde(default)]
    pub block: bool,
    #[serde(default)]
    pub body: Body,
}

impl ExtensionSpec {
    pub fn to_descriptor(&self) -> Result<Descriptor, ExtensionError> {
        if self.contexts.is_empty() {
            return Err(ExtensionError::NoContexts {
                name: self.name.clone(),
            });
        }
        let mut contexts = Contexts::NONE;
        for c in &self.contexts {
            let ctx = if c == "any" {
                Contexts::ANY
            } else {
                Contexts::from_name(c).ok_or_else(|| ExtensionError::UnknownContext {
                    name: self.name.clone(),
                    context: c.clone(),
                })?
            };
            contexts = contexts | ctx;
        }
        let arity = parse_arity(&self.args).ok_or_else(|| ExtensionError::InvalidArity {
            name: self.name.clone(),
            args: self.args.clone(),
        })?;
        Ok(Descriptor {
            contexts,
            arity,
            block: self.block,
        })
    }
}

fn parse_arity(s: &str) -> Option<Arity> {
    let s = s.trim();
    match s {
        "none" | "0" => return Some(Arity::NoArgs),
        "flag" => return Some(Arity::Flag),
        _ => {}
    }
    if let Some(n) = s.strip_suffix('+') {
        return n.parse().ok().map(Arity::AtLeast);
    }
    if let Some((min, max)) = s.split_once('-') {
        let min: u8 = min.parse().ok()?;
        let max: u8 = max.parse().ok()?;
        return (min < max).then_some(Arity::Range(min, max));
    }
    s.parse().ok().map(Arity::Take)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(contexts: &[&str], args: &str) -> ExtensionSpec {
        ExtensionSpec {
            name: "x".into(),
            contexts: contexts.iter().map(|s| s.to_string()).collect(),
            args: args.into(),
            block: false,
            body: Body::Directives,
        }
    }

    #[test]
    fn arity_strings() {
        assert_eq!(parse_arity("none"), Some(Arity::NoArgs));
        assert_eq!(parse_arity("flag"), Some(Arity::Flag));
        assert_eq!(parse_arity("2"), Some(Arity::Take(2)));
        assert_eq!(parse_arity("1-3"), Some(Arity::Range(1, 3)));
        assert_eq!(parse_arity("2+"), Some(Arity::AtLeast(2)));
        assert_eq!(parse_arity("3-1"), None);
        assert_eq!(parse_arity("many"), None);
    }

    #[test]
    fn contexts_are_combined() {
        let d = spec(&["http_srv", "http_loc"], "1").to_descriptor().unwrap();
        assert_eq!(d.contexts, Contexts::HTTP_SRV | Contexts::HTTP_LOC);
        assert_eq!(d.arity, Arity::Take(1));
        let any = spec(&["any"], "none").to_descriptor().unwrap();
        assert_eq!(any.contexts, Contexts::ANY);
    }

    #[test]
    fn bad_specs_are_rejected() {
        assert_eq!(
            spec(&["http_nowhere"], "1").to_descriptor(),
            Err(ExtensionError::UnknownContext {
                name: "x".into(),
                context: "http_nowhere".into()
            })
        );
        assert!(matches!(
            spec(&[], "1").to_descriptor(),
            Err(ExtensionError::NoContexts { .. })
        ));
        assert!(matches!(
            spec(&["main"], "lots").to_descriptor(),
            Err(ExtensionError::InvalidArity { .. })
        ));
    }

    #[test]
    fn deserializes_from_toml() {
        let src = r#"
[[directive]]
name = "vhost_traffic_status"
contexts = ["http_main", "http_srv", "http_loc"]
args = "flag"

[[directive]]
name = "perl_block"
contexts = ["http_loc"]
args = "none"
block = true
body = "opaque"
"#;
        let file: ExtensionFile = toml::from_str(src).unwrap();
        assert_eq!(file.directive.len(), 2);
        assert_eq!(file.directive[1].body, Body::Opaque);
        assert!(file.directive[1].block);
        assert_eq!(file.directive[0].body, Body::Directives);
    }
}
