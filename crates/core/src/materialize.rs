//! Plain directive tree for external consumers.
//!
//! Comments and blank-line markers are dropped. The tree serializes as
//! `{filename, directives: [{name, args, block?, code?}]}`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::{self, BlockBody, Document, List};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub filename: String,
    pub directives: Vec<Directive>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub name: String,
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Vec<Directive>>,
    /// Verbatim interior of an opaque (foreign code) block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

pub fn materialize(doc: &Document) -> Config {
    Config {
        filename: doc.filename.clone(),
        directives: materialize_list(&doc.root),
    }
}

fn materialize_list(list: &List) -> Vec<Directive> {
    list.directives().map(materialize_directive).collect()
}

fn materialize_directive(d: &ast::Directive) -> Directive {
    let (block, code) = match &d.body {
        None => (None, None),
        Some(BlockBody::Block(list)) | Some(BlockBody::Freeform(list)) => {
            (Some(materialize_list(list)), None)
        }
        Some(BlockBody::Opaque { code, .. }) => (None, Some(code.clone())),
    };
    Directive {
        name: d.name.clone(),
        args: d.args.iter().map(|a| a.text.clone()).collect(),
        block,
        code,
    }
}

impl Config {
    pub fn to_json_value(&self) -> serde_json::Value {
        // Serializing plain strings and vectors cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

// ──────────────────────────────────────────────
// Rendering
// ──────────────────────────────────────────────

const INDENT: &str = "    ";

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.directives {
            d.render(f, 0)?;
        }
        Ok(())
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

impl Directive {
    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = INDENT.repeat(depth);
        write!(f, "{}{}", pad, self.name)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        if let Some(code) = &self.code {
            return writeln!(f, " {{{}}}", code);
        }
        match &self.block {
            None => writeln!(f, ";"),
            Some(children) => {
                writeln!(f, " {{")?;
                for child in children {
                    child.render(f, depth + 1)?;
                }
                writeln!(f, "{}}}", pad)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn config(src: &str) -> Config {
        materialize(&parse("test.conf", src).unwrap())
    }

    #[test]
    fn comments_and_blank_lines_are_dropped() {
        let c = config("# top\nuser nginx;\n\n\nhttp {\n  # inner\n  sendfile on;\n}\n");
        assert_eq!(c.directives.len(), 2);
        let http = &c.directives[1];
        assert_eq!(http.block.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn json_omits_absent_block_and_code() {
        let c = config("http { server { listen 80; server_name a.com b.com; } }");
        let v = c.to_json_value();
        assert_eq!(v["filename"], "test.conf");
        let server = &v["directives"][0]["block"][0];
        assert_eq!(server["name"], "server");
        let listen = &server["block"][0];
        assert_eq!(listen["name"], "listen");
        assert_eq!(listen["args"], serde_json::json!(["80"]));
        assert!(listen.get("block").is_none());
        assert!(listen.get("code").is_none());
        assert_eq!(
            server["block"][1]["args"],
            serde_json::json!(["a.com", "b.com"])
        );
    }

    #[test]
    fn opaque_body_becomes_code() {
        let c = config("http { init_by_lua_block { require \"a\" } }");
        let init = &c.directives[0].block.as_ref().unwrap()[0];
        assert_eq!(init.code.as_deref(), Some(" require \"a\" "));
        assert!(init.block.is_none());
    }

    #[test]
    fn freeform_rows_become_children() {
        let c = config("http { map $a $b { default 0; ~x 1; } }");
        let map = &c.directives[0].block.as_ref().unwrap()[0];
        let rows: Vec<_> = map
            .block
            .as_ref()
            .unwrap()
            .iter()
            .map(|d| (d.name.as_str(), d.args.clone()))
            .collect();
        assert_eq!(
            rows,
            vec![("default", vec!["0".to_owned()]), ("~x", vec!["1".to_owned()])]
        );
    }

    #[test]
    fn renders_with_four_space_indent() {
        let c = config("http{server{listen 80;location / {}}}");
        assert_eq!(
            c.to_string(),
            "http {\n    server {\n        listen 80;\n        location / {\n        }\n    }\n}\n"
        );
    }

    #[test]
    fn rendering_reparses_to_the_same_tree() {
        let src = concat!(
            "user nginx;\n",
            "events { worker_connections 512; }\n",
            "http {\n",
            "  map $http_upgrade $conn { default upgrade; '' close; }\n",
            "  server {\n",
            "    listen 443 ssl;\n",
            "    add_header X-Frame \"SAMEORIGIN\" always;\n",
            "    location / { content_by_lua_block { ngx.say(\"{ok}\") } }\n",
            "  }\n",
            "}\n",
        );
        let first = config(src);
        let second = config(&first.to_string());
        assert_eq!(first.directives, second.directives);
    }

    #[test]
    fn deserializes_back_from_json() {
        let c = config("http { server { listen 80; } }");
        let json = serde_json::to_string(&c).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
