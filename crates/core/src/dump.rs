//! Splitting of `nginx -T` style configuration dumps.
//!
//! A dump concatenates every file of a configuration, each introduced by a
//! line of the form `# configuration file /etc/nginx/nginx.conf:`. Text before
//! the first such line belongs to a default section; a plain configuration
//! file is therefore a dump with a single default section.

use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("section '{name}' not found (available: {})", available.join(", "))]
    MissingSection {
        name: String,
        available: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Path from the header line, or the default name.
    pub name: String,
    pub text: String,
}

const HEADER_PREFIX: &str = "# configuration file ";

/// The file path named by a section header line, if `line` is one.
fn header_path(line: &str) -> Option<&str> {
    let path = line.strip_prefix(HEADER_PREFIX)?.strip_suffix(':')?;
    (!path.is_empty() && !path.contains(':')).then_some(path)
}

/// Split dump text into sections in order of appearance. Carriage returns are
/// removed from the section text.
pub fn split(text: &str, default_name: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section {
        name: default_name.to_owned(),
        text: String::new(),
    };
    let mut saw_header = false;

    for raw in text.split_inclusive('\n') {
        let line = raw.replace('\r', "");
        match header_path(line.trim_end_matches('\n')) {
            Some(path) => {
                if saw_header || !current.text.is_empty() {
                    sections.push(current);
                }
                current = Section {
                    name: path.to_owned(),
                    text: String::new(),
                };
                saw_header = true;
            }
            None => current.text.push_str(&line),
        }
    }
    if saw_header || !current.text.is_empty() || sections.is_empty() {
        sections.push(current);
    }
    tracing::debug!(sections = sections.len(), "split configuration dump");
    sections
}

/// Read a dump (or a plain configuration file) from disk. The path doubles
/// as the default section name.
pub fn read(path: &Path) -> Result<Vec<Section>, DumpError> {
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| DumpError::Io {
        path: display.clone(),
        source,
    })?;
    Ok(split(&text, &display))
}

/// The first section called `name`.
pub fn find<'s>(sections: &'s [Section], name: &str) -> Result<&'s Section, DumpError> {
    sections
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| DumpError::MissingSection {
            name: name.to_owned(),
            available: sections.iter().map(|s| s.name.clone()).collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn plain_file_is_one_default_section() {
        let s = split("user nginx;\nevents {}\n", "nginx.conf");
        assert_eq!(names(&s), vec!["nginx.conf"]);
        assert_eq!(s[0].text, "user nginx;\nevents {}\n");
    }

    #[test]
    fn empty_input_still_has_the_default_section() {
        let s = split("", "empty.conf");
        assert_eq!(names(&s), vec!["empty.conf"]);
        assert!(s[0].text.is_empty());
    }

    #[test]
    fn dump_sections_in_order() {
        let text = concat!(
            "nginx: the configuration file /etc/nginx/nginx.conf syntax is ok\r\n",
            "# configuration file /etc/nginx/nginx.conf:\r\n",
            "include /etc/nginx/conf.d/*.conf;\r\n",
            "# configuration file /etc/nginx/conf.d/default.conf:\n",
            "server { listen 80; }\n",
        );
        let s = split(text, "__DEFAULT__");
        assert_eq!(
            names(&s),
            vec![
                "__DEFAULT__",
                "/etc/nginx/nginx.conf",
                "/etc/nginx/conf.d/default.conf"
            ]
        );
        assert_eq!(s[1].text, "include /etc/nginx/conf.d/*.conf;\n");
        assert_eq!(s[2].text, "server { listen 80; }\n");
    }

    #[test]
    fn empty_default_is_dropped_when_headers_exist() {
        let s = split("# configuration file a.conf:\nuser x;\n", "dump");
        assert_eq!(names(&s), vec!["a.conf"]);
    }

    #[test]
    fn empty_named_sections_are_kept() {
        let s = split(
            "# configuration file a.conf:\n# configuration file b.conf:\nuser x;\n",
            "dump",
        );
        assert_eq!(names(&s), vec!["a.conf", "b.conf"]);
        assert!(s[0].text.is_empty());
    }

    #[test]
    fn near_miss_headers_are_content() {
        for line in [
            "# configuration file :",
            "# configuration file a:b:",
            "# configuration file a.conf",
            "  # configuration file a.conf:",
        ] {
            let s = split(&format!("{}\n", line), "d");
            assert_eq!(names(&s), vec!["d"], "{:?}", line);
        }
    }

    #[test]
    fn missing_section_lists_the_available_ones() {
        let s = split("# configuration file a.conf:\nuser x;\n", "dump");
        let err = find(&s, "b.conf").unwrap_err();
        assert_eq!(
            err.to_string(),
            "section 'b.conf' not found (available: a.conf)"
        );
        assert_eq!(find(&s, "a.conf").unwrap().text, "user x;\n");
    }

    #[test]
    fn read_reports_the_path() {
        let err = read(Path::new("/nonexistent/ngxparse/nginx.conf")).unwrap_err();
        assert!(matches!(err, DumpError::Io { .. }));
        assert!(err.to_string().starts_with("cannot read '/nonexistent/ngxparse/nginx.conf'"));
    }
}
