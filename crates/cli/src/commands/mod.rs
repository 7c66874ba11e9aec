pub(crate) mod lex;
pub(crate) mod parse;
pub(crate) mod sections;

use std::path::Path;

use ngxparse_core::dump::{self, Section};

use crate::{fail, OutputFormat};

pub(crate) fn load_sections(file: &Path, output: OutputFormat, quiet: bool) -> Vec<Section> {
    match dump::read(file) {
        Ok(sections) => sections,
        Err(e) => fail(&e.to_string(), output, quiet),
    }
}

/// The named section, or the only section when no name is given.
pub(crate) fn select_section<'s>(
    sections: &'s [Section],
    name: Option<&str>,
    output: OutputFormat,
    quiet: bool,
) -> &'s Section {
    match name {
        Some(name) => match dump::find(sections, name) {
            Ok(section) => section,
            Err(e) => fail(&e.to_string(), output, quiet),
        },
        None => match sections {
            [only] => only,
            _ => {
                let available: Vec<_> = sections
                    .iter()
                    .map(|s| format!("  {} ({} bytes)", s.name, s.text.len()))
                    .collect();
                let msg = format!(
                    "configuration dump has {} sections; pick one with --section or use --all\navailable sections:\n{}",
                    sections.len(),
                    available.join("\n")
                );
                fail(&msg, output, quiet)
            }
        },
    }
}
