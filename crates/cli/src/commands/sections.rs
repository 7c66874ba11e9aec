use std::path::Path;

use serde::Serialize;

use crate::commands::load_sections;
use crate::OutputFormat;

#[derive(Serialize)]
struct SectionSummary<'a> {
    name: &'a str,
    bytes: usize,
}

pub(crate) fn cmd_sections(file: &Path, output: OutputFormat, quiet: bool) {
    let sections = load_sections(file, output, quiet);
    let summary: Vec<_> = sections
        .iter()
        .map(|s| SectionSummary {
            name: &s.name,
            bytes: s.text.len(),
        })
        .collect();

    match output {
        OutputFormat::Json => {
            let pretty = serde_json::to_string_pretty(&summary)
                .unwrap_or_else(|e| format!("serialization error: {}", e));
            println!("{}", pretty);
        }
        OutputFormat::Text => {
            for s in &summary {
                println!("{} ({} bytes)", s.name, s.bytes);
            }
        }
    }
}
