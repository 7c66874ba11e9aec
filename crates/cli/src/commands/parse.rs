use std::path::{Path, PathBuf};
use std::process;

use ngxparse_core::dump::Section;
use ngxparse_core::{materialize, parse_with, Config, DescriptorTable, ParseOptions};

use crate::commands::{load_sections, select_section};
use crate::extensions::load_table;
use crate::{fail, OutputFormat};

pub(crate) struct ParseArgs {
    pub file: PathBuf,
    pub section: Option<String>,
    pub all: bool,
    pub validate: bool,
    pub strict_arity: bool,
    pub directives: Option<PathBuf>,
}

pub(crate) fn cmd_parse(args: &ParseArgs, output: OutputFormat, quiet: bool) {
    let table = match load_table(args.directives.as_deref()) {
        Ok(t) => t,
        Err(msg) => fail(&msg, output, quiet),
    };
    let options = ParseOptions {
        validate: args.validate,
        strict_arity: args.strict_arity,
    };
    let sections = load_sections(&args.file, output, quiet);

    if args.all {
        let configs: Vec<Config> = parseable(&sections, &args.file)
            .map(|s| parse_section(s, &table, options, output, quiet))
            .collect();
        match output {
            OutputFormat::Json => print_json(&configs),
            OutputFormat::Text => {
                for cfg in &configs {
                    println!("# configuration file {}:", cfg.filename);
                    print!("{}", cfg);
                }
            }
        }
        return;
    }

    let section = select_section(&sections, args.section.as_deref(), output, quiet);
    let cfg = parse_section(section, &table, options, output, quiet);
    match output {
        OutputFormat::Json => print_json(&cfg),
        OutputFormat::Text => print!("{}", cfg),
    }
}

/// Sections worth parsing on their own: included `.map` data files and the
/// status preamble before the first header are skipped.
fn parseable<'s>(sections: &'s [Section], file: &Path) -> impl Iterator<Item = &'s Section> {
    let preamble = file.display().to_string();
    let is_dump = sections.len() > 1;
    sections.iter().filter(move |s| {
        if s.name.ends_with(".map") {
            tracing::info!(section = %s.name, "skipping map data section");
            return false;
        }
        !(is_dump && s.name == preamble)
    })
}

fn parse_section(
    section: &Section,
    table: &DescriptorTable,
    options: ParseOptions,
    output: OutputFormat,
    quiet: bool,
) -> Config {
    match parse_with(&section.name, &section.text, table, options) {
        Ok(doc) => materialize(&doc),
        Err(e) => {
            match output {
                OutputFormat::Json => {
                    let err_json = serde_json::to_string_pretty(&e.to_json_value())
                        .unwrap_or_else(|_| format!("{{\"error\": \"{:?}\"}}", e));
                    eprintln!("{}", err_json);
                }
                OutputFormat::Text => {
                    if !quiet {
                        eprintln!("{}", e);
                    }
                }
            }
            process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    let pretty = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("serialization error: {}", e));
    println!("{}", pretty);
}
