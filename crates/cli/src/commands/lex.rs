use std::path::Path;
use std::process;

use ngxparse_core::{Lexer, TokenKind};

use crate::commands::{load_sections, select_section};
use crate::{report_error, OutputFormat};

pub(crate) fn cmd_lex(file: &Path, section: Option<&str>, output: OutputFormat, quiet: bool) {
    let sections = load_sections(file, output, quiet);
    let section = select_section(&sections, section, output, quiet);

    let mut failure = None;
    let mut rows = Vec::new();
    for tok in Lexer::new(&section.text) {
        if let TokenKind::Error(e) = tok.kind {
            failure = Some(format!("{}:{}: {}", section.name, tok.line, e));
        }
        match output {
            OutputFormat::Json => rows.push(serde_json::json!({
                "kind": tok.kind.as_str(),
                "line": tok.line,
                "offset": tok.offset,
                "text": tok.text,
            })),
            OutputFormat::Text => {
                println!("{}:{}\t{}\t{:?}", tok.line, tok.offset, tok.kind.as_str(), tok.text)
            }
        }
    }
    if output == OutputFormat::Json {
        let pretty = serde_json::to_string_pretty(&rows)
            .unwrap_or_else(|e| format!("serialization error: {}", e));
        println!("{}", pretty);
    }
    if let Some(msg) = failure {
        report_error(&msg, output, quiet);
        process::exit(1);
    }
}
