//! Command-line interface for columns
//! Reads plain text, detects whitespace-aligned tables, and prints the
//! rendered document.
//!
//! Usage:
//!   columns <path> [--style <style>] [--format <format>] [--verbose]
//!   columns -            - read from stdin

use clap::{Arg, ArgAction, Command};
use columns::columns::processor::{ColumnsProcessor, Config, Style};
use columns::columns::DocumentRenderer;
use std::io::Read;

fn main() {
    let matches = Command::new("columns")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Detects whitespace-aligned tables in plain text and renders them as HTML")
        .arg(
            Arg::new("path")
                .help("Path to the text file, or '-' for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .short('s')
                .help("Stylesheet handling: 'default', 'bare', or a stylesheet path")
                .default_value("default"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'html' or 'json' (detected table models)")
                .default_value("html"),
        )
        .arg(
            Arg::new("code-indent")
                .long("code-indent")
                .help("Indent at which a leftmost column reads as a code block")
                .default_value("4"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Report rejected candidates on stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let style = matches.get_one::<String>("style").expect("has default");
    let format = matches.get_one::<String>("format").expect("has default");
    let code_indent: usize = matches
        .get_one::<String>("code-indent")
        .expect("has default")
        .parse()
        .unwrap_or_else(|_| {
            eprintln!("--code-indent must be a number");
            std::process::exit(2);
        });

    let text = read_input(path);
    let config = Config {
        code_indent,
        verbose: matches.get_flag("verbose"),
        style: parse_style(style),
    };
    let mut renderer = DocumentRenderer::new(ColumnsProcessor::new(config));

    match format.as_str() {
        "html" => println!("{}", renderer.render_html(&text)),
        "json" => {
            let tables = renderer.detect_tables(&text);
            let json = serde_json::to_string_pretty(&tables).unwrap_or_else(|e| {
                eprintln!("Error formatting tables: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        other => {
            eprintln!("Format '{}' not supported; use 'html' or 'json'", other);
            std::process::exit(2);
        }
    }
}

fn parse_style(style: &str) -> Style {
    match style {
        "default" => Style::Default,
        "bare" => Style::Bare,
        path => Style::Path(path.to_string()),
    }
}

fn read_input(path: &str) -> String {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            });
        text
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        })
    }
}
