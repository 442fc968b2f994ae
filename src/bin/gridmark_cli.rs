//! CLI tool for gridmark - renders a highlighted coordinate grid
//!
//! Usage:
//!   gridmark_cli [--config grid.json] [--demo] [--highlight 5.3 red]... [--undo] [--reset]
//!                [--format html|document|json|highlights] [-o out.html]
//!
//! Operations are applied in command-line order. Set `RUST_LOG=debug` to trace
//! highlight merges and render passes.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use gridmark::render::html;
use gridmark::{Grid, GridConfig};

const USAGE: &str = "Usage: gridmark_cli [--config grid.json] [--demo] [--highlight <coord> <color>]... \
[--undo] [--reset] [--format html|document|json|highlights] [-o output]";

enum Op {
    Highlight(String, String),
    Undo,
    Reset,
    Demo,
}

#[derive(Clone, Copy)]
enum Format {
    Html,
    Document,
    Json,
    Highlights,
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut config_path: Option<String> = None;
    let mut output_path: Option<String> = None;
    let mut format = Format::Html;
    let mut ops = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                config_path = Some(args.get(i + 1).cloned().unwrap_or_else(|| fail(USAGE)));
                i += 1;
            }
            "-o" | "--output" => {
                output_path = Some(args.get(i + 1).cloned().unwrap_or_else(|| fail(USAGE)));
                i += 1;
            }
            "--format" | "-f" => {
                format = match args.get(i + 1).map(String::as_str) {
                    Some("html") => Format::Html,
                    Some("document") => Format::Document,
                    Some("json") => Format::Json,
                    Some("highlights") => Format::Highlights,
                    _ => fail(USAGE),
                };
                i += 1;
            }
            "--highlight" => {
                let (Some(coord), Some(color)) = (args.get(i + 1), args.get(i + 2)) else {
                    fail(USAGE);
                };
                ops.push(Op::Highlight(coord.clone(), color.clone()));
                i += 2;
            }
            "--undo" => ops.push(Op::Undo),
            "--reset" => ops.push(Op::Reset),
            "--demo" => ops.push(Op::Demo),
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            other => fail(&format!("Unknown argument: {other}\n{USAGE}")),
        }
        i += 1;
    }

    // Load config
    let config = match &config_path {
        Some(path) => match GridConfig::from_path(path) {
            Ok(c) => c,
            Err(e) => fail(&format!("Error loading {path}: {e}")),
        },
        None if ops.iter().any(|op| matches!(op, Op::Demo)) => GridConfig {
            column_starts_with_zero: true,
            row_starts_with_zero: true,
            ..GridConfig::default()
        },
        None => GridConfig::default(),
    };

    let mut grid = match Grid::new(config) {
        Ok(g) => g,
        Err(e) => fail(&format!("Error building grid: {e}")),
    };

    for op in ops {
        match op {
            Op::Highlight(coord, color) => {
                grid.highlight_cell(&coord, &color);
            }
            Op::Undo => {
                if !grid.undo_last_highlight() {
                    eprintln!("Nothing to undo");
                }
            }
            Op::Reset => grid.reset_highlights(),
            Op::Demo => grid.seed_demo(),
        }
    }

    let rendered = match format {
        Format::Html => html::render_fragment(grid.rendered()),
        Format::Document => html::render_document(grid.rendered(), "gridmark"),
        Format::Json => serde_json::to_string_pretty(grid.rendered())
            .unwrap_or_else(|e| fail(&format!("Error serializing JSON: {e}"))),
        Format::Highlights => serde_json::to_string_pretty(&serde_json::json!({
            "highlights": grid.store().records(),
            "history": grid.store().history(),
        }))
        .unwrap_or_else(|e| fail(&format!("Error serializing JSON: {e}"))),
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &rendered) {
                fail(&format!("Error writing {path}: {e}"));
            }
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(rendered.as_bytes()).unwrap();
            println!();
        }
    }
}
