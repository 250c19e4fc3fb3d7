//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//!
//! Prints `{"blocks": [...], "diagnostics": {...}}`. Set `RUST_LOG=debug`
//! to see container resolution and counters on stderr.

use clap::Parser;
use rs_docblocks::{extract_with_options, ExtractResult, Options, SelectorConfig};
use std::fs;
use std::io::{self, Read};
use std::process;

/// Extract structured content blocks from an HTML page
#[derive(Parser, Debug)]
#[command(name = "extract_stdin")]
#[command(about = "Reads HTML from stdin and prints the extracted content blocks as JSON")]
struct Args {
    /// Page URL used to resolve relative links and images
    #[arg(short, long)]
    url: Option<String>,

    /// JSON file with `content`, `articleContainer` and `exclude` selectors
    #[arg(short, long)]
    selectors: Option<String>,

    /// Page title; headings repeating it are dropped
    #[arg(long)]
    title: Option<String>,

    /// Page author; bylines naming them are dropped
    #[arg(long)]
    author: Option<String>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

fn load_selectors(path: Option<&str>) -> Result<SelectorConfig, String> {
    let Some(path) = path else {
        return Ok(SelectorConfig::default());
    };
    let raw = fs::read_to_string(path).map_err(|e| format!("Failed to read {path}: {e}"))?;
    serde_json::from_str(&raw).map_err(|e| format!("Invalid selector JSON in {path}: {e}"))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let selectors = match load_selectors(args.selectors.as_deref()) {
        Ok(selectors) => selectors,
        Err(msg) => {
            eprintln!("{msg}");
            process::exit(2);
        }
    };

    // Read HTML from stdin
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        process::exit(1);
    }

    let options = Options {
        base_url: args.url,
        title: args.title,
        author: args.author,
        ..Options::default()
    };

    let result: ExtractResult = match extract_with_options(&html, &selectors, &options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Extraction failed: {e}");
            process::exit(1);
        }
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    println!("{}", json.unwrap_or_default());
}
