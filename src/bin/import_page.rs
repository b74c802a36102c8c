//! Imports one exported page and prints the result as JSON.
//!
//! Usage: import_page --url <URL> [--origin <URL>] [file.html]
//! Reads the page from stdin when no file is given.

use rs_block_importer::{import_bytes, Options, Report};
use serde::Serialize;
use std::env;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Output {
    path: String,
    report: Report,
    warnings: Vec<String>,
    html: String,
}

struct Args {
    url: String,
    origin: Option<String>,
    input: Option<String>,
}

fn usage() -> ! {
    eprintln!("Usage: import_page --url <URL> [--origin <URL>] [file.html]");
    eprintln!("  --url     Page URL, used to derive the output path");
    eprintln!("  --origin  Original site URL for resolving relative media");
    eprintln!("  file      Exported HTML (default: stdin)");
    std::process::exit(1);
}

fn parse_args() -> Args {
    let mut url = None;
    let mut origin = None;
    let mut input = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--url" => url = args.next(),
            "--origin" => origin = args.next(),
            "-h" | "--help" => usage(),
            _ if input.is_none() && !arg.starts_with("--") => input = Some(arg),
            _ => usage(),
        }
    }

    let Some(url) = url else { usage() };
    Args { url, origin, input }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rs_block_importer=info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = parse_args();

    let bytes = match &args.input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let options = Options {
        original_url: args.origin,
        ..Options::default()
    };
    let result = import_bytes(&bytes, &args.url, &options)?;

    let output = Output {
        html: result.html(),
        path: result.output_path,
        report: result.report,
        warnings: result.warnings,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
