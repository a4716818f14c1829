//! Extract political parties from a saved register page.
//!
//! Usage: `parse_parties [--list] [PATH|-]`
//!
//! PATH may be an HTML file or a directory to search for one (default: the
//! current directory). `-` reads the page from stdin. Prints the parties as
//! JSON, or as a numbered listing with `--list`.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use rs_partylist::{encoding, extract, output, source, ExtractResult};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: parse_parties [--list] [PATH|-]";

struct Args {
    list: bool,
    input: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        list: false,
        input: None,
    };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--list" | "-l" => args.list = true,
            "--help" | "-h" => return Err(USAGE.to_string()),
            _ if args.input.is_none() => args.input = Some(PathBuf::from(&arg)),
            _ => return Err(format!("unexpected argument: {arg}\n{USAGE}")),
        }
    }

    Ok(args)
}

fn load_html(input: Option<PathBuf>) -> Result<String, String> {
    match input {
        Some(path) if path.as_os_str() == "-" => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
            Ok(encoding::transcode_to_utf8(&bytes))
        }
        other => {
            let dir_or_file = other.unwrap_or_else(|| PathBuf::from("."));
            let path = source::resolve_input(&dir_or_file).map_err(|e| e.to_string())?;
            source::read_html(&path).map_err(|e| e.to_string())
        }
    }
}

fn report(result: &ExtractResult, list: bool) -> Result<(), String> {
    if list {
        println!("Parties found: {}", result.parties.len());
        print!("{}", output::render_listing(&result.parties));
    } else {
        println!("{}", output::to_json(&result.parties).map_err(|e| e.to_string())?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let html = match load_html(args.input) {
        Ok(html) => html,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let result = extract(&html);
    if result.is_empty() {
        eprintln!("No parties found");
    }

    if let Err(message) = report(&result, args.list) {
        eprintln!("error: {message}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
