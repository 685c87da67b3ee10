//! Layout table dump CLI.
//!
//! Resolves every rotation under every offset and writes the layouts as JSONL.
//!
//! Usage:
//!   cargo run --release --bin tables -- [OPTIONS]
//!
//! Options:
//!   --config NAME      standard or counter (default: standard)
//!   --overrides SRC    none, builtin, or a JSON file path (default: none)
//!   --output FILE      Output file path (default: stdout)

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use tracing::{error, info};

use setterline::config::RotationConfig;
use setterline::layout::ActualPositionOverrides;
use setterline::{logging, tables};

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = env::args().collect();
    let mut config = RotationConfig::default();
    let mut overrides_src: Option<String> = None;
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "--overrides" | "--output" if i + 1 >= args.len() => {
                eprintln!("Missing value for {}", args[i]);
                print_usage();
                return ExitCode::FAILURE;
            }
            "--config" => {
                i += 1;
                config = match args[i].parse() {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("{}", e);
                        return ExitCode::FAILURE;
                    }
                };
            }
            "--overrides" => {
                i += 1;
                overrides_src = Some(args[i].clone());
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                return ExitCode::FAILURE;
            }
        }
        i += 1;
    }

    let overrides = match overrides_src.as_deref() {
        None | Some("none") => Ok(None),
        Some("builtin") => ActualPositionOverrides::builtin_for(config).map(Some),
        Some(path) => ActualPositionOverrides::load(path).map(Some),
    };
    let overrides = match overrides {
        Ok(o) => o,
        Err(e) => {
            error!("failed to load overrides: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let layouts = tables::all_layouts(config, overrides.as_ref());
    info!(config = %config, count = layouts.len(), "resolved layouts");

    let result = match &output_path {
        Some(path) => File::create(path)
            .and_then(|file| tables::write_jsonl(&layouts, &mut BufWriter::new(file))),
        None => {
            let stdout = io::stdout();
            tables::write_jsonl(&layouts, &mut BufWriter::new(stdout.lock()))
        }
    };

    match result {
        Ok(()) => {
            if let Some(path) = output_path {
                info!("wrote {} layouts to {}", layouts.len(), path);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to write output: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!("Usage: tables [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config NAME    standard or counter (default: standard)");
    eprintln!("  --overrides SRC  none, builtin, or a JSON file path (default: none)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --help           Show this help");
}
