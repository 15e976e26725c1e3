//! Command-line interface for traindown
//! Reads a traindown document and prints it in one of the output formats.
//!
//! Usage:
//!   traindown `<path>` [--format `<format>`] [--config `<file>`] [--verbose]  - Process a document (`-` reads stdin)
//!   traindown --list-formats                                            - List all output formats

use clap::{Arg, ArgAction, Command};
use std::io::{self, Read};
use std::process;
use traindown::config::{Loader, TraindownConfig};
use traindown::formats::{process, process_file, OutputFormat, ProcessingError};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("traindown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse, format and inspect traindown training logs")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the traindown document, or '-' for stdin")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (see --list-formats)")
                .default_value("canonical"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser activity to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let Some(path) = matches.get_one::<String>("path") else {
        fail("a path is required unless listing formats");
    };
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("canonical");

    let config = load_config(matches.get_one::<String>("config"));
    handle_process_command(path, format, &config);
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("traindown=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}

fn load_config(path: Option<&String>) -> TraindownConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader
        .build()
        .unwrap_or_else(|e| fail(&format!("Invalid configuration: {}", e)))
}

fn read_stdin() -> io::Result<String> {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    Ok(source)
}

fn handle_process_command(path: &str, format: &str, config: &TraindownConfig) {
    let format: OutputFormat = format.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for name in OutputFormat::available() {
            eprintln!("  {}", name);
        }
        process::exit(1);
    });

    let result = if path == "-" {
        read_stdin()
            .map_err(ProcessingError::from)
            .and_then(|source| process(&source, format, config))
    } else {
        process_file(path, format, config)
    };

    let output = result.unwrap_or_else(|e| match e {
        ProcessingError::Io(e) => fail(&format!("Error reading {}: {}", path, e)),
        e => fail(&format!("Processing error: {}", e)),
    });

    println!("{}", output.text);
    for error in &output.errors {
        eprintln!("warning: {}", error);
    }
}

fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in OutputFormat::ALL {
        println!("  {}", format.name());
        println!("    {}", format.description());
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}
