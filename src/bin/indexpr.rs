//! Command-line interface for indexpr
//! Validates candidate strings against the indexing expression grammar, one
//! per line, and prints a verdict for each.
//!
//! Usage:
//!   indexpr check `<path>` [--format `<format>`]  - Validate expressions from a file
//!   indexpr amounts `<path>`                    - Validate monetary values from a file

use clap::{Arg, Command};

fn main() {
    let matches = Command::new("indexpr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A validator for indexing/slicing expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check")
                .about("Validate expressions from a file, one per line")
                .arg(
                    Arg::new("path")
                        .help("Path to the file of candidate expressions")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("amounts")
                .about("Validate monetary-value strings from a file, one per line")
                .arg(
                    Arg::new("path")
                        .help("Path to the file of candidate amounts")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            let format = check_matches.get_one::<String>("format").unwrap();
            handle_check_command(path, format);
        }
        Some(("amounts", amounts_matches)) => {
            let path = amounts_matches.get_one::<String>("path").unwrap();
            handle_amounts_command(path);
        }
        _ => unreachable!(),
    }
}

fn read_input(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the check command
fn handle_check_command(path: &str, format: &str) {
    let source = read_input(path);
    let verdicts = indexpr::check_lines(&source);

    match format {
        "json" => {
            let output = serde_json::to_string_pretty(&verdicts).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        "text" => {
            for verdict in &verdicts {
                if verdict.accepted {
                    println!("{} -> accepted", verdict.input);
                } else {
                    let reason = verdict.reason.as_deref().unwrap_or("unknown");
                    println!("{} -> rejected: {}", verdict.input, reason);
                }
            }
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}

/// Handle the amounts command
fn handle_amounts_command(path: &str) {
    let source = read_input(path);
    for line in source.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if indexpr::currency::is_valid_amount(line) {
            println!("{} -> valid", line);
        } else {
            println!("{} -> invalid", line);
        }
    }
}
