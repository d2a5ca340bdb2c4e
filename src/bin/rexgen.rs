//! Command-line interface for rexgen
//! This binary synthesizes a regular expression from example strings.
//!
//! Usage:
//!   rexgen generate --desired `<example>` [--match `<example>`]... [--not-match `<example>`]...
//!   rexgen generate --json                - Read a JSON request from stdin
//!   rexgen keys                           - List available smart syntax placeholders

use clap::{Arg, ArgAction, ArgMatches, Command};
use rexgen::synth::registry;
use rexgen::synth::request::{GenerateRequest, GenerateResponse};
use rexgen::synth::{synthesize, ExampleSet};
use std::io;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("rexgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for synthesizing regular expressions from example strings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Synthesize a regex from example strings")
                .arg(
                    Arg::new("desired")
                        .long("desired")
                        .short('d')
                        .help("The desired example the regex must generalize (smart syntax allowed)")
                        .required_unless_present("json"),
                )
                .arg(
                    Arg::new("match")
                        .long("match")
                        .short('m')
                        .action(ArgAction::Append)
                        .help("An example the regex should match (repeatable)"),
                )
                .arg(
                    Arg::new("not-match")
                        .long("not-match")
                        .short('n')
                        .action(ArgAction::Append)
                        .help("An example the regex should not match (repeatable)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .conflicts_with_all(["desired", "match", "not-match"])
                        .help("Read a JSON request ({desiredMatches, shouldMatch, shouldNotMatch}) from stdin"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(Command::new("keys").about("List available smart syntax placeholders"))
        .get_matches();

    match matches.subcommand() {
        Some(("generate", generate_matches)) => handle_generate_command(generate_matches),
        Some(("keys", _)) => handle_keys_command(),
        _ => unreachable!("subcommand is required"),
    }
}

fn handle_generate_command(matches: &ArgMatches) {
    let examples = if matches.get_flag("json") {
        let request: GenerateRequest = match serde_json::from_reader(io::stdin()) {
            Ok(request) => request,
            Err(err) => {
                eprintln!("Error: invalid JSON request: {}", err);
                process::exit(1);
            }
        };
        match request.into_example_set() {
            Ok(examples) => examples,
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        }
    } else {
        let desired = matches.get_one::<String>("desired").unwrap();
        let positives = collect_values(matches, "match");
        let negatives = collect_values(matches, "not-match");
        match ExampleSet::new(desired.clone(), positives, negatives) {
            Ok(examples) => examples,
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        }
    };

    let result = synthesize(&examples);
    let format = matches.get_one::<String>("format").unwrap();
    match format.as_str() {
        "json" => {
            let response = GenerateResponse::from(result);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{}", json),
                Err(err) => {
                    eprintln!("Error: failed to serialize response: {}", err);
                    process::exit(1);
                }
            }
        }
        "text" => {
            println!("{}", result.pattern);
            println!("{}", result.explanation);
        }
        other => {
            eprintln!("Error: unknown format '{}' (expected 'text' or 'json')", other);
            process::exit(1);
        }
    }
}

fn handle_keys_command() {
    println!("Available smart syntax placeholders:");
    for (key, definition) in registry::definitions() {
        println!("  {{{}}}  {}  /{}/", key, definition.description, definition.fragment);
    }
}

fn collect_values(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
