// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::fs;
use std::process;

use anyhow::{anyhow, Context, Result};
use tabscore::{EditorConfig, Section, Tuning};
use tracing::{debug, Level};

fn print_usage() {
    println!("TABSCORE - Tablature section tool");
    println!();
    println!("Usage: tabscore [OPTIONS] COMMAND");
    println!();
    println!("Commands:");
    println!("  render <FILE>      Render a section JSON file as ASCII tab");
    println!("  new                Print the JSON of a new, empty section");
    println!("  tunings            List available tunings");
    println!();
    println!("Options:");
    println!("  --config <FILE>    Load editor configuration from a YAML file");
    println!("  --tuning <NAME>    Tuning to use (default from config)");
    println!("  --verbose          Log debug output to stderr");
    println!("  --help             Show this help message");
}

/// Parsed command line
struct Options {
    config: Option<String>,
    tuning: Option<String>,
    verbose: bool,
    command: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        config: None,
        tuning: None,
        verbose: false,
        command: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config = Some(path.clone());
            }
            "--tuning" => {
                let name = iter
                    .next()
                    .ok_or_else(|| anyhow!("--tuning requires a tuning name"))?;
                options.tuning = Some(name.clone());
            }
            "--verbose" | "-v" => options.verbose = true,
            _ => options.command.push(arg.clone()),
        }
    }

    Ok(options)
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_tuning(config: &EditorConfig, name: Option<&str>) -> Result<Tuning> {
    match name {
        Some(name) => config.tuning(name),
        None => config.default_tuning(),
    }
}

fn render_file(path: &str, tuning: Tuning) -> Result<()> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read section file: {}", path))?;
    let section = Section::from_json_str(&json, tuning)
        .with_context(|| format!("Failed to load section from {}", path))?;
    debug!(columns = section.len(), "rendering section");
    print!("{}", section.to_text());
    Ok(())
}

fn list_tunings(config: &EditorConfig) {
    for name in config.tuning_names() {
        match config.tuning(&name) {
            Ok(tuning) => println!("{:<18} {}", name, tuning),
            Err(e) => println!("{:<18} <{}>", name, e),
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        println!("TABSCORE - Tablature section tool");
        println!("Run with --help for usage information");
        return Ok(());
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let options = parse_args(&args)?;
    init_logging(options.verbose);

    let config = match &options.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    match options.command.first().map(String::as_str) {
        Some("render") => {
            let Some(path) = options.command.get(1) else {
                eprintln!("Error: render requires a section file");
                process::exit(1);
            };
            let tuning = resolve_tuning(&config, options.tuning.as_deref())?;
            render_file(path, tuning)?;
        }
        Some("new") => {
            let tuning = resolve_tuning(&config, options.tuning.as_deref())?;
            let section = config.new_section_with(tuning);
            println!("{}", section.to_json_pretty());
        }
        Some("tunings") => {
            list_tunings(&config);
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            process::exit(1);
        }
        None => {
            eprintln!("Error: no command given");
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}
