//! Command-line interface for retrip
//! This binary parses an ECMAScript file, regenerates it under each requested
//! configuration, and either prints the regenerated blocks or checks them.
//!
//! Usage:
//!   retrip `<path>` [--config `<names>`] [--format `<format>`]   - Run a round-trip suite
//!   retrip --list-configs                                      - List all available configurations

use clap::{Arg, ArgAction, Command};

use retrip::retrip::config::ConfigRegistry;
use retrip::retrip::processor::{process_file, ProcessingSpec};
use retrip::retrip::runner::Runner;

fn main() {
    let matches = Command::new("retrip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for checking ECMAScript parse/regenerate round trips")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the source file")
                .required_unless_present("list-configs")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Comma-separated configuration names (e.g., 'loc,raw')")
                .default_value("loc,raw"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: generate-text; also check-text, check-json, generate-json, ast-json)")
                .default_value("auto"),
        )
        .arg(
            Arg::new("configs-file")
                .long("configs-file")
                .help("YAML file with additional configurations"),
        )
        .arg(
            Arg::new("list-configs")
                .long("list-configs")
                .help("List available configurations")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut registry = ConfigRegistry::with_defaults();
    if let Some(path) = matches.get_one::<String>("configs-file") {
        if let Err(e) = registry.merge_yaml_file(path) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
    let runner = Runner::with_registry(registry);

    if matches.get_flag("list-configs") {
        handle_list_configs_command(&runner);
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing configs");
    let config = matches.get_one::<String>("config").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    handle_run_command(&runner, path, config, format);
}

/// Handle a round-trip run
fn handle_run_command(runner: &Runner, path: &str, config: &str, format: &str) {
    let format = if format == "auto" { "generate-text" } else { format };
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Execution error: {}", e);
        std::process::exit(1);
    });

    let configs: Vec<String> = config
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    if configs.is_empty() {
        eprintln!("Execution error: no configuration names given");
        std::process::exit(1);
    }

    let processed = process_file(path, &spec, runner, &configs).unwrap_or_else(|e| {
        eprintln!("Execution error: {}", e);
        eprintln!("\nAvailable configurations:");
        for config in runner.registry().list_all() {
            eprintln!("  {} - {}", config.name, config.description);
        }
        std::process::exit(1);
    });

    print!("{}", processed.output);
    if !processed.ok {
        std::process::exit(1);
    }
}

/// Handle the list-configs command
fn handle_list_configs_command(runner: &Runner) {
    println!("Available configurations:\n");
    for config in runner.registry().list_all() {
        println!("  {}", config.name);
        println!("    {}", config.description);
        println!();
    }
}
