#![forbid(unsafe_code)]

//! Command-line argument parsing for the counter demo.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
MVX Counter Demo — a view-model driven end to end

USAGE:
    mvx-demo-counter [OPTIONS]

OPTIONS:
    --steps=N      Number of increment dispatches (default: 3)
    --json         Print the final state snapshot as JSON
    --quiet        Do not echo property change notifications
    --help, -h     Show this help message
    --version, -V  Show version

Set RUST_LOG (e.g. RUST_LOG=mvx_runtime=debug) to see runtime tracing.
";

/// Parsed demo options.
#[derive(Debug, Clone)]
pub struct Config {
    pub steps: u32,
    pub json: bool,
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            steps: 3,
            json: false,
            quiet: false,
        }
    }
}

/// Parse `std::env::args`, exiting on `--help`/`--version`/bad input.
#[must_use]
pub fn parse() -> Config {
    let mut config = Config::default();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print!("{HELP_TEXT}");
                process::exit(0);
            }
            "--version" | "-V" => {
                println!("mvx-demo-counter {VERSION}");
                process::exit(0);
            }
            "--json" => config.json = true,
            "--quiet" => config.quiet = true,
            other => {
                if let Some(steps) = other.strip_prefix("--steps=") {
                    match steps.parse() {
                        Ok(n) => config.steps = n,
                        Err(_) => {
                            eprintln!("error: invalid --steps value: {steps}");
                            process::exit(2);
                        }
                    }
                } else {
                    eprintln!("error: unknown argument: {other}");
                    eprintln!("run with --help for usage");
                    process::exit(2);
                }
            }
        }
    }
    config
}
