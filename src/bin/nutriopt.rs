use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use nutriopt::application::payload::{read_request, PayloadError, ResponsePayload};
use nutriopt::logging::LoggingConfig;
use nutriopt::{GoodLpSolver, NutritionOptimizer};

#[derive(Parser)]
#[command(name = "nutriopt", about = "Optimize food intake under nutrient constraints")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a request and print the result
    Solve {
        /// Request JSON file; reads stdin when omitted or `-`
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Validate a request and build its model without solving
    Validate {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn open_input(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn Read>> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

fn print_json(value: &impl serde::Serialize, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let optimizer = NutritionOptimizer::new(Arc::new(GoodLpSolver::new()));

    match &cli.command {
        Command::Solve { input } => {
            let response = match read_request(open_input(input.as_ref())?) {
                Ok(request) => match optimizer.optimize(request) {
                    Ok(result) => ResponsePayload::from(result),
                    Err(e) => {
                        print_json(&ResponsePayload::error(&e), cli.pretty)?;
                        return Ok(false);
                    }
                },
                Err(PayloadError::Io(e)) => return Err(e).context("failed to read request"),
                Err(e) => {
                    print_json(&ResponsePayload::error(&e), cli.pretty)?;
                    return Ok(false);
                }
            };
            print_json(&response, cli.pretty)?;
            Ok(true)
        }
        Command::Validate { input } => {
            let prepared = read_request(open_input(input.as_ref())?)
                .map_err(|e| e.to_string())
                .and_then(|request| optimizer.prepare(request).map_err(|e| e.to_string()));

            let (valid, report) = match prepared {
                Ok(problem) => (
                    true,
                    serde_json::json!({
                        "valid": true,
                        "variables": problem.num_variables(),
                        "constraints": problem.num_constraints(),
                        "objective": problem.objective.name,
                    }),
                ),
                Err(message) => (
                    false,
                    serde_json::json!({ "valid": false, "message": message }),
                ),
            };
            print_json(&report, cli.pretty)?;
            Ok(valid)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().init() {
        eprintln!("failed to initialize logging: {}", e);
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
