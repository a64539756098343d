use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use converter::ids::RandomIds;
use converter::pipeline::{self, ConvertOptions, ConvertOutcome};

/// Convert a design-tool modal node tree into a no-code Modal block.
#[derive(Parser, Debug)]
#[command(name = "converter", version, about)]
struct Args {
    /// Design node tree as JSON.
    input: PathBuf,

    /// Where to write the converted block record.
    #[arg(short, long, default_value = "nocode_converted.json")]
    output: PathBuf,

    /// Seed the id generator for reproducible block ids.
    #[arg(long)]
    seed: Option<u64>,

    /// Write compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let outcome = match args.seed {
        Some(seed) => pipeline::convert(&json, &mut RandomIds::seeded(seed)),
        None => pipeline::convert(&json, &mut RandomIds::new()),
    };

    match outcome {
        ConvertOutcome::NotModal => {
            println!("Node is not a modal.");
            Ok(ExitCode::SUCCESS)
        }
        ConvertOutcome::Failed(errors) => {
            for e in &errors {
                eprintln!("Transformation failed: {}", e.message);
            }
            Ok(ExitCode::FAILURE)
        }
        ConvertOutcome::Converted(converted) => {
            let options = ConvertOptions {
                pretty: !args.compact,
            };
            let rendered = pipeline::render(&converted.block, &options)?;
            std::fs::write(&args.output, rendered)
                .with_context(|| format!("failed to write {}", args.output.display()))?;
            println!(
                "Modal transformation written to {}",
                args.output.display()
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
