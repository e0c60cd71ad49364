//! TwiML DSL generator
//!
//! Usage: `twiml-codegen <DATAFILE.json> [OUTPUT.rs]`

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use twilio_blocks::codegen::{self, CodegenOptions};
use twilio_blocks::utils::logging::{LoggingConfig, init_logger};

/// Generate the nested-block TwiML layer from a datafile
#[derive(Debug, Parser)]
#[command(name = "twiml-codegen", version, about)]
struct Args {
    /// JSON datafile describing classes, constructors and children
    datafile: PathBuf,

    /// Where to write the generated source; stdout when omitted
    output: Option<PathBuf>,

    /// Module the verb and builder types are imported from
    #[arg(long, default_value = "super::verbs")]
    verbs_path: String,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "TWIML_CODEGEN_LOG", default_value = "warn")]
    log_level: String,
}

fn run(args: Args) -> anyhow::Result<()> {
    let options = CodegenOptions {
        verbs_path: args.verbs_path,
        source_name: Some(args.datafile.display().to_string()),
    };

    let generated = codegen::generate_file(&args.datafile, args.output.as_deref(), &options)
        .with_context(|| format!("failed to generate from {}", args.datafile.display()))?;

    info!(
        missing = generated.missing.len(),
        "generated {} bytes",
        generated.source.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let logging = LoggingConfig {
        level: args.log_level.clone(),
        ..LoggingConfig::default()
    };
    if let Err(e) = init_logger(&logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
