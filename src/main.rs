use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use delivery_report::{DEFAULT_OUTPUT_NAME, Error, ReportConfig};

/// Turn a tab-separated delivery manifest into a PDF grouped by delivery note and color.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Tab-separated manifest: code, description, document, size, quantity, color, transfer
    input: PathBuf,

    /// Where to write the PDF
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    output: PathBuf,

    /// TOML file overriding the report layout
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image shown in every page header (PNG or JPEG)
    #[arg(long)]
    logo: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), Error> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    if let Some(logo) = &args.logo {
        config.logo = Some(logo.clone());
    }
    delivery_report::generate_report(&args.input, &args.output, &config)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => {
            log::info!("Report written to {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error processing the file: {e}");
            ExitCode::FAILURE
        }
    }
}
