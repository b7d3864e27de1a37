use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use pptx2pdf::config::ConvertOptions;
use pptx2pdf::convert::Converter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pptx2pdf",
    version,
    about = "Convert PPTX to PDF using LibreOffice",
    after_help = "Supported conversions:\n  - PPTX to PDF"
)]
struct Cli {
    /// Input file path (.pptx)
    #[arg(short, long)]
    input: PathBuf,

    /// Output PDF file path (default: input with .pdf extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format hint; only pdf is produced
    #[arg(short, long)]
    format: Option<String>,

    /// Log converter probing and invocations
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version go to stdout and exit 0.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            err.print().ok();
            process::exit(1);
        }
    };

    init_logging(cli.verbose);

    if let Err(err) = run(cli, ConvertOptions::default()) {
        eprintln!("{}", error_message(&err));
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Line printed on stderr before exiting with status 1.
fn error_message(err: &anyhow::Error) -> String {
    format!("Error: {err:#}")
}

fn run(cli: Cli, options: ConvertOptions) -> Result<()> {
    let request = pptx2pdf::resolve(&cli.input, cli.output.as_deref(), cli.format.as_deref())?;

    tracing::debug!(
        input = %request.input().display(),
        output = %request.output().display(),
        "resolved paths"
    );

    let written = Converter::new(options)
        .convert(&request)
        .with_context(|| format!("converting {:?}", cli.input))?;

    println!(
        "Successfully converted {} to {}",
        cli.input.display(),
        written.display()
    );
    Ok(())
}
