// Reads KTP fields from a JSON file of OCR text boxes

use clap::{Parser, ValueEnum};
use ktp_reader::{ExtractionRules, KtpData, KtpError, KtpReader};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Parser)]
#[command(name = "ktp-reader", version, about = "Extract KTP fields from OCR text boxes")]
struct Cli {
    /// JSON array of text items with their bounding vertices
    input: PathBuf,

    /// JSON file overriding matching tolerances and constant values
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Input is a full detector response whose first item covers the whole document
    #[arg(long)]
    raw: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

// Function to print a report in card reading order
fn print_report(data: &KtpData) {
    println!("\n===============================================");
    println!("              KTP EXTRACTION REPORT");
    println!("===============================================\n");

    for (key, value) in data.entries() {
        println!("  {:<14} {}", key, value);
    }
}

fn run(cli: Cli) -> Result<(), KtpError> {
    let rules = match &cli.rules {
        Some(path) => ExtractionRules::from_file(path)?,
        None => ExtractionRules::default(),
    };
    let reader = KtpReader::with_rules(rules);

    log::info!("Reading text items from {:?}", cli.input);
    let data = reader.read_file(&cli.input, cli.raw)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
        OutputFormat::Text => print_report(&data),
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error reading KTP: {}", err);
        std::process::exit(1);
    }
}
