use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::debug;

use legalform::batch::{process, read_inputs, write_json_lines};
use legalform::cli::Cli;
use legalform::models::OutputRecord;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionaries = cli.dictionary_sources().load()?;
    debug!(
        "Using {} legal forms and {} aliases",
        dictionaries.legal_forms.len(),
        dictionaries.aliases.len()
    );

    let inputs = read_inputs(cli.command.inputs())?;
    let result = process(&cli.command.task(), &dictionaries, &inputs);

    write_output(cli.output.as_deref(), &result.records)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn write_output(output_file: Option<&Path>, records: &[OutputRecord]) -> Result<()> {
    match output_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {:?}", path))?;
            write_json_lines(BufWriter::new(file), records)
        }
        None => {
            let stdout = io::stdout();
            write_json_lines(BufWriter::new(stdout.lock()), records)
        }
    }
}
