use aa_freq_rs::baselines::{self, Baseline};
use aa_freq_rs::composition;
use clap::Parser;
use log::info;
use polars::prelude::*;
use std::fs;
use std::fs::File;
use std::path::Path;

mod dta;

#[derive(thiserror::Error, Debug)]
pub enum ExplorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("No result files supplied")]
    NoInput,

    #[error("Unknown baseline '{name}', available: {available}")]
    UnknownBaseline { name: String, available: String },

    #[error("Invalid filter file {path}: {message}")]
    InvalidFilterFile { path: String, message: String },

    #[error("Invalid baseline file {path}: {message}")]
    InvalidBaselineFile { path: String, message: String },

    #[error(transparent)]
    Freq(#[from] aa_freq_rs::error::FreqError),
}

#[derive(Parser)]
#[command(
    name = "freq-explorer",
    about = "Compares the amino acid composition of peptide identification results against a baseline proteome frequency table",
    long_about = "A tool for exploring amino acid usage in proteomics search results. \
                  It reads DtaSelect-filter files, strips modification annotations from the \
                  identified peptides, counts amino acid occurrences, and reports observed vs \
                  expected frequencies with a per-residue log2 fold change.",
    version,
    after_help = "Example usage:\n    \
                  freq-explorer DtaSelect-filter.txt --baseline human\n    \
                  freq-explorer run1.txt run2.txt --baseline yeast --output results.csv",
    color = clap::ColorChoice::Always
)]
#[derive(Debug)]
struct Args {
    /// Paths to DtaSelect-filter.txt result files
    /// Peptides from every file are pooled before counting
    #[arg(value_name = "FILTER_FILE")]
    filter_files: Vec<String>,

    /// Built-in baseline frequency table to compare against
    /// (see --list-baselines for the available names)
    #[arg(long, default_value = "human")]
    baseline: String,

    /// JSON file holding a custom baseline table, overrides --baseline
    /// Format: {"name": "...", "freqs": {"A": 0.07, ...}}
    #[arg(long, value_name = "JSON_FILE")]
    baseline_file: Option<String>,

    /// Optional path for writing the comparison table as CSV
    #[arg(long, value_name = "CSV_FILE")]
    output: Option<String>,

    /// List the built-in baseline tables and exit
    #[arg(long)]
    list_baselines: bool,
}

fn load_baseline(args: &Args) -> Result<Baseline, ExplorerError> {
    if let Some(path) = &args.baseline_file {
        let contents = fs::read_to_string(path)?;
        return serde_json::from_str(&contents).map_err(|e| ExplorerError::InvalidBaselineFile {
            path: path.clone(),
            message: e.to_string(),
        });
    }

    baselines::get(&args.baseline).ok_or_else(|| ExplorerError::UnknownBaseline {
        name: args.baseline.clone(),
        available: baselines::names().join(", "),
    })
}

/// Pools normalized peptide sequences from every supplied filter file.
fn collect_peptides(filter_files: &[String]) -> Result<Vec<String>, ExplorerError> {
    let mut peptides: Vec<String> = Vec::new();

    for path in filter_files {
        let raw = dta::read_filter_file(path)?;
        info!("{}: {} peptide rows", path, raw.len());
        peptides.extend(raw.iter().map(|seq| dta::strip_mods(dta::convert_ip2(seq))));
    }

    Ok(peptides)
}

fn main() -> Result<(), ExplorerError> {
    env_logger::init();

    let args = Args::parse();

    if args.list_baselines {
        for name in baselines::names() {
            println!("{}", name);
        }
        return Ok(());
    }

    if args.filter_files.is_empty() {
        return Err(ExplorerError::NoInput);
    }

    let baseline = load_baseline(&args)?;
    let peptides = collect_peptides(&args.filter_files)?;
    info!(
        "{} peptides pooled from {} files, comparing against '{}'",
        peptides.len(),
        args.filter_files.len(),
        baseline.name
    );

    // one row per amino acid, at most a couple dozen: show the table whole
    std::env::set_var("POLARS_FMT_MAX_ROWS", "32");

    let mut df = composition::compare(&peptides, &baseline)?;
    println!("{}", df);

    if let Some(output) = &args.output {
        if let Some(parent) = Path::new(output).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = File::create(output)?;
        CsvWriter::new(&mut file).finish(&mut df)?;
        info!("comparison table written to {}", output);
    }

    Ok(())
}
