//! Offline baseline table generator.
//!
//! Reads every .fasta reference proteome in a directory and prints one
//! `phf_map!` entry per file, named after the file stem, ready to paste into
//! the library's baseline registry. Run once per baseline addition, never as
//! part of a comparison.

use aa_freq_rs::{composition, error::FreqError, fasta};
use clap::Parser;
use log::info;
use std::fs;

#[derive(Parser)]
#[command(
    name = "baseline-gen",
    about = "Derives baseline amino acid frequency tables from FASTA reference proteomes",
    version,
    after_help = "Example usage:\n    baseline-gen fastas/ >> ../src/baselines.rs"
)]
#[derive(Debug)]
struct Args {
    /// Directory containing .fasta reference proteome files
    #[arg(value_name = "FASTA_DIR", default_value = "fastas")]
    fasta_dir: String,
}

fn main() -> Result<(), FreqError> {
    env_logger::init();

    let args = Args::parse();

    let mut paths: Vec<_> = fs::read_dir(&args.fasta_dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "fasta"))
        .collect();
    paths.sort();

    for path in paths {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("baseline");

        let sequence = fasta::read_fasta_concat(&path.to_string_lossy())?;
        let counts = composition::aa_counts(&[sequence.as_str()]);
        let freqs = fasta::frequency_map(&counts);
        info!("{}: {} residues, {} codes", path.display(), sequence.len(), freqs.len());

        println!("{}", fasta::baseline_entry(name, &freqs));
    }

    Ok(())
}
