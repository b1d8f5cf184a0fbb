use crate::error::Result;
use crate::types::{AaCounts, FreqMap};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Reads a FASTA reference proteome and concatenates every sequence line
/// into a single string.
///
/// Header lines (starting with '>') and blank lines are discarded; the rest
/// are trimmed and appended in file order. A file holding no sequence lines
/// yields an empty string.
///
/// # Errors
/// * Returns `std::io::Error` for file reading issues
pub fn read_fasta_concat(filename: &str) -> Result<String> {
    let file = File::open(filename)?;
    let reader = BufReader::new(file);

    let mut sequence = String::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.starts_with('>') || line.is_empty() {
            continue;
        }
        sequence.push_str(line);
    }

    Ok(sequence)
}

/// Converts counts into frequencies (count / total).
///
/// Builder-side counterpart of the comparison normalization: an empty count
/// mapping yields an empty frequency mapping instead of an error, so a blank
/// reference file still produces a well-formed (empty) table entry.
pub fn frequency_map(counts: &AaCounts) -> FreqMap {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return FreqMap::new();
    }

    counts
        .iter()
        .map(|(&aa, &count)| (aa, count as f64 / total as f64))
        .collect()
}

/// Renders a frequency mapping as a `phf_map!` literal ready to paste into
/// `baselines.rs`, keys sorted, frequencies at 7 decimal digits.
pub fn baseline_entry(name: &str, freqs: &FreqMap) -> String {
    let mut codes: Vec<char> = freqs.keys().copied().collect();
    codes.sort_unstable();

    let ident = name.replace('-', "_").to_uppercase();
    let mut entry = format!("pub static {}: Map<char, f64> = phf_map! {{\n", ident);
    for aa in codes {
        entry.push_str(&format!("    {:?} => {:.7},\n", aa, freqs[&aa]));
    }
    entry.push_str("};\n");

    entry
}
