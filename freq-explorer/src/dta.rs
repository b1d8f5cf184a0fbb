//! Minimal DtaSelect-filter reader and peptide sequence normalization.
//!
//! Only the Sequence column of the peptide rows is extracted; protein rows,
//! the preamble, and the trailing summary block are skipped.

use crate::ExplorerError;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Extracts the raw Sequence column of every peptide row in a
/// DtaSelect-filter file.
///
/// The peptide table starts at the header row beginning with "Unique"; a
/// subsequent row counts as a peptide row when its field count matches the
/// header and its FileName field looks like a spectrum reference
/// (file.scan.scan.charge). Returned sequences are still in flanked IP2
/// notation and may carry modification annotations.
///
/// # Errors
/// * Returns `ExplorerError::Io` for file reading issues
/// * Returns `ExplorerError::InvalidFilterFile` if no peptide header row or
///   no Sequence column is found
pub fn read_filter_file(path: &str) -> Result<Vec<String>, ExplorerError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut peptides: Vec<String> = Vec::new();
    let mut header: Option<(usize, usize)> = None;
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line?;

        let Some((n_fields, seq_idx)) = header else {
            if line.starts_with("Unique\t") {
                let fields: Vec<&str> = line.split('\t').collect();
                let seq_idx = fields.iter().position(|&f| f == "Sequence").ok_or_else(|| {
                    ExplorerError::InvalidFilterFile {
                        path: path.to_string(),
                        message: "peptide header has no Sequence column".to_string(),
                    }
                })?;
                header = Some((fields.len(), seq_idx));
            }
            continue;
        };

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() == n_fields && is_spectrum_ref(fields[1]) {
            peptides.push(fields[seq_idx].to_string());
        } else {
            skipped += 1;
        }
    }

    if header.is_none() {
        return Err(ExplorerError::InvalidFilterFile {
            path: path.to_string(),
            message: "no peptide header row found".to_string(),
        });
    }

    debug!("{}: skipped {} non-peptide rows", path, skipped);
    Ok(peptides)
}

/// A FileName field of the form file.scan.scan.charge.
fn is_spectrum_ref(field: &str) -> bool {
    field.matches('.').count() >= 2
}

/// Converts IP2 flanked notation ("K.PEPTIDE.R") to the bare peptide by
/// dropping everything up to the first '.' and from the last '.' on. A
/// sequence without both flank markers is returned unchanged, so already-bare
/// peptides pass through.
pub fn convert_ip2(sequence: &str) -> &str {
    match (sequence.find('.'), sequence.rfind('.')) {
        (Some(first), Some(last)) if first < last => &sequence[first + 1..last],
        _ => sequence,
    }
}

/// Strips modification annotations from a peptide sequence.
///
/// Parenthesized and bracketed inserts (static/differential mass shifts like
/// "(15.9949)") are removed, every remaining non-letter character is dropped,
/// and the surviving residues are uppercased.
pub fn strip_mods(sequence: &str) -> String {
    let mut stripped = String::with_capacity(sequence.len());
    let mut depth = 0u32;

    for c in sequence.chars() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            c if depth == 0 && c.is_ascii_alphabetic() => stripped.push(c.to_ascii_uppercase()),
            _ => {}
        }
    }

    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_filter_file() {
        let peptides = read_filter_file("tests/data/DtaSelect-filter.txt").unwrap();
        assert_eq!(
            peptides,
            vec![
                "K.SYELPDGQVITIGNER.F",
                "R.AVFPSIVGRPR.H",
                "K.LAM(15.9949)QEFMILPVGAANFR.E",
            ]
        );

        // file does not exist
        let result = read_filter_file("tests/data/nonexistent.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_read_filter_file_without_header() {
        let result = read_filter_file("tests/data/no_header.txt");
        assert!(matches!(
            result,
            Err(ExplorerError::InvalidFilterFile { .. })
        ));
    }

    #[test]
    fn test_convert_ip2() {
        assert_eq!(convert_ip2("K.SYELPDGQVITIGNER.F"), "SYELPDGQVITIGNER");
        assert_eq!(convert_ip2("-.MADEEK.L"), "MADEEK");
        // interior dots inside a modification stay put
        assert_eq!(
            convert_ip2("K.LAM(15.9949)QEFMILPVGAANFR.E"),
            "LAM(15.9949)QEFMILPVGAANFR"
        );
        // bare peptides pass through unchanged
        assert_eq!(convert_ip2("SYELPDGQVITIGNER"), "SYELPDGQVITIGNER");
    }

    #[test]
    fn test_strip_mods() {
        assert_eq!(strip_mods("LAM(15.9949)QEFMILPVGAANFR"), "LAMQEFMILPVGAANFR");
        assert_eq!(strip_mods("PEPT[79.9663]IDE"), "PEPTIDE");
        assert_eq!(strip_mods("C*GHK"), "CGHK");
        assert_eq!(strip_mods("peptide"), "PEPTIDE");
        assert_eq!(strip_mods(""), "");
    }
}
