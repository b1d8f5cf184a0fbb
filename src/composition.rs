use crate::baselines::Baseline;
use crate::error::{FreqError, Result};
use crate::types::{AaCounts, FreqMap};
use polars::prelude::*;
use std::collections::{HashMap, HashSet};

/// Counts amino acid occurrences across a set of peptide sequences.
///
/// Every character of every peptide contributes one count to its own code.
/// Characters are not validated here; restriction to a baseline alphabet
/// happens later in [`compare`].
pub fn aa_counts<S: AsRef<str>>(peptides: &[S]) -> AaCounts {
    let mut counts = AaCounts::new();
    for peptide in peptides {
        for aa in peptide.as_ref().chars() {
            *counts.entry(aa).or_insert(0) += 1;
        }
    }
    counts
}

/// Forces the count mapping onto the baseline alphabet: codes missing from
/// the counts enter with a zero count, codes absent from the baseline are
/// dropped. The normalization total is computed after this step, so
/// off-alphabet codes never contribute to observed frequencies.
fn restrict_to_baseline(counts: &mut AaCounts, baseline: &FreqMap) {
    for &aa in baseline.keys() {
        counts.entry(aa).or_insert(0);
    }
    counts.retain(|aa, _| baseline.contains_key(aa));
}

/// Converts counts into frequencies (count / total).
///
/// # Errors
/// * Returns `FreqError::NoUsableData` when the total count is zero, which
///   covers both an empty peptide list and input whose codes were all
///   filtered out by baseline restriction
pub fn observed_frequencies(counts: &AaCounts) -> Result<FreqMap> {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return Err(FreqError::no_usable_data("total observed count is zero"));
    }

    Ok(counts
        .iter()
        .map(|(&aa, &count)| (aa, count as f64 / total as f64))
        .collect())
}

/// Computes log2(observed / baseline) over the union of both key sets.
///
/// A code whose fold change has no finite value maps to `None`: a zero
/// baseline frequency would be +inf and a zero observed frequency is -inf,
/// and neither is allowed to cross into the result table as a raw float.
pub fn log2_fold_changes(
    observed: &FreqMap,
    baseline: &FreqMap,
) -> HashMap<char, Option<f64>> {
    let all_aa: HashSet<char> = observed.keys().chain(baseline.keys()).copied().collect();

    all_aa
        .into_iter()
        .map(|aa| {
            let observed_freq = observed.get(&aa).copied().unwrap_or(0.0);
            let baseline_freq = baseline.get(&aa).copied().unwrap_or(0.0);
            let fold = if baseline_freq == 0.0 {
                f64::INFINITY
            } else {
                (observed_freq / baseline_freq).log2()
            };
            (aa, fold.is_finite().then_some(fold))
        })
        .collect()
}

/// Compares the amino acid composition of a peptide set against a baseline.
///
/// # Arguments
/// * `peptides` - Peptide sequences, already stripped of modification
///   annotations and flanking residue notation
/// * `baseline` - The frequency table defining the comparison universe
///
/// # Returns
/// * `Result<DataFrame>` - One row per baseline code, sorted by code, with
///   columns:
///   - "amino_acid": single-letter code
///   - "observed_count": occurrences across the peptide set
///   - "expected_count": baseline frequency x total, truncated to integer
///   - "observed_freq" / "baseline_freq": fractions of the respective totals
///   - "log2_fold_change": nullable; null marks a fold change with no finite
///     value (e.g. a code never observed)
///
/// # Errors
/// * Returns `FreqError::NoUsableData` if no counted residue falls inside the
///   baseline alphabet
/// * Returns `FreqError::DataError` if DataFrame creation fails
pub fn compare<S: AsRef<str>>(peptides: &[S], baseline: &Baseline) -> Result<DataFrame> {
    let mut counts = aa_counts(peptides);
    restrict_to_baseline(&mut counts, &baseline.freqs);

    let observed = observed_frequencies(&counts)?;
    let fold_changes = log2_fold_changes(&observed, &baseline.freqs);
    let total: u64 = counts.values().sum();

    let mut codes: Vec<char> = counts.keys().copied().collect();
    codes.sort_unstable();

    let mut amino_acids: Vec<String> = Vec::with_capacity(codes.len());
    let mut observed_counts: Vec<u64> = Vec::with_capacity(codes.len());
    let mut expected_counts: Vec<u64> = Vec::with_capacity(codes.len());
    let mut observed_freqs: Vec<f64> = Vec::with_capacity(codes.len());
    let mut baseline_freqs: Vec<f64> = Vec::with_capacity(codes.len());
    let mut folds: Vec<Option<f64>> = Vec::with_capacity(codes.len());

    for &aa in &codes {
        let baseline_freq = baseline.freqs.get(&aa).copied().unwrap_or(0.0);
        amino_acids.push(aa.to_string());
        observed_counts.push(counts[&aa]);
        expected_counts.push((baseline_freq * total as f64) as u64);
        observed_freqs.push(observed.get(&aa).copied().unwrap_or(0.0));
        baseline_freqs.push(baseline_freq);
        folds.push(fold_changes.get(&aa).copied().flatten());
    }

    let df = DataFrame::new(vec![
        Column::new("amino_acid".into(), amino_acids),
        Column::new("observed_count".into(), observed_counts),
        Column::new("expected_count".into(), expected_counts),
        Column::new("observed_freq".into(), observed_freqs),
        Column::new("baseline_freq".into(), baseline_freqs),
        Column::new("log2_fold_change".into(), folds),
    ])
    .map_err(|e| FreqError::DataError(e.to_string()))?;

    Ok(df)
}
