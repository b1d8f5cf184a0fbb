use crate::types::FreqMap;
use phf::{phf_map, Map};
use serde::{Deserialize, Serialize};

/// Built-in proteome frequency tables, generated offline by `baseline-gen`
/// from UniProt reference proteome FASTA files. Frequencies are truncated to
/// 7 decimal digits, so each table sums to 1.0 only approximately.
pub static HUMAN: Map<char, f64> = phf_map! {
    'A' => 0.0701607,
    'C' => 0.0229856,
    'D' => 0.0473227,
    'E' => 0.0709835,
    'F' => 0.0365337,
    'G' => 0.0657035,
    'H' => 0.0262641,
    'I' => 0.0433147,
    'K' => 0.0572823,
    'L' => 0.0996109,
    'M' => 0.0213092,
    'N' => 0.0358510,
    'P' => 0.0631232,
    'Q' => 0.0476505,
    'R' => 0.0564477,
    'S' => 0.0832016,
    'T' => 0.0535511,
    'V' => 0.0598617,
    'W' => 0.0121987,
    'Y' => 0.0266435,
};

pub static MOUSE: Map<char, f64> = phf_map! {
    'A' => 0.0684727,
    'C' => 0.0230192,
    'D' => 0.0470657,
    'E' => 0.0702559,
    'F' => 0.0371361,
    'G' => 0.0649736,
    'H' => 0.0260977,
    'I' => 0.0439498,
    'K' => 0.0570319,
    'L' => 0.0993816,
    'M' => 0.0221892,
    'N' => 0.0353997,
    'P' => 0.0619173,
    'Q' => 0.0465309,
    'R' => 0.0561101,
    'S' => 0.0840898,
    'T' => 0.0540066,
    'V' => 0.0632366,
    'W' => 0.0122243,
    'Y' => 0.0269113,
};

pub static YEAST: Map<char, f64> = phf_map! {
    'A' => 0.0548702,
    'C' => 0.0131426,
    'D' => 0.0578371,
    'E' => 0.0648807,
    'F' => 0.0449623,
    'G' => 0.0494990,
    'H' => 0.0217606,
    'I' => 0.0655297,
    'K' => 0.0728398,
    'L' => 0.0957381,
    'M' => 0.0208303,
    'N' => 0.0614541,
    'P' => 0.0438100,
    'Q' => 0.0393442,
    'R' => 0.0444481,
    'S' => 0.0899205,
    'T' => 0.0591257,
    'V' => 0.0557095,
    'W' => 0.0104303,
    'Y' => 0.0338672,
};

pub static ECOLI: Map<char, f64> = phf_map! {
    'A' => 0.0950301,
    'C' => 0.0116451,
    'D' => 0.0514520,
    'E' => 0.0576323,
    'F' => 0.0389199,
    'G' => 0.0737107,
    'H' => 0.0227107,
    'I' => 0.0601024,
    'K' => 0.0440699,
    'L' => 0.1068410,
    'M' => 0.0282398,
    'N' => 0.0394255,
    'P' => 0.0442106,
    'Q' => 0.0443239,
    'R' => 0.0553574,
    'S' => 0.0579862,
    'T' => 0.0540883,
    'V' => 0.0705480,
    'W' => 0.0152858,
    'Y' => 0.0284204,
};

/// Registry of the built-in baselines, keyed by selection name
pub static BASELINES: Map<&'static str, &'static Map<char, f64>> = phf_map! {
    "human" => &HUMAN,
    "mouse" => &MOUSE,
    "yeast" => &YEAST,
    "ecoli" => &ECOLI,
};

/// A named amino acid frequency table.
///
/// The key set of `freqs` defines the universe of codes a comparison reports
/// on: observed codes outside it are discarded, codes missing from the
/// observation are reported with a zero count. Immutable once constructed and
/// safe to share across any number of comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Baseline {
    pub name: String,
    pub freqs: FreqMap,
}

impl Baseline {
    pub fn new(name: impl Into<String>, freqs: FreqMap) -> Self {
        Baseline {
            name: name.into(),
            freqs,
        }
    }

    fn from_static(name: &str, table: &Map<char, f64>) -> Self {
        Baseline {
            name: name.to_string(),
            freqs: table.entries().map(|(&aa, &freq)| (aa, freq)).collect(),
        }
    }
}

/// Looks up a built-in baseline table by name.
pub fn get(name: &str) -> Option<Baseline> {
    BASELINES
        .get(name)
        .map(|&table| Baseline::from_static(name, table))
}

/// Names of the built-in baselines, sorted for stable display.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BASELINES.keys().copied().collect();
    names.sort_unstable();
    names
}
