use std::collections::HashMap;

/// Occurrence count per amino acid code
/// Keys are whatever characters occur in the input
pub type AaCounts = HashMap<char, u64>;

/// Frequency (fraction of the total count) per amino acid code
/// Values sum to ~1.0 whenever the mapping is non-empty
pub type FreqMap = HashMap<char, f64>;
