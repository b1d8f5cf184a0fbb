//! Amino acid composition analysis of peptide identification results in Rust

pub mod baselines;
pub mod composition;
pub mod error;
pub mod fasta;
pub mod types;
