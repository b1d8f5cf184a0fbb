use aa_freq_rs::composition;
use aa_freq_rs::fasta;
use aa_freq_rs::types::AaCounts;

#[test]
fn test_read_fasta_concat() {
    let sequence = fasta::read_fasta_concat("tests/data/test1.fasta").unwrap();
    assert_eq!(sequence, "MKTAYIAKQRQISFVKSHFSMSILGVGGIF");

    // test file does not exist
    let result = fasta::read_fasta_concat("tests/data/nonexistent.fasta");
    assert!(result.is_err());
}

#[test]
fn test_read_fasta_concat_headers_only() {
    let sequence = fasta::read_fasta_concat("tests/data/empty.fasta").unwrap();
    assert_eq!(sequence, "");
}

#[test]
fn test_frequency_map() {
    let sequence = fasta::read_fasta_concat("tests/data/test1.fasta").unwrap();
    let counts = composition::aa_counts(&[sequence.as_str()]);
    assert_eq!(counts[&'M'], 2);
    assert_eq!(counts[&'G'], 3);

    let freqs = fasta::frequency_map(&counts);
    assert!((freqs[&'M'] - 2.0 / 30.0).abs() < 1e-9);

    let sum: f64 = freqs.values().sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn test_frequency_map_empty_counts() {
    let counts = AaCounts::new();
    assert!(fasta::frequency_map(&counts).is_empty());
}

#[test]
fn test_baseline_entry() {
    let counts = AaCounts::from([('A', 1), ('C', 3)]);
    let freqs = fasta::frequency_map(&counts);

    let entry = fasta::baseline_entry("toy", &freqs);
    assert_eq!(
        entry,
        "pub static TOY: Map<char, f64> = phf_map! {\n    'A' => 0.2500000,\n    'C' => 0.7500000,\n};\n"
    );
}

#[test]
fn test_baseline_entry_name_mangling() {
    let counts = AaCounts::from([('A', 2)]);
    let freqs = fasta::frequency_map(&counts);

    let entry = fasta::baseline_entry("e-coli", &freqs);
    assert!(entry.starts_with("pub static E_COLI: Map<char, f64> = phf_map! {"));
}
