//! Ordinal tests from ordinals.tsv
//!
//! The fixture is a two-column TSV (number, expected ordinal) stored gzipped.

use flate2::read::GzDecoder;
use numwords::to_ordinal;
use std::io::Read;

#[derive(Debug)]
struct OrdinalTestCase {
    number: i64,
    expected: String,
}

fn load_test_cases() -> Vec<OrdinalTestCase> {
    let compressed = include_bytes!("fixtures/ordinals.tsv.gz");
    let mut decoder = GzDecoder::new(&compressed[..]);
    let mut tsv_data = String::new();
    decoder.read_to_string(&mut tsv_data).unwrap();

    // First line is the header
    tsv_data
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (number, expected) = line.split_once('\t').unwrap();
            OrdinalTestCase {
                number: number.parse().unwrap(),
                expected: expected.to_string(),
            }
        })
        .collect()
}

#[test]
fn test_ordinal_fixtures() {
    let cases = load_test_cases();
    assert!(cases.len() > 40);

    for case in &cases {
        assert_eq!(
            to_ordinal(case.number),
            case.expected,
            "ordinal of {}",
            case.number
        );
    }
}
