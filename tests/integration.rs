//! Integration tests for numwords - realistic uses in text assembly.

use numwords::{ConversionMode, ConversionOptions, ConvertError, WordConverter};
use std::sync::Arc;
use std::thread;

// ============================================================================
// Cheque writing
// ============================================================================

#[test]
fn test_cheque_amount() {
    let words = WordConverter::with_options(ConversionOptions {
        include_zero_minor: false,
        ..ConversionOptions::default()
    });

    assert_eq!(
        words.convert_to_words("$1,250.00", None).unwrap(),
        "One Thousand, Two Hundred and Fifty Dollars"
    );
    assert_eq!(
        words.convert_to_words("$1,250.07", None).unwrap(),
        "One Thousand, Two Hundred and Fifty Dollars and Seven Cents"
    );
}

#[test]
fn test_invoice_lines() {
    let words = WordConverter::new();
    let lines = ["$19.99", "15%", "$0.5"];
    let spoken: Result<Vec<_>, _> = lines
        .iter()
        .map(|line| words.convert_to_words(*line, None))
        .collect();
    assert_eq!(
        spoken.unwrap(),
        vec![
            "Nineteen Dollars and Ninety-nine Cents",
            "Fifteen Percent",
            "Zero Dollars and Fifty Cents",
        ]
    );
}

// ============================================================================
// Failure is a value, not a panic
// ============================================================================

#[test]
fn test_failures_produce_no_phrase() {
    let words = WordConverter::new();
    let inputs = ["12", "twelve", "99999999999999999999", "$3"];
    let results: Vec<_> = inputs
        .iter()
        .map(|input| words.convert_to_words(*input, None))
        .collect();

    assert_eq!(results[0], Ok("Twelve".to_string()));
    assert!(matches!(results[1], Err(ConvertError::InvalidInput { .. })));
    assert!(matches!(results[2], Err(ConvertError::OutOfRange { .. })));
    assert_eq!(results[3], Ok("Three Dollars and Zero Cents".to_string()));
}

// ============================================================================
// Sharing one converter
// ============================================================================

#[test]
fn test_shared_converter_across_threads() {
    let words = Arc::new(WordConverter::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let words = Arc::clone(&words);
            thread::spawn(move || {
                let mode = if i % 2 == 0 {
                    ConversionMode::Currency
                } else {
                    ConversionMode::Automatic
                };
                (0..200)
                    .map(|n| words.convert_to_words(n, Some(mode)).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let phrases = handle.join().unwrap();
        assert_eq!(phrases.len(), 200);
        if i % 2 == 0 {
            assert!(phrases.iter().all(|p| p.ends_with("Cents")));
        } else {
            assert!(phrases.iter().all(|p| !p.contains("Dollar")));
        }
    }
    assert_eq!(words.mode(), ConversionMode::Automatic);
}

#[test]
fn test_capitalization_is_stable() {
    let words = WordConverter::new();
    for input in ["-2980.123", "$1235.506", "32.8°", "1,000,005"] {
        let phrase = words.convert_to_words(input, None).unwrap();
        let lower = WordConverter::with_options(ConversionOptions::default().with_capitalize(false))
            .convert_to_words(input, None)
            .unwrap();
        assert_eq!(phrase.to_lowercase(), lower.to_lowercase());
        assert!(phrase
            .split(|c: char| !c.is_ascii_alphabetic() && c != '-')
            .filter(|w| !w.is_empty() && *w != "and")
            .all(|w| w.starts_with(|c: char| c.is_ascii_uppercase())));
    }
}
