use numwords::{ConversionOptions, WordConverter};

#[test]
fn test_irregular_ordinals() {
    let words = WordConverter::new();
    assert_eq!(words.get_number_ordinal(1), "First");
    assert_eq!(words.get_number_ordinal(2), "Second");
    assert_eq!(words.get_number_ordinal(3), "Third");
    assert_eq!(words.get_number_ordinal(5), "Fifth");
    assert_eq!(words.get_number_ordinal(8), "Eighth");
    assert_eq!(words.get_number_ordinal(9), "Ninth");
    assert_eq!(words.get_number_ordinal(12), "Twelfth");
}

#[test]
fn test_compound_ordinals() {
    let words = WordConverter::new();
    assert_eq!(words.get_number_ordinal(21), "Twenty-first");
    assert_eq!(words.get_number_ordinal(123), "One Hundred and Twenty-third");
    assert_eq!(
        words.get_number_ordinal(1233),
        "One Thousand, Two Hundred and Thirty-third"
    );
}

#[test]
fn test_sign_is_ignored() {
    let words = WordConverter::new();
    assert_eq!(words.get_number_ordinal(-3), "Third");
    assert_eq!(words.get_number_ordinal(-40), "Fortieth");
    // i64::MIN has no positive i64 counterpart but still gets an ordinal.
    assert!(words
        .get_number_ordinal(i64::MIN)
        .starts_with("Nine Quintillion, "));
    assert!(words
        .get_number_ordinal(i64::MIN)
        .ends_with("Eight Hundred and Eighth"));
}

#[test]
fn test_powers_of_thousand() {
    let words = WordConverter::new();
    assert_eq!(words.get_number_ordinal(1000), "Thousandth");
    assert_eq!(words.get_number_ordinal(3000), "Three Thousandth");
    assert_eq!(words.get_number_ordinal(1_000_000_000), "Billionth");
}

#[test]
fn test_ordinal_without_capitalization() {
    let words = WordConverter::with_options(ConversionOptions::default().with_capitalize(false));
    assert_eq!(words.get_number_ordinal(87), "eighty-seventh");
    assert_eq!(words.get_number_ordinal(0), "zeroth");
}
