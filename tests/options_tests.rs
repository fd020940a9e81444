use numwords::{ConversionMode, ConversionOptions, Lexicon, WordConverter};

#[test]
fn test_default_options() {
    let opts = ConversionOptions::default();
    assert_eq!(opts.mode, ConversionMode::Automatic);
    assert_eq!(opts.hyphen, "-");
    assert_eq!(opts.conjunction, "and");
    assert_eq!(opts.negative, "negative ");
    assert!(opts.capitalize);
    assert!(opts.include_zero_major);
    assert!(opts.include_zero_minor);
}

#[test]
fn test_mode_helpers() {
    assert!(ConversionMode::Currency.is_currency());
    assert!(!ConversionMode::default().is_currency());
    let opts = ConversionOptions::default().with_mode(ConversionMode::Currency);
    assert_eq!(WordConverter::with_options(opts).mode(), ConversionMode::Currency);
}

#[test]
fn test_custom_words() {
    let mut words = WordConverter::new();
    words.set_options(ConversionOptions {
        negative: "minus ".to_string(),
        decimal: "dot".to_string(),
        conjunction: "plus".to_string(),
        ..ConversionOptions::default()
    });
    assert_eq!(
        words.convert_to_words(-101.5, None).unwrap(),
        "Minus One Hundred plus One Dot Five"
    );
}

#[test]
fn test_options_mut_applies_to_next_call() {
    let mut words = WordConverter::new();
    assert_eq!(words.convert_to_words(21, None).unwrap(), "Twenty-one");
    words.options_mut().hyphen = " ".to_string();
    assert_eq!(words.convert_to_words(21, None).unwrap(), "Twenty One");
    assert_eq!(words.options().hyphen, " ");
}

#[test]
fn test_custom_lexicon() {
    let mut small = Lexicon::english().small;
    small[0] = "nought";
    let words = WordConverter::new().with_lexicon(Lexicon {
        small,
        ..Lexicon::english()
    });
    assert_eq!(words.lexicon().small[0], "nought");
    assert_eq!(words.convert_to_words(0, None).unwrap(), "Nought");
    assert_eq!(words.convert_to_words("0.05", None).unwrap(), "Nought Point Nought Five");
    assert_eq!(words.convert_to_words(1_000_020, None).unwrap(), "One Million and Twenty");
}
