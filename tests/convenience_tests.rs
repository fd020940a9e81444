use numwords::{to_ordinal, to_words};

#[test]
fn test_to_words_convenience() {
    assert_eq!(to_words(1233).unwrap(), "One Thousand, Two Hundred and Thirty-three");
    assert_eq!(to_words("$1.506").unwrap(), "One Dollar and Fifty-one Cents");
}

#[test]
fn test_to_ordinal_convenience() {
    assert_eq!(to_ordinal(452_013), "Four Hundred and Fifty-two Thousand and Thirteenth");
}

#[test]
fn test_to_words_invalid() {
    assert!(to_words("one").is_err());
}

#[cfg(feature = "chrono")]
#[test]
fn test_date_to_words_convenience() {
    let result = numwords::date_to_words("2012-03-15", "F jS").unwrap();
    assert_eq!(result, "March Fifteenth");
}
