use numwords::DateField;

#[test]
fn test_letters_round_trip() {
    for ch in "dDjlNSwzWFmMntLoYyaAgGhHis".chars() {
        let field = DateField::from_letter(ch).unwrap();
        assert_eq!(field.letter(), ch);
    }
    assert_eq!(DateField::from_letter('x'), None);
}

#[test]
fn test_textual_fields() {
    assert!(DateField::MonthFull.is_textual());
    assert!(DateField::AmPmUpper.is_textual());
    assert!(!DateField::Year4.is_textual());
    assert!(!DateField::Minute2.is_textual());
}
