//! Integration tests for money parsing and serialization

use core_kernel::{Currency, Money, MoneyError};

#[test]
fn test_serde_round_trip() {
    let money = Money::from_minor(120_000, Currency::USD);
    let json = serde_json::to_string(&money).unwrap();
    let back: Money = serde_json::from_str(&json).unwrap();
    assert_eq!(money, back);
}

#[test]
fn test_form_style_inputs() {
    // The shapes a payment form actually submits
    for (input, expected_minor) in [
        ("1000.00", 100_000),
        ("950", 95_000),
        ("1500.5", 150_050),
        (" 800.25 ", 80_025),
    ] {
        let money = Money::parse(input, Currency::USD).unwrap();
        assert_eq!(money.minor_units(), expected_minor, "input {input:?}");
    }
}

#[test]
fn test_rejected_inputs() {
    for input in ["", "abc", "$1000", "1 000", "10.00.00", "-1.00"] {
        assert!(
            Money::parse(input, Currency::USD).is_err(),
            "input {input:?} should be rejected"
        );
    }
}

#[test]
fn test_sub_cent_inputs_rejected() {
    assert_eq!(
        Money::parse("19.999", Currency::USD),
        Err(MoneyError::PrecisionLoss("19.999".to_string()))
    );
}
