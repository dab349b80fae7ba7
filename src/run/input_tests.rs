#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_plain() {
    assert_eq!(parse_amount("1000").unwrap(), dec!(1000));
    assert_eq!(parse_amount("19.99").unwrap(), dec!(19.99));
}

#[test]
fn test_parse_amount_currency_formatting() {
    assert_eq!(parse_amount("$1,250.00").unwrap(), dec!(1250));
    assert_eq!(parse_amount("  $300 ").unwrap(), dec!(300));
}

#[test]
fn test_parse_amount_negative_passes_through() {
    assert_eq!(parse_amount("-5").unwrap(), dec!(-5));
}

#[test]
fn test_parse_amount_empty() {
    assert!(parse_amount("").is_err());
    assert!(parse_amount(" $ ").is_err());
}

#[test]
fn test_parse_amount_garbage() {
    let err = parse_amount("lots").unwrap_err();
    assert!(err.to_string().contains("'lots'"));
}

// ── parse_budget / parse_days ─────────────────────────────────

#[test]
fn test_parse_budget_rejects_non_positive() {
    assert!(parse_budget("0").is_err());
    assert!(parse_budget("-5").is_err());
    assert_eq!(parse_budget("0.01").unwrap(), dec!(0.01));
}

#[test]
fn test_parse_budget_rejects_above_limit() {
    assert!(parse_budget("1,000,000,000,000,000").is_ok());
    let err = parse_budget("1,000,000,000,000,000.01").unwrap_err();
    assert!(err.to_string().contains("must not exceed"));
}

#[test]
fn test_parse_days() {
    assert_eq!(parse_days("5").unwrap(), 5);
    assert_eq!(parse_days(" 14\n").unwrap(), 14);
}

#[test]
fn test_parse_days_rejects_zero_and_fractions() {
    assert!(parse_days("0").is_err());
    assert!(parse_days("2.5").is_err());
    assert!(parse_days("-3").is_err());
}

// ── parse_assignment ──────────────────────────────────────────

#[test]
fn test_parse_assignment() {
    assert_eq!(
        parse_assignment("food=300").unwrap(),
        (Category::Food, dec!(300))
    );
    assert_eq!(
        parse_assignment("Lodging=$1,200").unwrap(),
        (Category::Accommodation, dec!(1200))
    );
}

#[test]
fn test_parse_assignment_missing_equals() {
    assert!(parse_assignment("food300").is_err());
}

#[test]
fn test_parse_assignment_unknown_category() {
    let err = parse_assignment("souvenirs=50").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("souvenirs"));
    assert!(msg.contains("accommodation, transportation, food, miscellaneous"));
}

#[test]
fn test_parse_assignment_bad_value() {
    assert!(parse_assignment("misc=abc").is_err());
}
