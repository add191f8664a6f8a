#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── format ────────────────────────────────────────────────────

#[test]
fn test_format_default_is_brl() {
    let fmt = MoneyFormat::default();
    assert_eq!(fmt.format(dec!(900)), "R$ 900,00");
    assert_eq!(fmt.format(dec!(12.5)), "R$ 12,50");
}

#[test]
fn test_format_brl_thousands() {
    let fmt = MoneyFormat::default();
    assert_eq!(fmt.format(dec!(1234.56)), "R$ 1.234,56");
    assert_eq!(fmt.format(dec!(1234567.89)), "R$ 1.234.567,89");
}

#[test]
fn test_format_zero() {
    assert_eq!(MoneyFormat::default().format(Decimal::ZERO), "R$ 0,00");
}

#[test]
fn test_format_negative() {
    assert_eq!(MoneyFormat::default().format(dec!(-5)), "-R$ 5,00");
    assert_eq!(
        MoneyFormat::for_locale("en-US", "USD").format(dec!(-1234.5)),
        "-$1,234.50"
    );
}

#[test]
fn test_format_rounds_half_away_from_zero() {
    let fmt = MoneyFormat::default();
    assert_eq!(fmt.format(dec!(0.005)), "R$ 0,01");
    assert_eq!(fmt.format(dec!(2.345)), "R$ 2,35");
    assert_eq!(fmt.format(dec!(-2.345)), "-R$ 2,35");
    assert_eq!(fmt.format(dec!(2.344)), "R$ 2,34");
}

#[test]
fn test_format_tiny_negative_rounds_to_unsigned_zero() {
    assert_eq!(MoneyFormat::default().format(dec!(-0.001)), "R$ 0,00");
}

#[test]
fn test_format_en_us() {
    let fmt = MoneyFormat::for_locale("en-US", "USD");
    assert_eq!(fmt.format(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_suffix_locales() {
    assert_eq!(
        MoneyFormat::for_locale("de-DE", "EUR").format(dec!(1234.5)),
        "1.234,50 €"
    );
    assert_eq!(
        MoneyFormat::for_locale("fr_FR", "eur").format(dec!(1234.5)),
        "1 234,50 €"
    );
}

#[test]
fn test_format_unknown_locale_falls_back_to_pt_br_rules() {
    let fmt = MoneyFormat::for_locale("xx-YY", "BRL");
    assert_eq!(fmt, MoneyFormat::default());
}

#[test]
fn test_format_unknown_currency_uses_code() {
    let fmt = MoneyFormat::for_locale("pt-BR", "chf");
    assert_eq!(fmt.format(dec!(10)), "CHF 10,00");
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_plain_decimal() {
    assert_eq!(parse_amount("12.50"), Some(dec!(12.50)));
    assert_eq!(parse_amount("900"), Some(dec!(900)));
    assert_eq!(parse_amount("-3"), Some(dec!(-3)));
}

#[test]
fn test_parse_trims_whitespace() {
    assert_eq!(parse_amount("  42.1 \t"), Some(dec!(42.1)));
}

#[test]
fn test_parse_comma_decimal() {
    assert_eq!(parse_amount("12,50"), Some(dec!(12.50)));
}

#[test]
fn test_parse_scientific() {
    assert_eq!(parse_amount("1e3"), Some(dec!(1000)));
    assert_eq!(parse_amount("2.5E2"), Some(dec!(250)));
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("   "), None);
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount("NaN"), None);
    assert_eq!(parse_amount("inf"), None);
    assert_eq!(parse_amount("1,2,3"), None);
    assert_eq!(parse_amount("1.234,56"), None);
}

#[test]
fn test_parse_rejects_out_of_range() {
    assert_eq!(parse_amount("1e30"), None);
    assert_eq!(parse_amount("79228162514264337593543950336"), None);
    assert!(is_numeric("1e30"));
    assert!(is_numeric("79228162514264337593543950336"));
}

#[test]
fn test_is_numeric_follows_parse_rules() {
    assert!(is_numeric("12,50"));
    assert!(is_numeric(" -3 "));
    assert!(!is_numeric(""));
    assert!(!is_numeric("abc"));
    assert!(!is_numeric("NaN"));
    assert!(!is_numeric("inf"));
    assert!(!is_numeric("1,2,3"));
    assert!(!is_numeric("1.234,56"));
}

// ── saturating_sum ────────────────────────────────────────────

#[test]
fn test_saturating_sum_adds_normally() {
    assert_eq!(saturating_sum(&[dec!(12.50), dec!(900), dec!(-20)]), dec!(892.50));
    assert_eq!(saturating_sum(&[] as &[Decimal]), Decimal::ZERO);
}

#[test]
fn test_saturating_sum_pins_at_bounds() {
    assert_eq!(saturating_sum(&[Decimal::MAX, Decimal::ONE]), Decimal::MAX);
    assert_eq!(saturating_sum(&[Decimal::MIN, dec!(-1)]), Decimal::MIN);
}
