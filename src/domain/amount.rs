//! Numeric primitives behind amount sanitizing and formatting.
//!
//! Amounts travel as strings and are interpreted as `rust_decimal::Decimal`,
//! never as binary floats.

use super::separators::Separators;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Largest number of fractional digits a `Decimal` can carry.
pub const MAX_SCALE: u32 = 28;

/// Reads the leading numeric prefix of `input`.
///
/// Leading whitespace and an optional sign are accepted, followed by digits,
/// an optional `.`, and more digits. Anything after that prefix is ignored,
/// so `"1.2.3"` reads as 1.2 and `"abc"` as zero. Returns `None` only when
/// the prefix is too large to represent.
pub fn leading_decimal(input: &str) -> Option<Decimal> {
    let s = input.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let int_len = s.bytes().take_while(u8::is_ascii_digit).count();
    let (whole, rest) = s.split_at(int_len);
    let fraction = rest
        .strip_prefix('.')
        .map(|r| &r[..r.bytes().take_while(u8::is_ascii_digit).count()])
        .unwrap_or("");

    if whole.is_empty() && fraction.is_empty() {
        return Some(Decimal::ZERO);
    }

    let whole = whole.trim_start_matches('0');
    let fraction = &fraction[..fraction.len().min(MAX_SCALE as usize)];
    let literal = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if whole.is_empty() { "0" } else { whole },
        if fraction.is_empty() { "0" } else { fraction },
    );
    Decimal::from_str(&literal).ok()
}

/// Renders `value` rounded half away from zero to `decimals` places.
///
/// Integer digits are grouped by three with the thousands separator when one
/// is set. Exactly `decimals` fractional digits are printed (at most
/// `MAX_SCALE`); zero decimals emit no decimal separator, and a value that
/// rounds to zero is never printed with a minus sign.
pub fn number_format(value: Decimal, decimals: u32, separators: Separators) -> String {
    let decimals = decimals.min(MAX_SCALE);
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);

    let plain = rounded.to_string();
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + decimals as usize + 1);
    if negative {
        out.push('-');
    }
    match separators.thousands() {
        Some(sep) => out.push_str(&group_thousands(whole, sep)),
        None => out.push_str(whole),
    }
    if decimals > 0 {
        out.push(separators.decimal());
        out.push_str(fraction);
        out.extend(std::iter::repeat_n('0', decimals as usize - fraction.len()));
    }
    out
}

fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn seps(thousands: Option<char>, decimal: char) -> Separators {
        Separators::new(thousands, decimal).unwrap()
    }

    #[test]
    fn test_leading_decimal_prefixes() {
        assert_eq!(leading_decimal("1234.56"), Some(dec!(1234.56)));
        assert_eq!(leading_decimal("  -12.5abc"), Some(dec!(-12.5)));
        assert_eq!(leading_decimal("+7"), Some(dec!(7)));
        assert_eq!(leading_decimal(".5"), Some(dec!(0.5)));
        assert_eq!(leading_decimal("5."), Some(dec!(5)));
        assert_eq!(leading_decimal("007.10"), Some(dec!(7.10)));
    }

    #[test]
    fn test_leading_decimal_ignores_second_dot() {
        assert_eq!(leading_decimal("1.2.3"), Some(dec!(1.2)));
        assert_eq!(leading_decimal("1..5"), Some(dec!(1)));
    }

    #[test]
    fn test_leading_decimal_without_digits_is_zero() {
        assert_eq!(leading_decimal(""), Some(Decimal::ZERO));
        assert_eq!(leading_decimal("."), Some(Decimal::ZERO));
        assert_eq!(leading_decimal("-"), Some(Decimal::ZERO));
        assert_eq!(leading_decimal("$5"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_leading_decimal_overflow() {
        let huge = "9".repeat(40);
        assert_eq!(leading_decimal(&huge), None);
    }

    #[test]
    fn test_number_format_grouping() {
        assert_eq!(number_format(dec!(1234.56), 2, seps(Some(','), '.')), "1,234.56");
        assert_eq!(number_format(dec!(1234567.891), 2, seps(Some('.'), ',')), "1.234.567,89");
        assert_eq!(number_format(dec!(123), 2, seps(Some(','), '.')), "123.00");
        assert_eq!(number_format(dec!(1000000), 0, seps(Some(' '), '.')), "1 000 000");
        assert_eq!(number_format(dec!(1234.5), 2, seps(None, '.')), "1234.50");
    }

    #[test]
    fn test_number_format_rounding() {
        assert_eq!(number_format(dec!(0.125), 2, seps(None, '.')), "0.13");
        assert_eq!(number_format(dec!(-0.125), 2, seps(None, '.')), "-0.13");
        assert_eq!(number_format(dec!(2.5), 0, seps(None, '.')), "3");
        assert_eq!(number_format(dec!(999.999), 2, seps(Some(','), '.')), "1,000.00");
    }

    #[test]
    fn test_number_format_negative_zero() {
        assert_eq!(number_format(dec!(-0.001), 2, seps(None, '.')), "0.00");
        assert_eq!(number_format(dec!(-0.4), 0, seps(None, '.')), "0");
        assert_eq!(number_format(dec!(-1234.5), 2, seps(Some(','), '.')), "-1,234.50");
    }

    #[test]
    fn test_number_format_clamps_scale() {
        let out = number_format(dec!(1), 40, Separators::CANONICAL);
        assert_eq!(out.len(), 2 + MAX_SCALE as usize);
    }

    #[test]
    fn test_number_format_pads_wide_integers() {
        let wide = leading_decimal(&format!("1{}", "0".repeat(27))).unwrap();
        assert_eq!(
            number_format(wide, 2, Separators::CANONICAL),
            format!("1{}.00", "0".repeat(27))
        );
    }

    #[test]
    fn test_number_format_full_scale() {
        assert_eq!(
            number_format(dec!(10), MAX_SCALE, Separators::CANONICAL),
            format!("10.{}", "0".repeat(28))
        );
        assert_eq!(
            number_format(dec!(-10.5), MAX_SCALE, seps(Some(','), '.')),
            format!("-10.5{}", "0".repeat(27))
        );
    }
}
