use checkout_amounts::{AmountFormatter, CurrencyCode, CurrencyPosition, Separators, StoreSettings};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

const LAYOUTS: &[(Option<char>, char)] = &[
    (Some(','), '.'),
    (Some('.'), ','),
    (Some(' '), ','),
    (Some(' '), '.'),
    (Some('\''), '.'),
    (None, ','),
    (None, '.'),
];

fn formatter(currency: &str, thousands: Option<char>, decimal: char) -> AmountFormatter {
    AmountFormatter::new(StoreSettings::new(
        CurrencyCode::new(currency).unwrap(),
        CurrencyPosition::Before,
        Separators::new(thousands, decimal).unwrap(),
    ))
}

#[test]
fn test_display_sanitize_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);

    for &(thousands, decimal) in LAYOUTS {
        let formatter = formatter("USD", thousands, decimal);
        for _ in 0..500 {
            let cents: i64 = rng.gen_range(-1_000_000_000_000..=1_000_000_000_000);
            let canonical = Decimal::new(cents, 2).to_string();

            let displayed = formatter.format_amount(&canonical, true);
            let sanitized = formatter.sanitize_amount(&displayed);

            assert_eq!(
                sanitized, canonical,
                "{canonical} displayed as {displayed:?} with {thousands:?}/{decimal:?}"
            );
            assert_eq!(formatter.format_amount(&sanitized, true), displayed);
        }
    }
}

#[test]
fn test_negative_sign_survives_both_directions() {
    for &(thousands, decimal) in LAYOUTS {
        let formatter = formatter("EUR", thousands, decimal);
        let displayed = formatter.format_amount("-98765.43", true);
        assert!(displayed.starts_with('-'), "{displayed}");
        assert_eq!(formatter.sanitize_amount(&displayed), "-98765.43");
    }
}

#[test]
fn test_zero_decimal_currencies_never_show_fractions() {
    let mut rng = StdRng::seed_from_u64(11);

    for code in ["JPY", "TWD", "HUF", "RIAL"] {
        let formatter = formatter(code, Some(','), '.');
        for _ in 0..200 {
            let cents: i64 = rng.gen_range(-100_000_000..=100_000_000);
            let amount = Decimal::new(cents, 2).to_string();

            let sanitized = formatter.sanitize_amount(&amount);
            let displayed = formatter.format_amount(&amount, true);

            assert!(!sanitized.contains('.'), "{code}: {sanitized}");
            assert!(!displayed.contains('.'), "{code}: {displayed}");
            assert_eq!(formatter.decimal_count(None), 0);
        }
    }
}
