use checkout_amounts::domain::ports::{CurrencyDisplay, FormattedAmount};
use checkout_amounts::{
    AmountFormatter, CurrencyCode, CurrencyPosition, FormatHooks, HookChain, StoreSettings,
};

/// Shows Swiss francs with four decimals and a custom prefix.
struct SwissPricing;

impl FormatHooks for SwissPricing {
    fn currency_decimal_count(&self, decimals: u32, currency: &CurrencyCode) -> u32 {
        if currency.as_str() == "CHF" && decimals > 0 {
            4
        } else {
            decimals
        }
    }

    fn currency_display(&self, formatted: String, ctx: &CurrencyDisplay<'_>) -> String {
        match (ctx.currency.as_str(), ctx.position) {
            ("CHF", CurrencyPosition::Before) => format!("Fr. {}", ctx.price),
            _ => formatted,
        }
    }
}

/// Replaces a zero total with a label.
struct FreeLabel;

impl FormatHooks for FreeLabel {
    fn formatted_amount(&self, formatted: String, ctx: &FormattedAmount<'_>) -> String {
        if ctx.amount.trim_start_matches(['0', '.']).is_empty() {
            "Free".to_string()
        } else {
            formatted
        }
    }
}

/// Never lets a cleaned number exceed a cap.
struct Capped(i64);

impl FormatHooks for Capped {
    fn not_negative(&self, value: i64, _parsed: i64, _raw: &str) -> i64 {
        value.min(self.0)
    }

    fn sanitized_key(&self, key: String, _raw: &str) -> String {
        key.to_ascii_lowercase()
    }
}

fn chained() -> AmountFormatter {
    let hooks = HookChain::new()
        .register(SwissPricing)
        .register(FreeLabel)
        .register(Capped(99));
    AmountFormatter::with_hooks(StoreSettings::default(), hooks)
}

#[test]
fn test_decimal_override_reaches_every_operation() {
    let formatter = chained();
    let chf = CurrencyCode::new("CHF").unwrap();

    assert_eq!(formatter.decimal_count(Some(&chf)), 4);
    assert_eq!(formatter.sanitize_amount_in("1,234.56789", Some(&chf)), "1234.5679");
    assert_eq!(formatter.format_amount_in("1234.5", true, Some(&chf)), "1,234.5000");
    // Store currency is untouched.
    assert_eq!(formatter.decimal_count(None), 2);
}

#[test]
fn test_display_override() {
    let formatter = chained();
    let chf = CurrencyCode::new("CHF").unwrap();

    assert_eq!(formatter.display_price("12", Some(&chf)), "Fr. 12.0000");
    assert_eq!(formatter.display_price("-12", Some(&chf)), "-Fr. 12.0000");
    assert_eq!(formatter.display_price("12", None), "$12.00");
}

#[test]
fn test_formatted_amount_override() {
    let formatter = chained();
    assert_eq!(formatter.format_amount("0.00", true), "Free");
    assert_eq!(formatter.display_price("", None), "$Free");
    assert_eq!(formatter.format_amount("0.50", true), "0.50");
}

#[test]
fn test_text_overrides() {
    let formatter = chained();
    assert_eq!(formatter.number_not_negative("1,000"), 99);
    assert_eq!(formatter.number_not_negative("-4"), 0);
    assert_eq!(formatter.sanitize_key("Gateway/Stripe"), "gateway/stripe");
}
