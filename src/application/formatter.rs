use crate::domain::amount::{leading_decimal, number_format};
use crate::domain::currency::{CurrencyCode, CurrencyPosition};
use crate::domain::ports::{CurrencyDisplay, FormatHooks, FormatHooksBox, FormattedAmount, NoHooks};
use crate::domain::separators::Separators;
use crate::domain::settings::StoreSettings;
use crate::domain::text::{leading_integer, strip_key, strip_tags};
use rust_decimal::Decimal;
use tracing::{trace, warn};

/// Decimal places used for currencies outside the zero-decimal set.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Sanitizes, formats and decorates amounts for a single store.
///
/// `AmountFormatter` owns the store settings and the hooks that may override
/// any intermediate result. None of its operations fail: malformed input
/// degrades to zero or to whatever digits can be extracted.
pub struct AmountFormatter {
    settings: StoreSettings,
    hooks: FormatHooksBox,
}

impl AmountFormatter {
    /// Creates a formatter with no overrides installed.
    pub fn new(settings: StoreSettings) -> Self {
        Self::with_hooks(settings, NoHooks)
    }

    /// Creates a formatter whose results pass through `hooks`.
    pub fn with_hooks(settings: StoreSettings, hooks: impl FormatHooks + 'static) -> Self {
        Self {
            settings,
            hooks: Box::new(hooks),
        }
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Turns a locale-formatted amount into a canonical one in the store
    /// currency: `.` as decimal point, no grouping, fixed decimals.
    pub fn sanitize_amount(&self, raw: &str) -> String {
        self.sanitize_amount_in(raw, None)
    }

    /// Like [`sanitize_amount`](Self::sanitize_amount), with the decimal
    /// count of `currency` instead of the store currency.
    pub fn sanitize_amount_in(&self, raw: &str, currency: Option<&CurrencyCode>) -> String {
        let normalized = self.normalize_input(raw);
        let negative = minus_before_digits(&normalized);
        let digits: String = normalized
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        let decimals = self
            .hooks
            .sanitize_amount_decimals(self.resolve_decimals(DEFAULT_DECIMALS, currency), &digits);

        let mut value = parse_or_zero(&digits);
        if negative {
            value.set_sign_negative(true);
        }

        let sanitized = number_format(value, decimals, Separators::CANONICAL);
        trace!(raw, %sanitized, decimals, "Sanitized amount");
        self.hooks.sanitized_amount(sanitized)
    }

    /// Formats a canonical amount for display with the store separators.
    ///
    /// With `decimals` false the amount is shown as a whole number.
    pub fn format_amount(&self, amount: &str, decimals: bool) -> String {
        self.format_amount_in(amount, decimals, None)
    }

    /// Like [`format_amount`](Self::format_amount), with the decimal count
    /// of `currency` instead of the store currency.
    pub fn format_amount_in(
        &self,
        amount: &str,
        decimals: bool,
        currency: Option<&CurrencyCode>,
    ) -> String {
        let separators = self.settings.separators;

        let mut normalized = amount.to_string();
        if separators.decimal() == ','
            && let Some(pos) = normalized.find(',')
        {
            normalized.replace_range(pos..pos + 1, ".");
        }
        if let Some(sep @ (',' | ' ')) = separators.thousands() {
            normalized = normalized.replace(sep, "");
        }
        if normalized.is_empty() {
            normalized.push('0');
        }

        let initial = if decimals { DEFAULT_DECIMALS } else { 0 };
        let count = self
            .hooks
            .format_amount_decimals(self.resolve_decimals(initial, currency), &normalized);

        let value = parse_or_zero(&normalized);
        let formatted = number_format(value, count, separators);
        trace!(amount, %formatted, decimals = count, "Formatted amount");

        let ctx = FormattedAmount {
            amount: &normalized,
            decimals: count,
            separators,
        };
        self.hooks.formatted_amount(formatted, &ctx)
    }

    /// Wraps a formatted price with the currency symbol or code.
    ///
    /// A leading minus sign is moved in front of the symbol, giving `-$5.00`
    /// rather than `$-5.00`.
    pub fn currency_filter(&self, price: &str, currency: Option<&CurrencyCode>) -> String {
        let currency = currency.unwrap_or(&self.settings.currency);
        let position = self.settings.currency_position;

        let (negative, price) = match price.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, price),
        };

        let symbol = self
            .hooks
            .currency_symbol(currency.symbol().to_string(), currency);

        let formatted = match (position, currency.uses_symbol(position)) {
            (CurrencyPosition::Before, true) => format!("{symbol}{price}"),
            (CurrencyPosition::Before, false) => format!("{currency} {price}"),
            (CurrencyPosition::After, true) => format!("{price}{symbol}"),
            (CurrencyPosition::After, false) => format!("{price} {currency}"),
        };

        let ctx = CurrencyDisplay {
            currency,
            price,
            position,
        };
        let formatted = self.hooks.currency_display(formatted, &ctx);

        if negative {
            format!("-{formatted}")
        } else {
            formatted
        }
    }

    /// Formats `amount` with decimals and decorates it with its currency.
    pub fn display_price(&self, amount: &str, currency: Option<&CurrencyCode>) -> String {
        let formatted = self.format_amount_in(amount, true, currency);
        self.currency_filter(&formatted, currency)
    }

    /// Number of decimal places shown for `currency` (default: the store's).
    pub fn decimal_count(&self, currency: Option<&CurrencyCode>) -> u32 {
        self.resolve_decimals(DEFAULT_DECIMALS, currency)
    }

    /// Forces zero decimals for zero-decimal currencies, keeps `decimals`
    /// otherwise, then lets the hooks have the final word.
    pub fn resolve_decimals(&self, decimals: u32, currency: Option<&CurrencyCode>) -> u32 {
        let currency = currency.unwrap_or(&self.settings.currency);
        let decimals = if currency.is_zero_decimal() { 0 } else { decimals };
        self.hooks.currency_decimal_count(decimals, currency)
    }

    /// Sanitizes a settings key.
    pub fn sanitize_key(&self, key: &str) -> String {
        self.hooks.sanitized_key(strip_key(key), key)
    }

    /// Extracts an integer from a possibly formatted string, never below zero.
    pub fn number_not_negative(&self, raw: &str) -> i64 {
        let digits: String = strip_tags(raw)
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '-')
            .collect();
        let parsed = leading_integer(&digits);
        self.hooks.not_negative(parsed.max(0), parsed, raw)
    }

    fn normalize_input(&self, raw: &str) -> String {
        let separators = self.settings.separators;
        let mut amount = raw.to_string();

        if separators.decimal() == ',' && amount.contains(',') {
            match separators.thousands() {
                Some(sep @ ('.' | ' ')) if amount.contains(sep) => {
                    amount = amount.replace(sep, "");
                }
                None if amount.contains('.') => {
                    amount = amount.replace('.', "");
                }
                _ => {}
            }
            amount = amount.replace(',', ".");
        } else if separators.thousands() == Some(',') && amount.contains(',') {
            amount = amount.replace(',', "");
        }

        amount
    }
}

fn minus_before_digits(amount: &str) -> bool {
    amount
        .chars()
        .take_while(|c| !c.is_ascii_digit())
        .any(|c| c == '-')
}

fn parse_or_zero(amount: &str) -> Decimal {
    leading_decimal(amount).unwrap_or_else(|| {
        warn!(amount, "Amount is out of range, using zero");
        Decimal::ZERO
    })
}
