use super::currency::{CurrencyCode, CurrencyPosition};
use super::separators::Separators;

/// Inputs that produced a formatted amount, handed to `formatted_amount`.
#[derive(Debug, Clone, Copy)]
pub struct FormattedAmount<'a> {
    /// The amount after separator normalization, before rounding.
    pub amount: &'a str,
    pub decimals: u32,
    pub separators: Separators,
}

/// Inputs that produced a currency-decorated price, handed to `currency_display`.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyDisplay<'a> {
    pub currency: &'a CurrencyCode,
    /// The price without its leading minus sign.
    pub price: &'a str,
    pub position: CurrencyPosition,
}

/// Override points applied while sanitizing and formatting amounts.
///
/// Every method receives the value computed so far and returns the value to
/// use instead. The defaults return their input unchanged.
pub trait FormatHooks: Send + Sync {
    fn currency_decimal_count(&self, decimals: u32, _currency: &CurrencyCode) -> u32 {
        decimals
    }

    fn sanitize_amount_decimals(&self, decimals: u32, _amount: &str) -> u32 {
        decimals
    }

    fn sanitized_amount(&self, amount: String) -> String {
        amount
    }

    fn format_amount_decimals(&self, decimals: u32, _amount: &str) -> u32 {
        decimals
    }

    fn formatted_amount(&self, formatted: String, _ctx: &FormattedAmount<'_>) -> String {
        formatted
    }

    fn currency_symbol(&self, symbol: String, _currency: &CurrencyCode) -> String {
        symbol
    }

    fn currency_display(&self, formatted: String, _ctx: &CurrencyDisplay<'_>) -> String {
        formatted
    }

    fn sanitized_key(&self, key: String, _raw: &str) -> String {
        key
    }

    fn not_negative(&self, value: i64, _parsed: i64, _raw: &str) -> i64 {
        value
    }
}

pub type FormatHooksBox = Box<dyn FormatHooks>;

/// Hooks that change nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl FormatHooks for NoHooks {}

/// Runs several hook sets in registration order, each seeing the previous
/// one's output.
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<FormatHooksBox>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, hooks: impl FormatHooks + 'static) -> Self {
        self.hooks.push(Box::new(hooks));
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl FormatHooks for HookChain {
    fn currency_decimal_count(&self, decimals: u32, currency: &CurrencyCode) -> u32 {
        self.hooks
            .iter()
            .fold(decimals, |acc, h| h.currency_decimal_count(acc, currency))
    }

    fn sanitize_amount_decimals(&self, decimals: u32, amount: &str) -> u32 {
        self.hooks
            .iter()
            .fold(decimals, |acc, h| h.sanitize_amount_decimals(acc, amount))
    }

    fn sanitized_amount(&self, amount: String) -> String {
        self.hooks
            .iter()
            .fold(amount, |acc, h| h.sanitized_amount(acc))
    }

    fn format_amount_decimals(&self, decimals: u32, amount: &str) -> u32 {
        self.hooks
            .iter()
            .fold(decimals, |acc, h| h.format_amount_decimals(acc, amount))
    }

    fn formatted_amount(&self, formatted: String, ctx: &FormattedAmount<'_>) -> String {
        self.hooks
            .iter()
            .fold(formatted, |acc, h| h.formatted_amount(acc, ctx))
    }

    fn currency_symbol(&self, symbol: String, currency: &CurrencyCode) -> String {
        self.hooks
            .iter()
            .fold(symbol, |acc, h| h.currency_symbol(acc, currency))
    }

    fn currency_display(&self, formatted: String, ctx: &CurrencyDisplay<'_>) -> String {
        self.hooks
            .iter()
            .fold(formatted, |acc, h| h.currency_display(acc, ctx))
    }

    fn sanitized_key(&self, key: String, raw: &str) -> String {
        self.hooks
            .iter()
            .fold(key, |acc, h| h.sanitized_key(acc, raw))
    }

    fn not_negative(&self, value: i64, parsed: i64, raw: &str) -> i64 {
        self.hooks
            .iter()
            .fold(value, |acc, h| h.not_negative(acc, parsed, raw))
    }
}
