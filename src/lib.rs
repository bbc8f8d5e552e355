pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::formatter::AmountFormatter;
pub use domain::currency::{CurrencyCode, CurrencyPosition};
pub use domain::ports::{FormatHooks, HookChain, NoHooks};
pub use domain::separators::Separators;
pub use domain::settings::StoreSettings;
pub use error::{FormatError, Result};
