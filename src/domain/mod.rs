//! Domain types and pure helpers: currencies, separators, settings, numeric
//! parsing and the hook trait through which callers override results.

pub mod amount;
pub mod currency;
pub mod ports;
pub mod separators;
pub mod settings;
pub mod text;
