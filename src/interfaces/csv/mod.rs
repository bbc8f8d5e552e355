//! Streaming CSV front end for batch formatting.

pub mod amount_reader;
pub mod amount_writer;
