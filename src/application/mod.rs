//! Application layer: the formatter that applies store settings and hooks to
//! the pure helpers in `domain`, and the batch runner built on it.

pub mod batch;
pub mod formatter;
