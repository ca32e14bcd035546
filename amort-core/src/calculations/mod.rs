//! Schedule computation: per-method formulas, date stepping, and the
//! rounding policy shared between them.

pub mod common;
pub mod dates;
pub mod engine;

pub use engine::{InvalidInputError, compute};
