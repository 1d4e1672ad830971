//! Core utilities for the nameforge identifier pipeline.
//!
//! This crate provides the string primitives shared by the naming
//! generators: separator-aware casing and identifier character checks.

mod casing;
mod identifier;

// Casing
pub use casing::{CANONICAL_SEPARATOR, to_snake_case, to_upper_camel_case};
// Identifier checks
pub use identifier::{DIGIT_PREFIX, ensure_letter_leading, is_identifier_char, is_valid_identifier};
