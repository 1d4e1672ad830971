//! Schema views consumed by the nameforge naming generators.
//!
//! These types describe just enough of a schema document for identifier
//! generation: titles, nested properties and enumeration members. They are
//! read-only context; nothing in the naming pipeline mutates them.
//!
//! # Architecture
//!
//! ```text
//! schema document → Schema (views) → naming generators → identifiers
//! ```

mod reserved;
mod schema;

pub use reserved::ReservedNames;
pub use schema::{EnumMember, Schema, SchemaProperty, display_value};
/// Raw enumeration value as it appears in the schema document.
pub use serde_json::Value as EnumValue;
