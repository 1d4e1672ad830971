//! Core operations.
//!
//! This module contains the business logic for nameforge commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod name;
pub mod plugins;

pub use check::check;
pub use name::name;
pub use plugins::plugins;
