//! Pluggable identifier naming for schema code generators.
//!
//! Turns schema names (enum members, types, properties) into valid
//! UpperCamelCase identifiers. Each of the three roles is a slot in a
//! [`NamingPipeline`], filled by default with a normalizing decorator over a
//! default base generator, and replaceable with a plugin named by a type
//! descriptor.
//!
//! # Architecture
//!
//! ```text
//! schema entity → base generator → normalizing decorator → identifier
//!                 └──────── or a plugin resolved by PluginLoader ───────┘
//! ```
//!
//! # Example
//!
//! ```
//! use nameforge_naming::{EnumNameGenerator, GeneratorOverrides, NamingPipeline};
//! use nameforge_schema::{EnumValue, Schema};
//!
//! let mut pipeline = NamingPipeline::new();
//! pipeline.apply_overrides(&GeneratorOverrides::new()).unwrap();
//!
//! let name = pipeline
//!     .generate_enum_name(0, "my_enum:value", &EnumValue::Null, &Schema::new())
//!     .unwrap();
//! assert_eq!(name, "MyEnumValue");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod contracts;
pub mod decorators;
pub mod defaults;
mod error;
mod pipeline;
pub mod plugin;

pub use contracts::{EnumNameGenerator, Identifier, PropertyNameGenerator, Slot, TypeNameGenerator};
pub use decorators::{
    NormalizationRules, NormalizingEnumNameGenerator, NormalizingPropertyNameGenerator,
    NormalizingTypeNameGenerator, Substitution,
};
pub use defaults::{
    ANONYMOUS_TYPE_NAME, DefaultEnumNameGenerator, DefaultPropertyNameGenerator,
    DefaultTypeNameGenerator,
};
pub use error::{Error, Result};
pub use nameforge_config::GeneratorOverrides;
pub use pipeline::{NamingPipeline, SlotSource};
pub use plugin::{NamingPlugin, PluginLoader, TypeDescriptor};
