//! Alternative naming generators bundled with nameforge.
//!
//! Every generator here builds on the default normalizing generators and
//! restyles their output, so the result is always a valid identifier.
//!
//! The crate is linked into the `nameforge` binary and registered with
//! [`naming_plugin!`], so descriptors such as
//! `nameforge_plugins::ScreamingEnumNames` resolve without loading anything.
//! It is also built as a `cdylib` exporting the same types, for loading by
//! path from other binaries:
//!
//! ```toml
//! [naming]
//! enum_name_generator = "target/release/libnameforge_plugins.so:nameforge_plugins::ScreamingEnumNames"
//! ```

use nameforge_core::to_snake_case;
use nameforge_naming::{
    EnumNameGenerator, Identifier, NormalizingEnumNameGenerator, NormalizingPropertyNameGenerator,
    NormalizingTypeNameGenerator, PropertyNameGenerator, Result, TypeNameGenerator,
    export_naming_plugins, naming_plugin,
};
use nameforge_schema::{EnumValue, ReservedNames, Schema, SchemaProperty};

/// Prefix added by [`PrefixedTypeNames`].
pub const TYPE_PREFIX: &str = "Api";

/// Words that cannot be used as bare identifiers in generated Rust code.
const RESERVED_WORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "yield",
];

/// Enum members in `SCREAMING_SNAKE_CASE`.
#[derive(Debug, Clone, Default)]
pub struct ScreamingEnumNames {
    inner: NormalizingEnumNameGenerator,
}

impl EnumNameGenerator for ScreamingEnumNames {
    fn generate_enum_name(
        &self,
        index: usize,
        name: &str,
        value: &EnumValue,
        schema: &Schema,
    ) -> Result<Identifier> {
        let name = self.inner.generate_enum_name(index, name, value, schema)?;
        Ok(to_snake_case(&name).to_uppercase())
    }
}

/// Properties in `snake_case`; reserved words get a trailing `_`.
#[derive(Debug, Clone, Default)]
pub struct SnakeCasePropertyNames {
    inner: NormalizingPropertyNameGenerator,
}

impl PropertyNameGenerator for SnakeCasePropertyNames {
    fn generate_property_name(&self, property: &SchemaProperty<'_>) -> Result<Identifier> {
        let name = to_snake_case(&self.inner.generate_property_name(property)?);
        if RESERVED_WORDS.contains(&name.as_str()) {
            Ok(format!("{name}_"))
        } else {
            Ok(name)
        }
    }
}

/// Type names prefixed with [`TYPE_PREFIX`].
#[derive(Debug, Clone, Default)]
pub struct PrefixedTypeNames {
    inner: NormalizingTypeNameGenerator,
}

impl TypeNameGenerator for PrefixedTypeNames {
    fn generate_type_name(
        &self,
        schema: &Schema,
        type_name_hint: Option<&str>,
        reserved: &ReservedNames,
    ) -> Result<Identifier> {
        let base = self
            .inner
            .generate_type_name(schema, type_name_hint, reserved)?;

        let mut name = format!("{TYPE_PREFIX}{base}");
        let mut n = 2;
        while reserved.contains(&name) {
            name = format!("{TYPE_PREFIX}{base}{n}");
            n += 1;
        }
        Ok(name)
    }
}

naming_plugin!(ScreamingEnumNames: enum_generator);
naming_plugin!(SnakeCasePropertyNames: property_generator);
naming_plugin!(PrefixedTypeNames: type_generator);

export_naming_plugins!(ScreamingEnumNames, SnakeCasePropertyNames, PrefixedTypeNames);
