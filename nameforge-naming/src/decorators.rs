//! Normalizing decorators over base generators.
//!
//! Each decorator owns one base generator and post-processes its output in
//! two stages:
//!
//! 1. Character substitution: separator-like characters become the canonical
//!    separator (`-`) and characters with no identifier representation are
//!    dropped. The separator set differs per slot.
//! 2. Casing: the result is split on the separator, empty segments are
//!    dropped, each segment's first character is uppercased and the segments
//!    are concatenated.
//!
//! A digit-leading result is prefixed with [`DIGIT_PREFIX`](nameforge_core::DIGIT_PREFIX).
//!
//! # Example
//!
//! ```
//! use nameforge_naming::NormalizationRules;
//!
//! assert_eq!(NormalizationRules::ENUM.normalize("my_enum:value").unwrap(), "MyEnumValue");
//! assert_eq!(NormalizationRules::TYPE.normalize("foo_bar").unwrap(), "FooBar");
//! assert_eq!(NormalizationRules::PROPERTY.normalize("@odata.type").unwrap(), "OdataType");
//! ```

use nameforge_core::{
    CANONICAL_SEPARATOR, ensure_letter_leading, is_identifier_char, to_upper_camel_case,
};
use nameforge_schema::{EnumValue, ReservedNames, Schema, SchemaProperty};
use tracing::trace;

use crate::{
    DefaultEnumNameGenerator, DefaultPropertyNameGenerator, DefaultTypeNameGenerator,
    EnumNameGenerator, Error, Identifier, PropertyNameGenerator, Result, Slot, TypeNameGenerator,
    defaults::unique_name,
};

/// What stage one does with a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// Keep the character (dropped later if it is not an identifier character).
    Keep,
    /// Replace with the canonical separator.
    Separator,
    /// Remove the character.
    Strip,
}

/// The per-slot normalization rules.
#[derive(Debug, Clone, Copy)]
pub struct NormalizationRules {
    /// Slot reported in errors.
    pub slot: Slot,
    /// Stage one mapping.
    pub substitute: fn(char) -> Substitution,
    /// Replacements applied after casing, as `(from, to)` pairs.
    pub after_casing: &'static [(char, char)],
}

impl NormalizationRules {
    /// Enum: `:` and `_` are separators; `.` becomes `_` after casing.
    pub const ENUM: Self = Self {
        slot: Slot::Enum,
        substitute: |c| match c {
            ':' | '_' => Substitution::Separator,
            c if c.is_whitespace() => Substitution::Separator,
            _ => Substitution::Keep,
        },
        after_casing: &[('.', '_')],
    };

    /// Type: `_` is a separator.
    pub const TYPE: Self = Self {
        slot: Slot::Type,
        substitute: |c| match c {
            '_' => Substitution::Separator,
            c if c.is_whitespace() => Substitution::Separator,
            _ => Substitution::Keep,
        },
        after_casing: &[],
    };

    /// Property: `_` and `.` are separators; `@` is stripped.
    pub const PROPERTY: Self = Self {
        slot: Slot::Property,
        substitute: |c| match c {
            '_' | '.' => Substitution::Separator,
            '@' => Substitution::Strip,
            c if c.is_whitespace() => Substitution::Separator,
            _ => Substitution::Keep,
        },
        after_casing: &[],
    };

    /// Normalize one base generator output into an identifier.
    pub fn normalize(&self, base: &str) -> Result<Identifier> {
        if base.is_empty() {
            return Err(Error::naming(
                self.slot,
                base,
                "base generator returned an empty name",
            ));
        }

        let substituted: String = base
            .chars()
            .filter_map(|c| match (self.substitute)(c) {
                Substitution::Separator => Some(CANONICAL_SEPARATOR),
                Substitution::Strip => None,
                Substitution::Keep if c == CANONICAL_SEPARATOR || self.survives(c) => Some(c),
                Substitution::Keep => None,
            })
            .collect();

        let cased: String = to_upper_camel_case(&substituted, CANONICAL_SEPARATOR)
            .chars()
            .map(|c| {
                self.after_casing
                    .iter()
                    .find(|(from, _)| *from == c)
                    .map_or(c, |(_, to)| *to)
            })
            .collect();

        let identifier = ensure_letter_leading(cased);
        if identifier.is_empty() {
            return Err(Error::naming(
                self.slot,
                base,
                "name has no characters that are valid in an identifier",
            ));
        }

        if identifier != base {
            trace!(slot = %self.slot, from = base, to = %identifier, "normalized name");
        }
        Ok(identifier)
    }

    /// Characters kept through stage one so the after-casing step can see them.
    fn survives(&self, c: char) -> bool {
        is_identifier_char(c) || self.after_casing.iter().any(|(from, _)| *from == c)
    }
}

/// Enum name decorator.
#[derive(Debug, Clone, Default)]
pub struct NormalizingEnumNameGenerator<B = DefaultEnumNameGenerator> {
    base: B,
}

impl<B: EnumNameGenerator> NormalizingEnumNameGenerator<B> {
    /// Wrap a base generator.
    pub fn new(base: B) -> Self {
        Self { base }
    }
}

impl<B: EnumNameGenerator> EnumNameGenerator for NormalizingEnumNameGenerator<B> {
    fn generate_enum_name(
        &self,
        index: usize,
        name: &str,
        value: &EnumValue,
        schema: &Schema,
    ) -> Result<Identifier> {
        let base = self.base.generate_enum_name(index, name, value, schema)?;
        NormalizationRules::ENUM.normalize(&base)
    }
}

/// Type name decorator.
///
/// If normalization maps the base output onto a reserved name, a numeric
/// suffix is appended so the base generator's uniqueness still holds.
#[derive(Debug, Clone, Default)]
pub struct NormalizingTypeNameGenerator<B = DefaultTypeNameGenerator> {
    base: B,
}

impl<B: TypeNameGenerator> NormalizingTypeNameGenerator<B> {
    /// Wrap a base generator.
    pub fn new(base: B) -> Self {
        Self { base }
    }
}

impl<B: TypeNameGenerator> TypeNameGenerator for NormalizingTypeNameGenerator<B> {
    fn generate_type_name(
        &self,
        schema: &Schema,
        type_name_hint: Option<&str>,
        reserved: &ReservedNames,
    ) -> Result<Identifier> {
        let base = self.base.generate_type_name(schema, type_name_hint, reserved)?;
        let name = NormalizationRules::TYPE.normalize(&base)?;

        if name != base && reserved.contains(&name) {
            let unique = unique_name(name, reserved);
            trace!(from = %base, to = %unique, "normalized type name collided with a reserved name");
            return Ok(unique);
        }
        Ok(name)
    }
}

/// Property name decorator.
#[derive(Debug, Clone, Default)]
pub struct NormalizingPropertyNameGenerator<B = DefaultPropertyNameGenerator> {
    base: B,
}

impl<B: PropertyNameGenerator> NormalizingPropertyNameGenerator<B> {
    /// Wrap a base generator.
    pub fn new(base: B) -> Self {
        Self { base }
    }
}

impl<B: PropertyNameGenerator> PropertyNameGenerator for NormalizingPropertyNameGenerator<B> {
    fn generate_property_name(&self, property: &SchemaProperty<'_>) -> Result<Identifier> {
        let base = self.base.generate_property_name(property)?;
        NormalizationRules::PROPERTY.normalize(&base)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// Base generator that returns a fixed string, for exercising the
    /// decorators on exact base outputs.
    struct Fixed(&'static str);

    impl EnumNameGenerator for Fixed {
        fn generate_enum_name(
            &self,
            _: usize,
            _: &str,
            _: &EnumValue,
            _: &Schema,
        ) -> Result<Identifier> {
            Ok(self.0.to_string())
        }
    }

    impl TypeNameGenerator for Fixed {
        fn generate_type_name(
            &self,
            _: &Schema,
            _: Option<&str>,
            _: &ReservedNames,
        ) -> Result<Identifier> {
            Ok(self.0.to_string())
        }
    }

    impl PropertyNameGenerator for Fixed {
        fn generate_property_name(&self, _: &SchemaProperty<'_>) -> Result<Identifier> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl EnumNameGenerator for Failing {
        fn generate_enum_name(
            &self,
            _: usize,
            name: &str,
            _: &EnumValue,
            _: &Schema,
        ) -> Result<Identifier> {
            Err(Error::naming(Slot::Enum, name, "unsupported"))
        }
    }

    fn enum_name(base: &'static str) -> Result<Identifier> {
        NormalizingEnumNameGenerator::new(Fixed(base)).generate_enum_name(
            0,
            "ignored",
            &json!(null),
            &Schema::new(),
        )
    }

    fn type_name(base: &'static str, reserved: &[&str]) -> Result<Identifier> {
        let reserved: ReservedNames = reserved.iter().copied().collect();
        NormalizingTypeNameGenerator::new(Fixed(base)).generate_type_name(
            &Schema::new(),
            None,
            &reserved,
        )
    }

    fn property_name(base: &'static str) -> Result<Identifier> {
        let parent = Schema::new().with_property("ignored", Schema::new());
        let property = parent.property("ignored").unwrap();
        NormalizingPropertyNameGenerator::new(Fixed(base)).generate_property_name(&property)
    }

    #[test]
    fn test_enum_substitution_and_casing() {
        assert_eq!(enum_name("my_enum:value").unwrap(), "MyEnumValue");
        assert_eq!(enum_name("already").unwrap(), "Already");
        assert_eq!(enum_name("v1.2").unwrap(), "V1_2");
        assert_eq!(enum_name("a b").unwrap(), "AB");
    }

    #[test]
    fn test_type_substitution_and_casing() {
        assert_eq!(type_name("foo_bar", &[]).unwrap(), "FooBar");
        assert_eq!(type_name("Foo__Bar_", &[]).unwrap(), "FooBar");
        assert_eq!(type_name("fooBar", &[]).unwrap(), "FooBar");
    }

    #[test]
    fn test_property_substitution_and_casing() {
        assert_eq!(property_name("@odata.type").unwrap(), "OdataType");
        assert_eq!(property_name("first_name").unwrap(), "FirstName");
        assert_eq!(property_name("user.address_line").unwrap(), "UserAddressLine");
    }

    #[test]
    fn test_strips_non_identifier_characters() {
        assert_eq!(enum_name("a@b").unwrap(), "Ab");
        assert_eq!(type_name("$ref_type", &[]).unwrap(), "RefType");
        assert_eq!(property_name("price($)").unwrap(), "Price");
    }

    #[test]
    fn test_digit_leading_gets_prefix() {
        assert_eq!(enum_name("2_factor").unwrap(), "N2Factor");
        assert_eq!(type_name("_3d_model", &[]).unwrap(), "N3dModel");
        assert_eq!(property_name("@1st").unwrap(), "N1st");
    }

    #[test]
    fn test_empty_base_output_is_error() {
        for result in [enum_name(""), type_name("", &[]), property_name("")] {
            let err = result.unwrap_err();
            assert!(matches!(*err, Error::Naming { .. }));
        }
    }

    #[test]
    fn test_output_without_identifier_characters_is_error() {
        let err = property_name("@_.@").unwrap_err();
        match *err {
            Error::Naming { slot, input, .. } => {
                assert_eq!(slot, Slot::Property);
                assert_eq!(input, "@_.@");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(enum_name("::").is_err());
    }

    #[test]
    fn test_base_failure_is_propagated() {
        let err = NormalizingEnumNameGenerator::new(Failing)
            .generate_enum_name(0, "x", &json!("x"), &Schema::new())
            .unwrap_err();
        assert!(matches!(*err, Error::Naming { slot: Slot::Enum, .. }));
    }

    #[test]
    fn test_type_collision_after_normalization_gets_suffix() {
        assert_eq!(type_name("Foo_Bar", &["FooBar"]).unwrap(), "FooBar2");
        assert_eq!(type_name("Foo_Bar", &["FooBar", "FooBar2"]).unwrap(), "FooBar3");
        // Base output unchanged by normalization is trusted as-is.
        assert_eq!(type_name("FooBar", &[]).unwrap(), "FooBar");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let names = [
            "my_enum:value",
            "foo_bar",
            "2fa",
            "HTTP_status",
            "a b c",
            "x__y",
            "camelCase_name",
        ];
        let all = [
            NormalizationRules::ENUM,
            NormalizationRules::TYPE,
            NormalizationRules::PROPERTY,
        ];
        for rules in all {
            for name in names {
                let once = rules.normalize(name).unwrap();
                let twice = rules.normalize(&once).unwrap();
                assert_eq!(once, twice, "{} slot, input {name:?}", rules.slot);
            }
        }
    }

    #[test]
    fn test_enum_dot_maps_to_underscore_once() {
        // `.` survives casing as `_`, which a second pass treats as a separator.
        let once = NormalizationRules::ENUM.normalize("v1.2").unwrap();
        assert_eq!(once, "V1_2");
        assert_eq!(NormalizationRules::ENUM.normalize(&once).unwrap(), "V12");

        let property = NormalizationRules::PROPERTY.normalize("@odata.type").unwrap();
        assert_eq!(NormalizationRules::PROPERTY.normalize(&property).unwrap(), property);
    }

    #[test]
    fn test_output_has_no_separators() {
        let names = ["a-b_c:d.e@f g", "__x__", "@a.b_c", "q:r:s"];
        for name in names {
            let property = NormalizationRules::PROPERTY.normalize(name).unwrap();
            assert!(
                !property.contains(['-', '_', '.', ':', '@', ' ']),
                "property output {property:?}"
            );
            assert!(property.starts_with(char::is_uppercase));

            let ty = NormalizationRules::TYPE.normalize(name).unwrap();
            assert!(!ty.contains(['-', '_', ':', '@', ' ']), "type output {ty:?}");

            let en = NormalizationRules::ENUM.normalize(name).unwrap();
            assert!(!en.contains(['-', ':', '.', '@', ' ']), "enum output {en:?}");
        }
    }

    #[test]
    fn test_wraps_default_base() {
        let generator: NormalizingPropertyNameGenerator = Default::default();
        let parent = Schema::new().with_property("first_name", Schema::new());
        let property = parent.property("first_name").unwrap();
        assert_eq!(generator.generate_property_name(&property).unwrap(), "FirstName");
    }
}
