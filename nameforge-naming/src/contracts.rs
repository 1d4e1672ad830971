//! The three naming contracts.
//!
//! Each contract is a pure function from schema-derived context to a
//! candidate identifier. Given identical inputs an implementation must return
//! identical output, and it must report unprocessable input as an
//! [`Error::Naming`](crate::Error::Naming) instead of returning an empty or
//! malformed name.

use std::fmt;

use nameforge_schema::{EnumValue, ReservedNames, Schema, SchemaProperty};

use crate::Result;

/// A generated identifier.
pub type Identifier = String;

/// One of the three generator roles in the naming pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Enum,
    Type,
    Property,
}

impl Slot {
    /// All slots, in the order overrides are applied.
    pub const ALL: [Slot; 3] = [Slot::Type, Slot::Property, Slot::Enum];

    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Enum => "enum",
            Slot::Type => "type",
            Slot::Property => "property",
        }
    }

    /// Name of the contract a generator in this slot implements.
    pub fn contract(&self) -> &'static str {
        match self {
            Slot::Enum => "EnumNameGenerator",
            Slot::Type => "TypeNameGenerator",
            Slot::Property => "PropertyNameGenerator",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generates identifiers for enumeration members.
pub trait EnumNameGenerator: Send + Sync {
    /// Generate the identifier for the member at `index` with raw `name` and
    /// `value`, declared by `schema`.
    fn generate_enum_name(
        &self,
        index: usize,
        name: &str,
        value: &EnumValue,
        schema: &Schema,
    ) -> Result<Identifier>;
}

/// Generates identifiers for types.
pub trait TypeNameGenerator: Send + Sync {
    /// Generate a type name for `schema` that does not collide with
    /// `reserved`.
    fn generate_type_name(
        &self,
        schema: &Schema,
        type_name_hint: Option<&str>,
        reserved: &ReservedNames,
    ) -> Result<Identifier>;
}

/// Generates identifiers for properties.
pub trait PropertyNameGenerator: Send + Sync {
    fn generate_property_name(&self, property: &SchemaProperty<'_>) -> Result<Identifier>;
}

impl<T: EnumNameGenerator + ?Sized> EnumNameGenerator for Box<T> {
    fn generate_enum_name(
        &self,
        index: usize,
        name: &str,
        value: &EnumValue,
        schema: &Schema,
    ) -> Result<Identifier> {
        (**self).generate_enum_name(index, name, value, schema)
    }
}

impl<T: TypeNameGenerator + ?Sized> TypeNameGenerator for Box<T> {
    fn generate_type_name(
        &self,
        schema: &Schema,
        type_name_hint: Option<&str>,
        reserved: &ReservedNames,
    ) -> Result<Identifier> {
        (**self).generate_type_name(schema, type_name_hint, reserved)
    }
}

impl<T: PropertyNameGenerator + ?Sized> PropertyNameGenerator for Box<T> {
    fn generate_property_name(&self, property: &SchemaProperty<'_>) -> Result<Identifier> {
        (**self).generate_property_name(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_display() {
        assert_eq!(Slot::Enum.to_string(), "enum");
        assert_eq!(Slot::Type.to_string(), "type");
        assert_eq!(Slot::Property.to_string(), "property");
    }

    #[test]
    fn test_slot_contract() {
        assert_eq!(Slot::Enum.contract(), "EnumNameGenerator");
        assert_eq!(Slot::Type.contract(), "TypeNameGenerator");
        assert_eq!(Slot::Property.contract(), "PropertyNameGenerator");
    }
}
