//! Generator override descriptors.

use serde::{Deserialize, Serialize};

/// The three optional generator override descriptors.
///
/// Each descriptor has the form `fullTypeName` or `assemblyName:fullTypeName`.
/// An absent or empty descriptor means "use the default normalizing
/// generator" for that slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOverrides {
    /// Custom type name generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name_generator_type: Option<String>,
    /// Custom property name generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name_generator_type: Option<String>,
    /// Custom enum name generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_name_generator_type: Option<String>,
}

impl GeneratorOverrides {
    /// Create an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type name generator descriptor.
    pub fn with_type_name_generator(mut self, descriptor: impl Into<String>) -> Self {
        self.type_name_generator_type = Some(descriptor.into());
        self
    }

    /// Set the property name generator descriptor.
    pub fn with_property_name_generator(mut self, descriptor: impl Into<String>) -> Self {
        self.property_name_generator_type = Some(descriptor.into());
        self
    }

    /// Set the enum name generator descriptor.
    pub fn with_enum_name_generator(mut self, descriptor: impl Into<String>) -> Self {
        self.enum_name_generator_type = Some(descriptor.into());
        self
    }

    /// The type name generator descriptor, if set and non-empty.
    pub fn type_name_generator(&self) -> Option<&str> {
        non_empty(&self.type_name_generator_type)
    }

    /// The property name generator descriptor, if set and non-empty.
    pub fn property_name_generator(&self) -> Option<&str> {
        non_empty(&self.property_name_generator_type)
    }

    /// The enum name generator descriptor, if set and non-empty.
    pub fn enum_name_generator(&self) -> Option<&str> {
        non_empty(&self.enum_name_generator_type)
    }

    /// Check if no slot is overridden.
    pub fn is_empty(&self) -> bool {
        self.type_name_generator().is_none()
            && self.property_name_generator().is_none()
            && self.enum_name_generator().is_none()
    }

    /// Layer `other` on top of `self`: every non-empty descriptor in `other`
    /// replaces the one in `self`.
    pub fn overridden_by(self, other: GeneratorOverrides) -> Self {
        fn pick(base: Option<String>, top: Option<String>) -> Option<String> {
            match top {
                Some(top) if !top.trim().is_empty() => Some(top),
                _ => base,
            }
        }

        Self {
            type_name_generator_type: pick(
                self.type_name_generator_type,
                other.type_name_generator_type,
            ),
            property_name_generator_type: pick(
                self.property_name_generator_type,
                other.property_name_generator_type,
            ),
            enum_name_generator_type: pick(
                self.enum_name_generator_type,
                other.enum_name_generator_type,
            ),
        }
    }

    /// Iterate over the set descriptors as `(config key, descriptor)` pairs.
    pub fn descriptors(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("type_name_generator", self.type_name_generator()),
            ("property_name_generator", self.property_name_generator()),
            ("enum_name_generator", self.enum_name_generator()),
        ]
        .into_iter()
        .filter_map(|(key, descriptor)| descriptor.map(|d| (key, d)))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_descriptors_are_ignored() {
        let overrides = GeneratorOverrides::new()
            .with_type_name_generator("")
            .with_enum_name_generator("   ");
        assert!(overrides.is_empty());
        assert_eq!(overrides.type_name_generator(), None);
        assert_eq!(overrides.descriptors().count(), 0);
    }

    #[test]
    fn test_descriptors_are_trimmed() {
        let overrides = GeneratorOverrides::new().with_enum_name_generator(" plugins:Gen ");
        assert_eq!(overrides.enum_name_generator(), Some("plugins:Gen"));
    }

    #[test]
    fn test_overridden_by() {
        let file = GeneratorOverrides::new()
            .with_type_name_generator("file::Types")
            .with_enum_name_generator("file::Enums");
        let cli = GeneratorOverrides::new()
            .with_enum_name_generator("cli::Enums")
            .with_type_name_generator("");

        let merged = file.overridden_by(cli);
        assert_eq!(merged.type_name_generator(), Some("file::Types"));
        assert_eq!(merged.enum_name_generator(), Some("cli::Enums"));
        assert_eq!(merged.property_name_generator(), None);
    }

    #[test]
    fn test_descriptors_order() {
        let overrides = GeneratorOverrides::new()
            .with_enum_name_generator("e::E")
            .with_type_name_generator("t::T");
        let keys: Vec<_> = overrides.descriptors().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["type_name_generator", "enum_name_generator"]);
    }
}
