//! Schema and property views.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A schema definition as seen by the naming generators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Human-readable title, preferred as the type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared JSON type (`object`, `string`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Nested properties, in declaration order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
    /// Enumeration values.
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enumeration: Vec<Value>,
    /// Explicit names for enumeration values, by position.
    #[serde(rename = "x-enumNames", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_names: Vec<String>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a property.
    pub fn with_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Add an enumeration value.
    pub fn with_enum_value(mut self, value: impl Into<Value>) -> Self {
        self.enumeration.push(value.into());
        self
    }

    /// Check if the schema is an enumeration.
    pub fn is_enum(&self) -> bool {
        !self.enumeration.is_empty()
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<SchemaProperty<'_>> {
        self.properties
            .get_key_value(name)
            .map(|(name, schema)| SchemaProperty::new(name, schema, self))
    }

    /// Iterate over properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = SchemaProperty<'_>> {
        self.properties
            .iter()
            .map(|(name, schema)| SchemaProperty::new(name, schema, self))
    }

    /// Iterate over enumeration members.
    ///
    /// The raw name is taken from `x-enumNames` when present at the same
    /// position, otherwise from the value itself.
    pub fn enum_members(&self) -> impl Iterator<Item = EnumMember<'_>> {
        self.enumeration
            .iter()
            .enumerate()
            .map(|(index, value)| EnumMember {
                index,
                name: self
                    .enum_names
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| display_value(value)),
                value,
            })
    }
}

/// A property of a schema, together with its owning schema.
#[derive(Debug, Clone, Copy)]
pub struct SchemaProperty<'a> {
    name: &'a str,
    schema: &'a Schema,
    parent: &'a Schema,
}

impl<'a> SchemaProperty<'a> {
    /// Create a property view.
    pub fn new(name: &'a str, schema: &'a Schema, parent: &'a Schema) -> Self {
        Self {
            name,
            schema,
            parent,
        }
    }

    /// The property name as written in the schema.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The property's own schema.
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// The schema that declares this property.
    pub fn parent(&self) -> &'a Schema {
        self.parent
    }
}

/// One member of an enumeration.
#[derive(Debug, Clone)]
pub struct EnumMember<'a> {
    /// Ordinal position.
    pub index: usize,
    /// Raw name.
    pub name: String,
    /// Raw value.
    pub value: &'a Value,
}

/// Render a value the way it is named: strings without quotes, `null` as empty.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_schema() {
        let schema: Schema = serde_json::from_str(
            r#"{
                "title": "Pet",
                "type": "object",
                "required": ["id"],
                "properties": {
                    "id": { "type": "integer" },
                    "@odata.type": { "type": "string" }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(schema.title.as_deref(), Some("Pet"));
        assert_eq!(schema.kind.as_deref(), Some("object"));
        let names: Vec<_> = schema.properties().map(|p| p.name()).collect();
        assert_eq!(names, vec!["id", "@odata.type"]);
    }

    #[test]
    fn test_property_view() {
        let schema = Schema::new()
            .with_title("Pet")
            .with_property("id", Schema::new().with_title("Id"));

        let id = schema.property("id").unwrap();
        assert_eq!(id.name(), "id");
        assert_eq!(id.schema().title.as_deref(), Some("Id"));
        assert_eq!(id.parent().title.as_deref(), Some("Pet"));
        assert!(schema.property("missing").is_none());
    }

    #[test]
    fn test_enum_members_use_names_then_values() {
        let schema: Schema = serde_json::from_value(json!({
            "enum": ["active", 2, null],
            "x-enumNames": ["Enabled"]
        }))
        .unwrap();

        let members: Vec<_> = schema
            .enum_members()
            .map(|m| (m.index, m.name))
            .collect();
        assert_eq!(
            members,
            vec![
                (0, "Enabled".to_string()),
                (1, "2".to_string()),
                (2, String::new())
            ]
        );
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("a:b")), "a:b");
        assert_eq!(display_value(&json!(1.5)), "1.5");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&Value::Null), "");
    }

    #[test]
    fn test_builder() {
        let schema = Schema::new()
            .with_title("Status")
            .with_enum_value("on")
            .with_enum_value("off");
        assert!(schema.is_enum());
        assert_eq!(schema.enum_members().count(), 2);
    }
}
