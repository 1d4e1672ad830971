//! Default base generators.
//!
//! These produce a first candidate identifier from raw schema names. The
//! normalizing decorators in [`crate::decorators`] wrap them to produce the
//! final identifier.

use nameforge_core::{
    CANONICAL_SEPARATOR, ensure_letter_leading, is_identifier_char, to_upper_camel_case,
};
use nameforge_schema::{EnumValue, ReservedNames, Schema, SchemaProperty, display_value};

use crate::{
    EnumNameGenerator, Error, Identifier, PropertyNameGenerator, Result, Slot, TypeNameGenerator,
};

/// Type name used when a schema has neither a title nor a hint.
pub const ANONYMOUS_TYPE_NAME: &str = "Anonymous";

/// Default enum member naming.
///
/// Uses the raw name, falling back to the value. Comparison operators are
/// spelled out (`>=` -> `Gte`) and leading signs become words (`-1` ->
/// `Minus1`).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEnumNameGenerator;

impl EnumNameGenerator for DefaultEnumNameGenerator {
    fn generate_enum_name(
        &self,
        index: usize,
        name: &str,
        value: &EnumValue,
        _schema: &Schema,
    ) -> Result<Identifier> {
        let raw = if name.is_empty() {
            display_value(value)
        } else {
            name.to_string()
        };

        if raw.is_empty() {
            return Err(Error::naming(
                Slot::Enum,
                format!("#{index}"),
                "member has neither a name nor a value",
            ));
        }

        let raw = spell_out(&raw);

        let name = to_upper_camel_case(
            &raw.replace(':', "-").replace('\\', ""),
            CANONICAL_SEPARATOR,
        );
        non_empty(Slot::Enum, &raw, ensure_letter_leading(name))
    }
}

/// Default type naming.
///
/// Prefers the schema title, then the last segment of the hint, then
/// [`ANONYMOUS_TYPE_NAME`]. Reserved names get a numeric suffix starting at 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTypeNameGenerator;

impl TypeNameGenerator for DefaultTypeNameGenerator {
    fn generate_type_name(
        &self,
        schema: &Schema,
        type_name_hint: Option<&str>,
        reserved: &ReservedNames,
    ) -> Result<Identifier> {
        let candidate = schema
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| {
                type_name_hint
                    .and_then(|hint| hint.rsplit(['.', '/']).next())
                    .filter(|h| !h.trim().is_empty())
            })
            .unwrap_or(ANONYMOUS_TYPE_NAME);

        let cleaned: String = candidate
            .chars()
            .filter_map(|c| match c {
                c if is_identifier_char(c) => Some(c),
                c if c == CANONICAL_SEPARATOR || c.is_whitespace() => Some(CANONICAL_SEPARATOR),
                _ => None,
            })
            .collect();

        let name = match to_upper_camel_case(&cleaned, CANONICAL_SEPARATOR) {
            name if name.is_empty() => ANONYMOUS_TYPE_NAME.to_string(),
            name => ensure_letter_leading(name),
        };

        Ok(unique_name(name, reserved))
    }
}

/// Default property naming.
///
/// Drops quoting and sigil characters, spells out `+` and `*`, and turns the
/// remaining punctuation into underscores.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPropertyNameGenerator;

impl PropertyNameGenerator for DefaultPropertyNameGenerator {
    fn generate_property_name(&self, property: &SchemaProperty<'_>) -> Result<Identifier> {
        let raw = property.name();
        if raw.is_empty() {
            return Err(Error::naming(Slot::Property, raw, "property name is empty"));
        }

        let mut cleaned = String::with_capacity(raw.len());
        for c in raw.chars() {
            match c {
                '"' | '@' | '?' | '$' | '[' | ']' | ')' => {}
                '(' => cleaned.push('_'),
                '.' | '=' => cleaned.push(CANONICAL_SEPARATOR),
                '+' => cleaned.push_str("plus"),
                c => cleaned.push(c),
            }
        }

        let cased = ensure_letter_leading(to_upper_camel_case(&cleaned, CANONICAL_SEPARATOR));
        let name: String = cased
            .replace('*', "Star")
            .chars()
            .map(|c| match c {
                ':' | '-' | '#' => '_',
                c => c,
            })
            .collect();

        non_empty(Slot::Property, raw, name)
    }
}

/// Append the smallest numeric suffix (starting at 2) that makes `name`
/// unused, or return it unchanged if it is free.
pub(crate) fn unique_name(name: String, reserved: &ReservedNames) -> String {
    if !reserved.contains(&name) {
        return name;
    }

    let mut n = 2;
    loop {
        let candidate = format!("{name}{n}");
        if !reserved.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Spell out operator names and leading signs.
fn spell_out(raw: &str) -> String {
    match raw {
        "=" => "Eq".to_string(),
        "!=" => "NotEq".to_string(),
        ">" => "Gt".to_string(),
        ">=" => "Gte".to_string(),
        "<" => "Lt".to_string(),
        "<=" => "Lte".to_string(),
        _ => {
            if let Some(rest) = raw.strip_prefix('-') {
                format!("Minus{rest}")
            } else if let Some(rest) = raw.strip_prefix('+') {
                format!("Plus{rest}")
            } else {
                raw.to_string()
            }
        }
    }
}

fn non_empty(slot: Slot, input: &str, name: String) -> Result<Identifier> {
    if name.is_empty() {
        Err(Error::naming(slot, input, "name produces an empty identifier"))
    } else {
        Ok(name)
    }
}
