//! Separator-aware casing conversions.

/// The separator every separator-like character is mapped to before casing.
pub const CANONICAL_SEPARATOR: char = '-';

/// Convert a string to UpperCamelCase by splitting on `separator`.
///
/// Empty segments are dropped, the first character of each segment is
/// uppercased and the rest of the segment is kept as-is
/// (e.g., "my-enum-value" -> "MyEnumValue", "odata--eTag" -> "OdataETag").
pub fn to_upper_camel_case(s: &str, separator: char) -> String {
    s.split(separator)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 && !result.ends_with('_') {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_upper_camel_case() {
        assert_eq!(to_upper_camel_case("my-enum-value", '-'), "MyEnumValue");
        assert_eq!(to_upper_camel_case("foo", '-'), "Foo");
        assert_eq!(to_upper_camel_case("", '-'), "");
        assert_eq!(to_upper_camel_case("---", '-'), "");
    }

    #[test]
    fn test_to_upper_camel_case_preserves_rest() {
        assert_eq!(to_upper_camel_case("odata-eTag", '-'), "OdataETag");
        assert_eq!(to_upper_camel_case("HTTP-status", '-'), "HTTPStatus");
    }

    #[test]
    fn test_to_upper_camel_case_drops_empty_segments() {
        assert_eq!(to_upper_camel_case("-leading", '-'), "Leading");
        assert_eq!(to_upper_camel_case("trailing-", '-'), "Trailing");
        assert_eq!(to_upper_camel_case("a--b", '-'), "AB");
    }

    #[test]
    fn test_to_upper_camel_case_non_ascii() {
        assert_eq!(to_upper_camel_case("ärger-öl", '-'), "ÄrgerÖl");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("FooBarBaz"), "foo_bar_baz");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("Foo_Bar"), "foo_bar");
        assert_eq!(to_snake_case(""), "");
    }
}
