//! Descriptor syntax rules.

use nameforge_core::is_valid_identifier;

use crate::{Result, SourceContext};

/// Split a descriptor into its optional assembly part and its type name.
///
/// The separator is the last single `:`; the `::` of a type path never
/// splits, so `my_plugins:my_plugins::Gen` yields
/// `(Some("my_plugins"), "my_plugins::Gen")` and a Windows drive letter in the
/// assembly path stays attached to it.
pub fn split_descriptor(descriptor: &str) -> (Option<&str>, &str) {
    let bytes = descriptor.as_bytes();
    let separator = (0..bytes.len()).rev().find(|&i| {
        bytes[i] == b':' && (i == 0 || bytes[i - 1] != b':') && bytes.get(i + 1) != Some(&b':')
    });

    match separator {
        Some(i) => (Some(&descriptor[..i]), &descriptor[i + 1..]),
        None => (None, descriptor),
    }
}

/// Check a descriptor's syntax.
/// Returns None if valid, Some(reason) if invalid
///
/// Surrounding whitespace is ignored. Inside, only the type name is held to
/// identifier syntax; an assembly path may contain spaces.
pub fn descriptor_problem(descriptor: &str) -> Option<&'static str> {
    let descriptor = descriptor.trim();
    if descriptor.is_empty() {
        return Some("descriptor cannot be empty");
    }

    let (assembly, type_name) = split_descriptor(descriptor);

    if assembly.is_some_and(|assembly| assembly.trim().is_empty()) {
        return Some("assembly name before ':' cannot be empty");
    }

    if type_name.is_empty() {
        return Some("type name after ':' cannot be empty");
    }

    if type_name.chars().any(char::is_whitespace) {
        return Some("type name cannot contain whitespace");
    }

    if !is_type_path(type_name) {
        return Some("type name must be a path of identifiers separated by '::' or '.'");
    }

    None
}

/// Validate a descriptor read from config `key`.
pub(crate) fn validate_descriptor(ctx: &SourceContext, key: &str, descriptor: &str) -> Result<()> {
    match descriptor_problem(descriptor) {
        Some(reason) => Err(ctx.invalid_descriptor_error(key, descriptor, reason)),
        None => Ok(()),
    }
}

fn is_type_path(name: &str) -> bool {
    name.split("::")
        .flat_map(|part| part.split('.'))
        .all(is_valid_identifier)
}
