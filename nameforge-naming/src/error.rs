use miette::Diagnostic;
use thiserror::Error;

use crate::Slot;

/// Result type for naming operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Errors raised while generating names or resolving generator plugins.
///
/// Every variant is fatal to a generation run.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot generate {slot} name from '{input}': {reason}")]
    #[diagnostic(code(nameforge::naming))]
    Naming {
        slot: Slot,
        input: String,
        reason: String,
    },

    #[error("invalid generator descriptor '{descriptor}'")]
    #[diagnostic(
        code(nameforge::invalid_descriptor),
        help("{reason}. Use 'fullTypeName' or 'assemblyName:fullTypeName'.")
    )]
    InvalidDescriptor { descriptor: String, reason: String },

    #[error("failed to load assembly '{assembly}' for generator '{descriptor}'")]
    #[diagnostic(code(nameforge::assembly_load), help("{reason}"))]
    AssemblyLoad {
        descriptor: String,
        assembly: String,
        reason: String,
    },

    #[error("type '{type_name}' not found for generator '{descriptor}'")]
    #[diagnostic(code(nameforge::type_not_found), help("available types: {available}"))]
    TypeNotFound {
        descriptor: String,
        type_name: String,
        available: String,
    },

    #[error("failed to instantiate '{type_name}' for generator '{descriptor}'")]
    #[diagnostic(code(nameforge::instantiation), help("constructor panicked: {reason}"))]
    Instantiation {
        descriptor: String,
        type_name: String,
        reason: String,
    },

    #[error("'{type_name}' does not implement {contract} (generator '{descriptor}')")]
    #[diagnostic(
        code(nameforge::interface_mismatch),
        help("list the {slot} slot in the type's naming_plugin! registration")
    )]
    InterfaceMismatch {
        descriptor: String,
        type_name: String,
        slot: Slot,
        contract: &'static str,
    },

    #[error("generator overrides must be applied before any name is generated")]
    #[diagnostic(code(nameforge::overrides_after_generation))]
    OverridesAfterGeneration,
}

impl Error {
    /// Create a naming error for `slot`.
    pub fn naming(slot: Slot, input: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::Naming {
            slot,
            input: input.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid descriptor error.
    pub fn invalid_descriptor(descriptor: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidDescriptor {
            descriptor: descriptor.into(),
            reason: reason.into(),
        })
    }

    /// Create an assembly load error.
    pub fn assembly_load(
        descriptor: impl Into<String>,
        assembly: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::AssemblyLoad {
            descriptor: descriptor.into(),
            assembly: assembly.into(),
            reason: reason.into(),
        })
    }

    /// Create a type not found error listing the names that were available.
    pub fn type_not_found<'a>(
        descriptor: impl Into<String>,
        type_name: impl Into<String>,
        available: impl IntoIterator<Item = &'a str>,
    ) -> Box<Self> {
        let available: Vec<_> = available.into_iter().collect();
        Box::new(Error::TypeNotFound {
            descriptor: descriptor.into(),
            type_name: type_name.into(),
            available: if available.is_empty() {
                "none".to_string()
            } else {
                available.join(", ")
            },
        })
    }

    /// Create an instantiation error.
    pub fn instantiation(
        descriptor: impl Into<String>,
        type_name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::Instantiation {
            descriptor: descriptor.into(),
            type_name: type_name.into(),
            reason: reason.into(),
        })
    }

    /// Create an interface mismatch error for `slot`.
    pub fn interface_mismatch(
        descriptor: impl Into<String>,
        type_name: impl Into<String>,
        slot: Slot,
    ) -> Box<Self> {
        Box::new(Error::InterfaceMismatch {
            descriptor: descriptor.into(),
            type_name: type_name.into(),
            slot,
            contract: slot.contract(),
        })
    }
}
