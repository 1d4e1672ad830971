//! Type descriptor parsing.

use std::{fmt, path::PathBuf, str::FromStr};

use nameforge_config::{descriptor_problem, split_descriptor};

use crate::{Error, Result};

/// Library file extensions that mark an assembly reference as a path.
const LIBRARY_EXTENSIONS: &[&str] = &["so", "dylib", "dll"];

/// Where a descriptor's type is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyRef {
    /// A linked crate, or a plugin library found by file stem in the search
    /// directories.
    Name(String),
    /// A plugin library file.
    Path(PathBuf),
}

impl AssemblyRef {
    fn parse(assembly: &str) -> Self {
        if looks_like_path(assembly) {
            AssemblyRef::Path(PathBuf::from(assembly))
        } else {
            AssemblyRef::Name(assembly.to_string())
        }
    }
}

impl fmt::Display for AssemblyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyRef::Name(name) => f.write_str(name),
            AssemblyRef::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A parsed `fullTypeName` or `assemblyName:fullTypeName` descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    raw: String,
    assembly: Option<AssemblyRef>,
    type_name: String,
}

impl TypeDescriptor {
    /// Parse a descriptor.
    pub fn parse(descriptor: &str) -> Result<Self> {
        let descriptor = descriptor.trim();
        if let Some(reason) = descriptor_problem(descriptor) {
            return Err(Error::invalid_descriptor(descriptor, reason));
        }

        let (assembly, type_name) = split_descriptor(descriptor);
        Ok(Self {
            raw: descriptor.to_string(),
            assembly: assembly.map(AssemblyRef::parse),
            type_name: type_name.to_string(),
        })
    }

    /// The descriptor as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The assembly reference, if the descriptor names one.
    pub fn assembly(&self) -> Option<&AssemblyRef> {
        self.assembly.as_ref()
    }

    /// The full type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl FromStr for TypeDescriptor {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn looks_like_path(assembly: &str) -> bool {
    if assembly.contains(['/', '\\']) {
        return true;
    }

    assembly.rsplit_once('.').is_some_and(|(_, extension)| {
        LIBRARY_EXTENSIONS
            .iter()
            .any(|known| extension.eq_ignore_ascii_case(known))
    })
}
