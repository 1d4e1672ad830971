use std::path::{Path, PathBuf};

use tracing::debug;

use super::{AssemblyRef, LinkedPluginType, NamingPlugin, PluginType, TypeDescriptor, library};
use crate::{EnumNameGenerator, Error, PropertyNameGenerator, Result, Slot, TypeNameGenerator};

/// A plugin type that can currently be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableType {
    /// Linked crate name or library path.
    pub assembly: String,
    /// Full type name.
    pub name: &'static str,
    /// Contracts the type implements.
    pub slots: Vec<Slot>,
}

/// Resolves type descriptors to plugin instances.
///
/// Every successful resolution constructs a new instance.
#[derive(Debug, Clone, Default)]
pub struct PluginLoader {
    base_dir: Option<PathBuf>,
    search_dirs: Vec<PathBuf>,
}

impl PluginLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative library paths against `dir` instead of the current
    /// directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Add a directory searched for libraries named by assembly name.
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    pub fn with_search_dirs(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.search_dirs.extend(dirs);
        self
    }

    /// Resolve `descriptor` to a new plugin instance.
    pub fn resolve(&self, descriptor: &str) -> Result<Box<dyn NamingPlugin>> {
        let descriptor = TypeDescriptor::parse(descriptor)?;
        let (_, plugin) = self.instantiate(&descriptor)?;
        Ok(plugin)
    }

    /// Resolve `descriptor` to a new enum name generator.
    pub fn resolve_enum_generator(&self, descriptor: &str) -> Result<Box<dyn EnumNameGenerator>> {
        self.resolve_as(descriptor, Slot::Enum, |plugin| plugin.into_enum_generator())
    }

    /// Resolve `descriptor` to a new type name generator.
    pub fn resolve_type_generator(&self, descriptor: &str) -> Result<Box<dyn TypeNameGenerator>> {
        self.resolve_as(descriptor, Slot::Type, |plugin| plugin.into_type_generator())
    }

    /// Resolve `descriptor` to a new property name generator.
    pub fn resolve_property_generator(
        &self,
        descriptor: &str,
    ) -> Result<Box<dyn PropertyNameGenerator>> {
        self.resolve_as(descriptor, Slot::Property, |plugin| {
            plugin.into_property_generator()
        })
    }

    /// List the types of every linked crate and every loaded library.
    ///
    /// Nothing is instantiated; the contracts are the ones recorded at
    /// registration.
    pub fn available_types(&self) -> Vec<AvailableType> {
        let linked = inventory::iter::<LinkedPluginType>
            .into_iter()
            .map(|linked| (linked.assembly().to_string(), *linked.plugin_type()));
        let loaded = library::loaded().into_iter().flat_map(|library| {
            let assembly = library.path().display().to_string();
            library
                .types()
                .iter()
                .map(move |ty| (assembly.clone(), *ty))
        });

        let mut types: Vec<_> = linked
            .chain(loaded)
            .map(|(assembly, ty)| AvailableType {
                assembly,
                name: ty.name(),
                slots: ty.slots().to_vec(),
            })
            .collect();
        types.sort_by(|a, b| (&a.assembly, a.name).cmp(&(&b.assembly, b.name)));
        types
    }

    fn resolve_as<G: ?Sized>(
        &self,
        descriptor: &str,
        slot: Slot,
        convert: impl FnOnce(Box<dyn NamingPlugin>) -> Option<Box<G>>,
    ) -> Result<Box<G>> {
        let descriptor = TypeDescriptor::parse(descriptor)?;
        let (ty, plugin) = self.instantiate(&descriptor)?;
        convert(plugin)
            .ok_or_else(|| Error::interface_mismatch(descriptor.as_str(), ty.name(), slot))
    }

    fn instantiate(
        &self,
        descriptor: &TypeDescriptor,
    ) -> Result<(PluginType, Box<dyn NamingPlugin>)> {
        let candidates = self.candidates(descriptor)?;
        let type_name = descriptor.type_name();
        let ty = candidates
            .iter()
            .find(|ty| match descriptor.assembly() {
                Some(_) => ty.matches_in_crate(type_name),
                None => ty.matches(type_name),
            })
            .copied()
            .ok_or_else(|| {
                Error::type_not_found(
                    descriptor.as_str(),
                    type_name,
                    candidates.iter().map(PluginType::name),
                )
            })?;

        let plugin = ty
            .instantiate()
            .map_err(|reason| Error::instantiation(descriptor.as_str(), ty.name(), reason))?;
        debug!(descriptor = %descriptor, type_name = ty.name(), "instantiated naming plugin");
        Ok((ty, plugin))
    }

    /// The plugin types visible to `descriptor`.
    fn candidates(&self, descriptor: &TypeDescriptor) -> Result<Vec<PluginType>> {
        match descriptor.assembly() {
            None => {
                let mut types: Vec<PluginType> = inventory::iter::<LinkedPluginType>
                    .into_iter()
                    .map(|linked| *linked.plugin_type())
                    .collect();
                for library in library::loaded() {
                    types.extend_from_slice(library.types());
                }
                Ok(types)
            }
            Some(AssemblyRef::Name(name)) => {
                let linked = linked_types(name);
                if !linked.is_empty() {
                    return Ok(linked);
                }

                if let Some(library) = library::find_loaded(name) {
                    return Ok(library.types().to_vec());
                }

                let path = self.find_in_search_dirs(name).ok_or_else(|| {
                    Error::assembly_load(
                        descriptor.as_str(),
                        name.as_str(),
                        format!(
                            "no linked crate or plugin library named '{name}' (searched: {})",
                            self.describe_search_dirs()
                        ),
                    )
                })?;
                self.load(descriptor, &path)
            }
            Some(AssemblyRef::Path(path)) => {
                // A library built from a crate already linked into this
                // binary is served from the linked registrations.
                let linked = linked_types(&library::library_name(path));
                if !linked.is_empty() {
                    debug!(path = %path.display(), "plugin library is linked into the binary");
                    return Ok(linked);
                }

                let resolved = self.locate(path).ok_or_else(|| {
                    Error::assembly_load(
                        descriptor.as_str(),
                        path.display().to_string(),
                        "file not found",
                    )
                })?;
                self.load(descriptor, &resolved)
            }
        }
    }

    fn load(&self, descriptor: &TypeDescriptor, path: &Path) -> Result<Vec<PluginType>> {
        let library = library::load(path).map_err(|reason| {
            Error::assembly_load(descriptor.as_str(), path.display().to_string(), reason)
        })?;
        Ok(library.types().to_vec())
    }

    /// Find a library path on disk.
    ///
    /// Relative paths are tried against the base directory, then each search
    /// directory. A path without an extension is also tried with the
    /// platform's library suffix.
    fn locate(&self, path: &Path) -> Option<PathBuf> {
        let mut roots: Vec<Option<&Path>> = Vec::new();
        if path.is_absolute() {
            roots.push(None);
        } else {
            roots.push(Some(self.base_dir.as_deref().unwrap_or(Path::new("."))));
            roots.extend(self.search_dirs.iter().map(|dir| Some(dir.as_path())));
        }

        roots.into_iter().find_map(|root| {
            let candidate = match root {
                Some(root) => root.join(path),
                None => path.to_path_buf(),
            };
            if candidate.is_file() {
                return Some(candidate);
            }
            if candidate.extension().is_none() {
                let mut with_suffix = candidate.into_os_string();
                with_suffix.push(std::env::consts::DLL_SUFFIX);
                let with_suffix = PathBuf::from(with_suffix);
                if with_suffix.is_file() {
                    return Some(with_suffix);
                }
            }
            None
        })
    }

    fn find_in_search_dirs(&self, name: &str) -> Option<PathBuf> {
        let file_names = library::library_file_names(name);
        self.search_dirs.iter().find_map(|dir| {
            file_names
                .iter()
                .map(|file_name| dir.join(file_name))
                .find(|path| path.is_file())
        })
    }

    fn describe_search_dirs(&self) -> String {
        if self.search_dirs.is_empty() {
            return "no plugin directories configured".to_string();
        }
        self.search_dirs
            .iter()
            .map(|dir| dir.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Types registered by the linked crate called `name`.
fn linked_types(name: &str) -> Vec<PluginType> {
    inventory::iter::<LinkedPluginType>
        .into_iter()
        .filter(|linked| library::same_library_name(linked.assembly(), name))
        .map(|linked| *linked.plugin_type())
        .collect()
}
