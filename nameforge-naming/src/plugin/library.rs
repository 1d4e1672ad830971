//! Process-wide cache of loaded plugin libraries.
//!
//! A library is loaded at most once per process and never unloaded, so the
//! plugin types it exports stay valid for the rest of the process.

use std::{
    env::consts::{DLL_PREFIX, DLL_SUFFIX},
    ffi::CStr,
    fmt,
    path::{Path, PathBuf},
    sync::{Arc, LazyLock, Mutex, PoisonError},
};

use libloading::Library;
use tracing::debug;

use super::{
    NAMING_VERSION, PLUGIN_ABI_VERSION, PLUGIN_DECLARATION_SYMBOL, PluginDeclaration, PluginType,
    RUSTC_VERSION,
};

static LIBRARIES: LazyLock<Mutex<Vec<Arc<LoadedLibrary>>>> = LazyLock::new(Mutex::default);

/// A plugin library kept loaded for the lifetime of the process.
pub(crate) struct LoadedLibrary {
    path: PathBuf,
    name: String,
    types: &'static [PluginType],
    _library: Library,
}

impl LoadedLibrary {
    fn open(path: PathBuf) -> Result<Self, String> {
        // SAFETY: loading runs the library's initializers. Plugin libraries
        // are trusted code, named explicitly by the user's configuration.
        let library = unsafe { Library::new(&path) }.map_err(|e| e.to_string())?;

        // SAFETY: the symbol is declared by `export_naming_plugins!` as a
        // `PluginDeclaration` static. `abi_version` and `rustc_version` have a
        // C layout and are checked before any Rust-layout field is read. The
        // library is never unloaded, so the declaration lives as long as the
        // process.
        let declaration: &'static PluginDeclaration = unsafe {
            let symbol = library
                .get::<*const PluginDeclaration>(PLUGIN_DECLARATION_SYMBOL)
                .map_err(|_| "library does not export a naming plugin declaration".to_string())?;
            let ptr = *symbol;
            if ptr.is_null() {
                return Err("naming plugin declaration is null".to_string());
            }
            if (*ptr).abi_version != PLUGIN_ABI_VERSION {
                return Err(format!(
                    "plugin ABI version {} is not supported (expected {PLUGIN_ABI_VERSION})",
                    (*ptr).abi_version
                ));
            }
            if (*ptr).rustc_version.is_null() {
                return Err("naming plugin declaration has no compiler version".to_string());
            }
            let rustc = CStr::from_ptr((*ptr).rustc_version).to_string_lossy();
            if rustc != RUSTC_VERSION {
                return Err(format!(
                    "library was built by {rustc} but this binary by {RUSTC_VERSION}"
                ));
            }
            &*ptr
        };

        if declaration.naming_version != NAMING_VERSION {
            return Err(format!(
                "library was built against nameforge-naming {} but this binary uses {NAMING_VERSION}",
                declaration.naming_version
            ));
        }

        Ok(Self {
            name: library_name(&path),
            path,
            types: declaration.types,
            _library: library,
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Library file stem without the platform prefix, with `-` as `_`.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn types(&self) -> &'static [PluginType] {
        self.types
    }
}

impl fmt::Debug for LoadedLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedLibrary")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("types", &self.types)
            .finish_non_exhaustive()
    }
}

/// Load the library at `path`, or return the already loaded one.
pub(crate) fn load(path: &Path) -> Result<Arc<LoadedLibrary>, String> {
    let path = path
        .canonicalize()
        .map_err(|e| format!("cannot open {}: {e}", path.display()))?;

    let mut libraries = LIBRARIES.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(library) = libraries.iter().find(|library| library.path == path) {
        return Ok(Arc::clone(library));
    }

    let library = Arc::new(LoadedLibrary::open(path)?);
    debug!(
        path = %library.path.display(),
        types = library.types.len(),
        "loaded plugin library"
    );
    libraries.push(Arc::clone(&library));
    Ok(library)
}

/// All libraries loaded so far, in load order.
pub(crate) fn loaded() -> Vec<Arc<LoadedLibrary>> {
    LIBRARIES
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Find a loaded library by name (see [`same_library_name`]).
pub(crate) fn find_loaded(name: &str) -> Option<Arc<LoadedLibrary>> {
    LIBRARIES
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .find(|library| same_library_name(library.name(), name))
        .cloned()
}

/// Compare a library or crate name with a name written in a descriptor,
/// ignoring case and reading `-` as `_`.
pub(crate) fn same_library_name(actual: &str, written: &str) -> bool {
    actual.eq_ignore_ascii_case(&normalize_name(written))
}

/// Candidate file names for a library called `name` on this platform.
pub(crate) fn library_file_names(name: &str) -> Vec<String> {
    let mut names = vec![format!("{DLL_PREFIX}{name}{DLL_SUFFIX}")];
    let normalized = normalize_name(name);
    if normalized != name {
        names.push(format!("{DLL_PREFIX}{normalized}{DLL_SUFFIX}"));
    }
    if !DLL_PREFIX.is_empty() {
        names.push(format!("{name}{DLL_SUFFIX}"));
    }
    names
}

/// Library name for `path`: the file stem without the platform prefix.
pub(crate) fn library_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    let stem = stem.strip_prefix(DLL_PREFIX).unwrap_or(&stem);
    normalize_name(stem)
}

fn normalize_name(name: &str) -> String {
    name.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_name() {
        let file = format!("{DLL_PREFIX}my-plugins{DLL_SUFFIX}");
        assert_eq!(library_name(&Path::new("/opt/plugins").join(file)), "my_plugins");
    }

    #[test]
    fn test_library_file_names() {
        let names = library_file_names("my-plugins");
        assert_eq!(names[0], format!("{DLL_PREFIX}my-plugins{DLL_SUFFIX}"));
        assert_eq!(names[1], format!("{DLL_PREFIX}my_plugins{DLL_SUFFIX}"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/libnothing.so")).unwrap_err();
        assert!(err.starts_with("cannot open"), "{err}");
    }

    #[test]
    fn test_load_rejects_non_library() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("{DLL_PREFIX}fake{DLL_SUFFIX}"));
        std::fs::write(&path, "not a library").unwrap();

        assert!(load(&path).is_err());
        assert!(find_loaded("fake").is_none());
    }

    #[test]
    fn test_same_library_name() {
        assert!(same_library_name("myplugins", "MyPlugins"));
        assert!(same_library_name("my_plugins", "My-Plugins"));
        assert!(!same_library_name("my_plugins", "myplugins"));
    }
}
