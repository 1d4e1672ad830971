use std::path::{Path, PathBuf};

use crate::{Config, Error, GeneratorOverrides, Result};

/// Represents a nameforge.toml file with both raw content and parsed config.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a nameforge.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = crate::parse_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open the file if it exists, otherwise fall back to an empty config.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                content: String::new(),
                config: Config::default(),
            })
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory relative paths in the config are resolved against.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Generator overrides declared in the file.
    pub fn overrides(&self) -> GeneratorOverrides {
        self.config.naming.overrides()
    }

    /// Plugin search directories, resolved against the file's directory.
    pub fn plugin_dirs(&self) -> Vec<PathBuf> {
        self.config.naming.plugin_dirs_in(self.base_dir())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nameforge.toml");
        std::fs::write(
            &path,
            "[naming]\ntype_name_generator = \"custom::Types\"\nplugin_dirs = [\"libs\"]\n",
        )
        .unwrap();

        let file = ConfigFile::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.base_dir(), temp.path());
        assert_eq!(file.overrides().type_name_generator(), Some("custom::Types"));
        assert_eq!(file.plugin_dirs(), vec![temp.path().join("libs")]);
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::open(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_or_default() {
        let temp = TempDir::new().unwrap();
        let file = ConfigFile::open_or_default(temp.path().join("nameforge.toml")).unwrap();
        assert!(file.content().is_empty());
        assert!(file.overrides().is_empty());
    }

    #[test]
    fn test_base_dir_of_bare_filename() {
        let file = ConfigFile::open_or_default("does-not-exist-nameforge.toml").unwrap();
        assert_eq!(file.base_dir(), Path::new("."));
    }
}
