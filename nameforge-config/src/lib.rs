// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod overrides;
mod validate;

use std::path::{Path, PathBuf};

pub use error::{Error, Result, SourceContext};
pub use file::ConfigFile;
pub use overrides::GeneratorOverrides;
pub use validate::{descriptor_problem, split_descriptor};
use serde::Deserialize;

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "nameforge.toml";

/// Root schema for nameforge.toml
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Naming pipeline configuration
    #[serde(default)]
    pub naming: NamingConfig,
}

/// The `[naming]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    /// Custom type name generator descriptor
    #[serde(default)]
    pub type_name_generator: Option<String>,

    /// Custom property name generator descriptor
    #[serde(default)]
    pub property_name_generator: Option<String>,

    /// Custom enum name generator descriptor
    #[serde(default)]
    pub enum_name_generator: Option<String>,

    /// Directories searched for plugin libraries referenced by name,
    /// relative to the config file
    #[serde(default)]
    pub plugin_dirs: Vec<PathBuf>,
}

impl NamingConfig {
    /// The generator overrides declared in this table.
    pub fn overrides(&self) -> GeneratorOverrides {
        GeneratorOverrides {
            type_name_generator_type: self.type_name_generator.clone(),
            property_name_generator_type: self.property_name_generator.clone(),
            enum_name_generator_type: self.enum_name_generator.clone(),
        }
    }

    /// Plugin directories resolved against `base`.
    pub fn plugin_dirs_in(&self, base: &Path) -> Vec<PathBuf> {
        self.plugin_dirs
            .iter()
            .map(|dir| {
                if dir.is_absolute() {
                    dir.clone()
                } else {
                    base.join(dir)
                }
            })
            .collect()
    }
}

impl Config {
    /// Validate the config after parsing
    pub fn validate(&self, ctx: &SourceContext) -> Result<()> {
        for (key, descriptor) in self.naming.overrides().descriptors() {
            validate::validate_descriptor(ctx, key, descriptor)?;
        }
        Ok(())
    }
}

/// Parse a nameforge.toml from a string (uses "nameforge.toml" as default filename)
pub fn parse_str(content: &str) -> Result<Config> {
    parse_str_with_filename(content, CONFIG_FILE_NAME)
}

/// Parse a nameforge.toml from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    config.validate(&ctx)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let config = parse_str("").unwrap();
        assert!(config.naming.overrides().is_empty());
        assert!(config.naming.plugin_dirs.is_empty());
    }

    #[test]
    fn test_parse_naming_table() {
        let config = parse_str(
            r#"
[naming]
type_name_generator = "nameforge_plugins::PrefixedTypeNames"
enum_name_generator = "plugins/libcustom.so:custom::Enums"
plugin_dirs = ["plugins"]
"#,
        )
        .unwrap();

        let overrides = config.naming.overrides();
        assert_eq!(
            overrides.type_name_generator(),
            Some("nameforge_plugins::PrefixedTypeNames")
        );
        assert_eq!(
            overrides.enum_name_generator(),
            Some("plugins/libcustom.so:custom::Enums")
        );
        assert_eq!(overrides.property_name_generator(), None);
        assert_eq!(
            config.naming.plugin_dirs_in(Path::new("/project")),
            vec![PathBuf::from("/project/plugins")]
        );
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = parse_str("[naming]\nname_generator = \"x\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_descriptor_is_rejected() {
        let err = parse_str("[naming]\nproperty_name_generator = \"gen:\"\n").unwrap_err();
        match *err {
            Error::InvalidDescriptor {
                key, descriptor, ..
            } => {
                assert_eq!(key, "property_name_generator");
                assert_eq!(descriptor, "gen:");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_descriptor_means_default() {
        let config = parse_str("[naming]\nenum_name_generator = \"\"\n").unwrap();
        assert!(config.naming.overrides().is_empty());
    }
}
