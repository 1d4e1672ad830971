mod check;
mod completions;
mod name;
mod plugins;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use name::NameCommand;
use nameforge_config::{CONFIG_FILE_NAME, ConfigFile, GeneratorOverrides};
use nameforge_naming::{NamingPipeline, PluginLoader};
use plugins::PluginsCommand;

/// Extension trait for exiting on config and naming errors with pretty
/// formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for nameforge_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for nameforge_naming::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "nameforge")]
#[command(version)]
#[command(about = "Generate identifiers from schema names")]
pub(crate) struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Name(cmd) => cmd.run(),
            Commands::Plugins(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate nameforge.toml and resolve its generator overrides
    Check(CheckCommand),

    /// Print the identifiers generated for a JSON schema file
    Name(NameCommand),

    /// List the naming plugins that can be resolved
    Plugins(PluginsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options that select the naming generators.
#[derive(Args)]
pub(crate) struct NamingArgs {
    /// Path to nameforge.toml (defaults to ./nameforge.toml)
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Custom type name generator ([assemblyName:]fullTypeName)
    #[arg(long, value_name = "DESCRIPTOR")]
    pub type_name_generator: Option<String>,

    /// Custom property name generator ([assemblyName:]fullTypeName)
    #[arg(long, value_name = "DESCRIPTOR")]
    pub property_name_generator_type: Option<String>,

    /// Custom enum name generator ([assemblyName:]fullTypeName)
    #[arg(long, value_name = "DESCRIPTOR")]
    pub enum_name_generator_type: Option<String>,

    /// Additional directory searched for plugin libraries
    #[arg(long = "plugin-dir", value_name = "DIR")]
    pub plugin_dirs: Vec<PathBuf>,
}

impl NamingArgs {
    /// Open the config file, if present.
    pub fn open_config(&self) -> ConfigFile {
        ConfigFile::open_or_default(&self.config).unwrap_or_exit()
    }

    /// Overrides from the config file, replaced by those given on the
    /// command line.
    pub fn overrides(&self, config: &ConfigFile) -> GeneratorOverrides {
        config.overrides().overridden_by(GeneratorOverrides {
            type_name_generator_type: self.type_name_generator.clone(),
            property_name_generator_type: self.property_name_generator_type.clone(),
            enum_name_generator_type: self.enum_name_generator_type.clone(),
        })
    }

    /// A loader searching the config's plugin directories, then the ones
    /// given on the command line.
    pub fn loader(&self, config: &ConfigFile) -> PluginLoader {
        PluginLoader::new()
            .with_base_dir(config.base_dir())
            .with_search_dirs(config.plugin_dirs())
            .with_search_dirs(self.plugin_dirs.iter().cloned())
    }

    /// A pipeline with the effective overrides applied.
    pub fn pipeline(&self, config: &ConfigFile) -> NamingPipeline {
        let mut pipeline = NamingPipeline::new().with_loader(self.loader(config));
        pipeline
            .apply_overrides(&self.overrides(config))
            .unwrap_or_exit();
        pipeline
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_command_line_overrides_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[naming]\nenum_name_generator = \"a::Enums\"\ntype_name_generator = \"a::Types\"\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "nameforge",
            "check",
            "--config",
            path.to_str().unwrap(),
            "--enum-name-generator-type",
            "b::Enums",
        ]);
        let Commands::Check(cmd) = &cli.command else {
            panic!("expected check command");
        };

        let config = cmd.naming.open_config();
        let overrides = cmd.naming.overrides(&config);
        assert_eq!(overrides.enum_name_generator(), Some("b::Enums"));
        assert_eq!(overrides.type_name_generator(), Some("a::Types"));
        assert_eq!(overrides.property_name_generator(), None);
    }
}
