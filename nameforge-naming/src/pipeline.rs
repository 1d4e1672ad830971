//! The naming pipeline: one active generator per slot.

use std::{
    fmt,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
};

use nameforge_config::GeneratorOverrides;
use nameforge_schema::{EnumValue, ReservedNames, Schema, SchemaProperty};
use tracing::debug;

use crate::{
    DefaultEnumNameGenerator, DefaultPropertyNameGenerator, DefaultTypeNameGenerator,
    EnumNameGenerator, Error, Identifier, NormalizingEnumNameGenerator,
    NormalizingPropertyNameGenerator, NormalizingTypeNameGenerator, PluginLoader,
    PropertyNameGenerator, Result, Slot, TypeNameGenerator,
};

/// What fills a pipeline slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotSource {
    /// The normalizing decorator over the default base generator.
    Default,
    /// A plugin resolved from this descriptor.
    Plugin(String),
}

impl fmt::Display for SlotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotSource::Default => f.write_str("default"),
            SlotSource::Plugin(descriptor) => f.write_str(descriptor),
        }
    }
}

/// Composes the three naming slots.
///
/// Starts with the normalizing decorators over the default generators.
/// [`apply_overrides`](Self::apply_overrides) may replace any slot with a
/// plugin, but only until the first name is generated.
pub struct NamingPipeline {
    loader: PluginLoader,
    enum_generator: Box<dyn EnumNameGenerator>,
    type_generator: Box<dyn TypeNameGenerator>,
    property_generator: Box<dyn PropertyNameGenerator>,
    enum_source: SlotSource,
    type_source: SlotSource,
    property_source: SlotSource,
    started: AtomicBool,
}

impl NamingPipeline {
    pub fn new() -> Self {
        Self {
            loader: PluginLoader::new(),
            enum_generator: Box::new(NormalizingEnumNameGenerator::new(DefaultEnumNameGenerator)),
            type_generator: Box::new(NormalizingTypeNameGenerator::new(DefaultTypeNameGenerator)),
            property_generator: Box::new(NormalizingPropertyNameGenerator::new(
                DefaultPropertyNameGenerator,
            )),
            enum_source: SlotSource::Default,
            type_source: SlotSource::Default,
            property_source: SlotSource::Default,
            started: AtomicBool::new(false),
        }
    }

    /// Use `loader` to resolve override descriptors.
    pub fn with_loader(mut self, loader: PluginLoader) -> Self {
        self.loader = loader;
        self
    }

    /// Add directories searched for plugin libraries.
    pub fn with_search_dirs(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.loader = std::mem::take(&mut self.loader).with_search_dirs(dirs);
        self
    }

    pub fn loader(&self) -> &PluginLoader {
        &self.loader
    }

    /// Replace the slots named by `overrides` with freshly resolved plugins.
    ///
    /// Slots without a descriptor keep their current generator. A resolved
    /// plugin is used as is, without a normalizing decorator. Every
    /// descriptor is resolved before any slot changes, so on error the
    /// pipeline is left untouched.
    pub fn apply_overrides(&mut self, overrides: &GeneratorOverrides) -> Result<()> {
        if self.has_started() {
            return Err(Box::new(Error::OverridesAfterGeneration));
        }

        let type_generator = overrides
            .type_name_generator()
            .map(|d| self.loader.resolve_type_generator(d).map(|g| (d, g)))
            .transpose()?;
        let property_generator = overrides
            .property_name_generator()
            .map(|d| self.loader.resolve_property_generator(d).map(|g| (d, g)))
            .transpose()?;
        let enum_generator = overrides
            .enum_name_generator()
            .map(|d| self.loader.resolve_enum_generator(d).map(|g| (d, g)))
            .transpose()?;

        if let Some((descriptor, generator)) = type_generator {
            debug!(slot = %Slot::Type, descriptor, "replaced naming generator");
            self.type_generator = generator;
            self.type_source = SlotSource::Plugin(descriptor.to_string());
        }
        if let Some((descriptor, generator)) = property_generator {
            debug!(slot = %Slot::Property, descriptor, "replaced naming generator");
            self.property_generator = generator;
            self.property_source = SlotSource::Plugin(descriptor.to_string());
        }
        if let Some((descriptor, generator)) = enum_generator {
            debug!(slot = %Slot::Enum, descriptor, "replaced naming generator");
            self.enum_generator = generator;
            self.enum_source = SlotSource::Plugin(descriptor.to_string());
        }

        Ok(())
    }

    /// What currently fills `slot`.
    pub fn source(&self, slot: Slot) -> &SlotSource {
        match slot {
            Slot::Enum => &self.enum_source,
            Slot::Type => &self.type_source,
            Slot::Property => &self.property_source,
        }
    }

    /// Check if any name has been generated.
    pub fn has_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    fn start(&self) {
        self.started.store(true, Ordering::Release);
    }
}

impl Default for NamingPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NamingPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamingPipeline")
            .field("loader", &self.loader)
            .field("enum_source", &self.enum_source)
            .field("type_source", &self.type_source)
            .field("property_source", &self.property_source)
            .field("started", &self.has_started())
            .finish_non_exhaustive()
    }
}

impl EnumNameGenerator for NamingPipeline {
    fn generate_enum_name(
        &self,
        index: usize,
        name: &str,
        value: &EnumValue,
        schema: &Schema,
    ) -> Result<Identifier> {
        self.start();
        self.enum_generator
            .generate_enum_name(index, name, value, schema)
    }
}

impl TypeNameGenerator for NamingPipeline {
    fn generate_type_name(
        &self,
        schema: &Schema,
        type_name_hint: Option<&str>,
        reserved: &ReservedNames,
    ) -> Result<Identifier> {
        self.start();
        self.type_generator
            .generate_type_name(schema, type_name_hint, reserved)
    }
}

impl PropertyNameGenerator for NamingPipeline {
    fn generate_property_name(&self, property: &SchemaProperty<'_>) -> Result<Identifier> {
        self.start();
        self.property_generator.generate_property_name(property)
    }
}
