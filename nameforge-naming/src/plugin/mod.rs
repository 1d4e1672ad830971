//! Generator plugins resolved from textual descriptors.
//!
//! A descriptor names a plugin type as `fullTypeName` or
//! `assemblyName:fullTypeName`. An assembly is where plugin types come from:
//!
//! - a crate linked into the running binary, whose types are registered with
//!   [`naming_plugin!`](crate::naming_plugin), or
//! - a dynamic library loaded at runtime, which exports its types with
//!   [`export_naming_plugins!`](crate::export_naming_plugins).
//!
//! # Example
//!
//! ```ignore
//! #[derive(Default)]
//! pub struct ScreamingEnumNames;
//!
//! impl EnumNameGenerator for ScreamingEnumNames {
//!     fn generate_enum_name(&self, ...) -> Result<Identifier> { ... }
//! }
//!
//! nameforge_naming::naming_plugin!(ScreamingEnumNames: enum_generator);
//!
//! let loader = PluginLoader::new();
//! let generator = loader.resolve_enum_generator("my_plugins::ScreamingEnumNames")?;
//! ```

mod descriptor;
mod library;
mod loader;

use std::{borrow::Cow, ffi::c_char, fmt, panic};

pub use descriptor::{AssemblyRef, TypeDescriptor};
#[doc(hidden)]
pub use inventory;
pub use loader::{AvailableType, PluginLoader};

use crate::{EnumNameGenerator, PropertyNameGenerator, Slot, TypeNameGenerator};

/// Version of the dynamic library declaration layout.
pub const PLUGIN_ABI_VERSION: u32 = 2;

/// Version of this crate; dynamic libraries must be built against the same one.
pub const NAMING_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `rustc --version` of the compiler that built this crate. Dynamic libraries
/// must be built by the same compiler.
pub const RUSTC_VERSION: &str = env!("NAMEFORGE_RUSTC_VERSION");

#[doc(hidden)]
pub const RUSTC_VERSION_NUL: &str = concat!(env!("NAMEFORGE_RUSTC_VERSION"), "\0");

/// Symbol name of the [`PluginDeclaration`] a dynamic library exports.
pub const PLUGIN_DECLARATION_SYMBOL: &[u8] = b"NAMEFORGE_PLUGIN_DECLARATION\0";

/// An instantiated plugin object.
///
/// A plugin implements one or more naming contracts. The conversion methods
/// hand out the contract implementations; the default implementations return
/// `None`, meaning the contract is not implemented.
///
/// Implement this with [`naming_plugin!`](crate::naming_plugin) rather than by
/// hand.
pub trait NamingPlugin: Send + Sync + 'static {
    /// Check whether this plugin implements the contract of `slot`.
    fn implements(&self, slot: Slot) -> bool;

    fn into_enum_generator(self: Box<Self>) -> Option<Box<dyn EnumNameGenerator>> {
        None
    }

    fn into_type_generator(self: Box<Self>) -> Option<Box<dyn TypeNameGenerator>> {
        None
    }

    fn into_property_generator(self: Box<Self>) -> Option<Box<dyn PropertyNameGenerator>> {
        None
    }
}

/// The contracts a plugin type implements, known without constructing it.
///
/// Implemented by [`naming_plugin!`](crate::naming_plugin).
pub trait PluginContracts {
    const SLOTS: &'static [Slot];
}

/// A constructible plugin type: a full type name, the contracts it
/// implements and a no-argument constructor.
#[derive(Clone, Copy)]
pub struct PluginType {
    name: &'static str,
    slots: &'static [Slot],
    construct: fn() -> Box<dyn NamingPlugin>,
}

impl PluginType {
    /// Create a plugin type with an explicit constructor.
    pub const fn new(
        name: &'static str,
        slots: &'static [Slot],
        construct: fn() -> Box<dyn NamingPlugin>,
    ) -> Self {
        Self {
            name,
            slots,
            construct,
        }
    }

    /// Create a plugin type constructed through [`Default`].
    pub const fn of<T: NamingPlugin + PluginContracts + Default>(name: &'static str) -> Self {
        Self::new(name, T::SLOTS, construct_default::<T>)
    }

    /// The full type name (e.g., `my_plugins::ScreamingEnumNames`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The contracts instances of this type implement.
    pub fn slots(&self) -> &'static [Slot] {
        self.slots
    }

    /// Check if this type is named by `type_name`.
    ///
    /// `.` is accepted as a path separator in place of `::`.
    pub fn matches(&self, type_name: &str) -> bool {
        self.name == type_path(type_name)
    }

    /// Like [`matches`](Self::matches), but also accepts the path relative
    /// to the crate root (`MyCompany.Gen` for `my_plugins::MyCompany::Gen`).
    pub fn matches_in_crate(&self, type_name: &str) -> bool {
        let type_name = type_path(type_name);
        self.name == type_name
            || self
                .name
                .split_once("::")
                .is_some_and(|(_, relative)| relative == type_name)
    }

    /// Run the constructor, capturing a panic as its message.
    pub(crate) fn instantiate(&self) -> Result<Box<dyn NamingPlugin>, String> {
        panic::catch_unwind(self.construct).map_err(|payload| {
            payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string())
        })
    }
}

impl fmt::Debug for PluginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginType")
            .field("name", &self.name)
            .field("slots", &self.slots)
            .finish()
    }
}

fn type_path(type_name: &str) -> Cow<'_, str> {
    if type_name.contains('.') {
        Cow::Owned(type_name.replace('.', "::"))
    } else {
        Cow::Borrowed(type_name)
    }
}

fn construct_default<T: NamingPlugin + Default>() -> Box<dyn NamingPlugin> {
    Box::new(T::default())
}

/// A plugin type registered by a crate linked into the binary.
#[derive(Debug)]
pub struct LinkedPluginType {
    assembly: &'static str,
    ty: PluginType,
}

impl LinkedPluginType {
    pub const fn new(assembly: &'static str, ty: PluginType) -> Self {
        Self { assembly, ty }
    }

    /// Name of the registering crate.
    pub fn assembly(&self) -> &'static str {
        self.assembly
    }

    pub fn plugin_type(&self) -> &PluginType {
        &self.ty
    }
}

inventory::collect!(LinkedPluginType);

/// The declaration a plugin dynamic library exports under
/// [`PLUGIN_DECLARATION_SYMBOL`].
///
/// Only the first two fields have a C layout. The rest are Rust types whose
/// layout is fixed only for one compiler, so they are read after
/// `rustc_version` has been checked.
#[repr(C)]
#[derive(Debug)]
pub struct PluginDeclaration {
    /// Must equal [`PLUGIN_ABI_VERSION`].
    pub abi_version: u32,
    /// NUL-terminated; must equal [`RUSTC_VERSION`].
    pub rustc_version: *const c_char,
    /// Must equal [`NAMING_VERSION`].
    pub naming_version: &'static str,
    /// The exported plugin types.
    pub types: &'static [PluginType],
}

// SAFETY: `rustc_version` points to a string literal, which is immutable and
// lives for the whole program.
unsafe impl Sync for PluginDeclaration {}

/// Implement [`NamingPlugin`] for a type and register it with the crate it is
/// linked into.
///
/// List the contracts the type implements: `enum_generator`,
/// `type_generator` and/or `property_generator`. The type must implement
/// [`Default`], which serves as the plugin constructor. Its full name is the
/// module path of the invocation followed by the type name.
///
/// ```ignore
/// naming_plugin!(ScreamingEnumNames: enum_generator);
/// naming_plugin!(SnakeCaseNames: type_generator, property_generator);
/// ```
#[macro_export]
macro_rules! naming_plugin {
    ($ty:ident : $($slot:ident),+ $(,)?) => {
        impl $crate::plugin::NamingPlugin for $ty {
            fn implements(&self, slot: $crate::Slot) -> bool {
                false $(|| slot == $crate::__naming_plugin_slot!($slot))+
            }

            $($crate::__naming_plugin_into!($slot);)+
        }

        impl $crate::plugin::PluginContracts for $ty {
            const SLOTS: &'static [$crate::Slot] = &[$($crate::__naming_plugin_slot!($slot)),+];
        }

        $crate::plugin::inventory::submit! {
            $crate::plugin::LinkedPluginType::new(
                env!("CARGO_CRATE_NAME"),
                $crate::plugin::PluginType::of::<$ty>(
                    concat!(module_path!(), "::", stringify!($ty)),
                ),
            )
        }
    };
}

/// Export plugin types from a `cdylib` so [`PluginLoader`] can load them by
/// path.
///
/// Each type must already implement [`NamingPlugin`] and [`PluginContracts`]
/// (through [`naming_plugin!`](crate::naming_plugin)) and be named from the
/// module the macro is invoked in.
///
/// The loader rejects a library built by another compiler or against another
/// version of this crate.
///
/// ```ignore
/// export_naming_plugins!(ScreamingEnumNames, SnakeCaseNames);
/// ```
#[macro_export]
macro_rules! export_naming_plugins {
    ($($ty:ident),+ $(,)?) => {
        #[doc(hidden)]
        #[unsafe(no_mangle)]
        pub static NAMEFORGE_PLUGIN_DECLARATION: $crate::plugin::PluginDeclaration =
            $crate::plugin::PluginDeclaration {
                abi_version: $crate::plugin::PLUGIN_ABI_VERSION,
                rustc_version: $crate::plugin::RUSTC_VERSION_NUL
                    .as_ptr()
                    .cast::<::std::ffi::c_char>(),
                naming_version: $crate::plugin::NAMING_VERSION,
                types: &[$(
                    $crate::plugin::PluginType::of::<$ty>(
                        concat!(module_path!(), "::", stringify!($ty)),
                    )
                ),+],
            };
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __naming_plugin_slot {
    (enum_generator) => {
        $crate::Slot::Enum
    };
    (type_generator) => {
        $crate::Slot::Type
    };
    (property_generator) => {
        $crate::Slot::Property
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __naming_plugin_into {
    (enum_generator) => {
        fn into_enum_generator(
            self: ::std::boxed::Box<Self>,
        ) -> ::std::option::Option<::std::boxed::Box<dyn $crate::EnumNameGenerator>> {
            ::std::option::Option::Some(self)
        }
    };
    (type_generator) => {
        fn into_type_generator(
            self: ::std::boxed::Box<Self>,
        ) -> ::std::option::Option<::std::boxed::Box<dyn $crate::TypeNameGenerator>> {
            ::std::option::Option::Some(self)
        }
    };
    (property_generator) => {
        fn into_property_generator(
            self: ::std::boxed::Box<Self>,
        ) -> ::std::option::Option<::std::boxed::Box<dyn $crate::PropertyNameGenerator>> {
            ::std::option::Option::Some(self)
        }
    };
}
