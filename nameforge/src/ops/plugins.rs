//! Plugins operation - list resolvable plugin types.

use nameforge_naming::PluginLoader;

use crate::reports::PluginsReport;

/// Execute the plugins operation.
pub fn plugins(loader: &PluginLoader) -> PluginsReport {
    PluginsReport {
        types: loader.available_types(),
    }
}
