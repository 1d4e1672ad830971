//! Check operation - config validation and generator resolution.

use nameforge_config::ConfigFile;
use nameforge_naming::{NamingPipeline, Slot};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// `pipeline` must already have the config's overrides applied.
pub fn check(config: &ConfigFile, pipeline: &NamingPipeline) -> CheckReport {
    CheckReport {
        config_path: config.path().to_path_buf(),
        config_found: config.path().exists(),
        slots: Slot::ALL
            .into_iter()
            .map(|slot| (slot, pipeline.source(slot).clone()))
            .collect(),
    }
}
