//! Plugins command report data structures.

use nameforge_naming::plugin::AvailableType;

use super::output::{Output, Report};

/// Report data listing resolvable plugin types.
#[derive(Debug)]
pub struct PluginsReport {
    /// Available types, sorted by assembly then name.
    pub types: Vec<AvailableType>,
}

impl Report for PluginsReport {
    fn render(&self, out: &mut dyn Output) {
        if self.types.is_empty() {
            out.preformatted("No naming plugins available.");
            return;
        }

        let mut assembly = None;
        for ty in &self.types {
            if assembly != Some(ty.assembly.as_str()) {
                if assembly.is_some() {
                    out.newline();
                }
                out.section(&ty.assembly);
                assembly = Some(ty.assembly.as_str());
            }

            let slots = if ty.slots.is_empty() {
                "no naming contract".to_string()
            } else {
                ty.slots
                    .iter()
                    .map(|slot| slot.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            out.list_item(&format!("{} ({})", ty.name, slots));
        }
    }
}
