//! Name command report data structures.

use nameforge_naming::Slot;

use super::output::{Output, Report};

/// One generated identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedItem {
    pub slot: Slot,
    /// Where the name comes from, e.g. `Order.status`.
    pub path: String,
    pub identifier: String,
}

/// Report data from naming a schema.
#[derive(Debug)]
pub struct NameReport {
    pub items: Vec<NamedItem>,
}

impl Report for NameReport {
    fn render(&self, out: &mut dyn Output) {
        let slot_width = self
            .items
            .iter()
            .map(|item| item.slot.as_str().len())
            .max()
            .unwrap_or(0);
        let path_width = self
            .items
            .iter()
            .map(|item| item.path.chars().count())
            .max()
            .unwrap_or(0);

        for item in &self.items {
            out.preformatted(&format!(
                "{:<slot_width$}  {:<path_width$}  -> {}",
                item.slot.as_str(),
                item.path,
                item.identifier
            ));
        }
    }
}
