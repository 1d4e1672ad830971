//! Check command report data structures.

use std::path::PathBuf;

use nameforge_naming::{Slot, SlotSource};

use super::output::{Output, Report};

/// Report data from config validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Whether the config file exists.
    pub config_found: bool,
    /// What fills each naming slot.
    pub slots: Vec<(Slot, SlotSource)>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if self.config_found {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        } else {
            out.warning(&format!(
                "{} not found, using default generators",
                self.config_path.display()
            ));
        }
        out.newline();

        out.section("generators");
        for (slot, source) in &self.slots {
            out.key_value_indented(slot.as_str(), &source.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::StringOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            config_path: PathBuf::from("nameforge.toml"),
            config_found: true,
            slots: vec![
                (Slot::Type, SlotSource::Default),
                (Slot::Property, SlotSource::Default),
                (
                    Slot::Enum,
                    SlotSource::Plugin("nameforge_plugins::ScreamingEnumNames".to_string()),
                ),
            ],
        };

        insta::assert_snapshot!(StringOutput::render(&report), @r"
        ✓ nameforge.toml is valid

        generators:
          type: default
          property: default
          enum: nameforge_plugins::ScreamingEnumNames
        ");
    }

    #[test]
    fn test_render_missing_config() {
        let report = CheckReport {
            config_path: PathBuf::from("nameforge.toml"),
            config_found: false,
            slots: vec![(Slot::Type, SlotSource::Default)],
        };

        let rendered = StringOutput::render(&report);
        assert!(rendered.starts_with("warning: nameforge.toml not found"));
    }
}
