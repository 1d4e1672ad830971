//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod check;
mod name;
mod output;
mod plugins;

pub use check::CheckReport;
pub use name::{NameReport, NamedItem};
pub use output::{Report, TerminalOutput};
pub use plugins::PluginsReport;
