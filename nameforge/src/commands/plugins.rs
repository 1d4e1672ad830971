use clap::Args;
use eyre::Result;

use super::NamingArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PluginsCommand {
    #[command(flatten)]
    pub naming: NamingArgs,
}

impl PluginsCommand {
    /// Run the plugins command.
    ///
    /// Configured overrides are resolved first, so libraries they name are
    /// loaded and listed too.
    pub fn run(&self) -> Result<()> {
        let config = self.naming.open_config();
        let pipeline = self.naming.pipeline(&config);

        let report = ops::plugins(pipeline.loader());
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
