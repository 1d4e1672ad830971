use clap::Args;
use eyre::Result;

use super::NamingArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub naming: NamingArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.naming.open_config();
        let pipeline = self.naming.pipeline(&config);

        let report = ops::check(&config, &pipeline);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
