use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use nameforge_schema::Schema;

use super::{NamingArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct NameCommand {
    /// JSON schema file to name
    pub schema: PathBuf,

    /// Type name hint for the root schema (defaults to the file stem)
    #[arg(long)]
    pub hint: Option<String>,

    #[command(flatten)]
    pub naming: NamingArgs,
}

impl NameCommand {
    pub fn run(&self) -> Result<()> {
        let content = std::fs::read_to_string(&self.schema)
            .wrap_err_with(|| format!("Failed to read {}", self.schema.display()))?;
        let schema: Schema = serde_json::from_str(&content)
            .wrap_err_with(|| format!("Failed to parse {}", self.schema.display()))?;

        let config = self.naming.open_config();
        let pipeline = self.naming.pipeline(&config);

        let hint = self.hint.clone().or_else(|| {
            self.schema
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        });
        let report = ops::name(&pipeline, &schema, hint.as_deref()).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
