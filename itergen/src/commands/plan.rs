use clap::Args;
use eyre::{Context, Result};
use itergen_codegen::TemplateStore;

use super::{UnwrapOrExit, request::RequestArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PlanCommand {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let request = self.request.to_request().unwrap_or_exit();
        let store = TemplateStore::embedded();

        let report = ops::plan(&store, request).unwrap_or_exit();
        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize plan")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
