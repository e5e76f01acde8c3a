use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use itergen_codegen::TemplateStore;

use super::{UnwrapOrExit, request::RequestArgs};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Directory the generated file is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the generated file instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Skip formatting with gofmt
    #[arg(long)]
    pub no_fmt: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let request = self.request.to_request().unwrap_or_exit();
        let store = TemplateStore::embedded();

        let report = ops::generate(
            &store,
            request,
            GenerateOptions {
                output_dir: &self.output_dir,
                dry_run: self.dry_run,
                format: !self.no_fmt,
            },
        )
        .unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
