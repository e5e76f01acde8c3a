use std::path::PathBuf;

use clap::Args;
use itergen_codegen::{GenerationRequest, Result};

/// Flags describing what to generate, shared by `generate` and `plan`.
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Element type, optionally package qualified (e.g. 'int', 'os:*os.File', 'chan float64')
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        required_unless_present = "config"
    )]
    pub ty: Option<String>,

    /// Package clause of the generated file
    #[arg(long, required_unless_present = "config")]
    pub pkg: Option<String>,

    /// Load the request from a TOML file; capability flags add to it
    #[arg(short, long, conflicts_with_all = ["ty", "pkg"])]
    pub config: Option<PathBuf>,

    /// Generate Map plus a conversion to this type (repeatable)
    #[arg(long, value_name = "TYPE")]
    pub map: Vec<String>,

    /// Generate Filter
    #[arg(long)]
    pub filter: bool,

    /// Generate All
    #[arg(long)]
    pub all: bool,

    /// Generate Some
    #[arg(long)]
    pub some: bool,

    /// Generate ForEach
    #[arg(long = "foreach")]
    pub for_each: bool,

    /// Generate Concat
    #[arg(long)]
    pub concat: bool,

    /// Generate Find
    #[arg(long)]
    pub find: bool,

    /// Generate Reverse
    #[arg(long)]
    pub reverse: bool,

    /// Generate Splice
    #[arg(long)]
    pub splice: bool,

    /// Generate a reducer accumulating into this type (repeatable)
    #[arg(long, value_name = "TYPE")]
    pub reduce: Vec<String>,

    /// Generate Array (channel types only)
    #[arg(long)]
    pub array: bool,
}

impl RequestArgs {
    /// Build the request from the config file, if any, and the flags.
    pub fn to_request(&self) -> Result<GenerationRequest> {
        let mut request = match &self.config {
            Some(path) => GenerationRequest::load(path)?,
            None => GenerationRequest::new(
                self.ty.clone().unwrap_or_default(),
                self.pkg.clone().unwrap_or_default(),
            ),
        };

        request.map.extend(self.map.iter().cloned());
        request.reduce.extend(self.reduce.iter().cloned());
        request.filter |= self.filter;
        request.all |= self.all;
        request.some |= self.some;
        request.for_each |= self.for_each;
        request.concat |= self.concat;
        request.find |= self.find;
        request.reverse |= self.reverse;
        request.splice |= self.splice;
        request.array |= self.array;

        Ok(request)
    }
}
