mod completions;
mod generate;
mod plan;
mod request;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use plan::PlanCommand;

/// Extension trait for exiting on generation errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for itergen_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "itergen")]
#[command(version)]
#[command(about = "Generate type-specialized Go iterables")]
pub(crate) struct Cli {
    /// Log debug output to stderr (overrides ITERGEN_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Plan(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an iterable source file for a type
    Generate(GenerateCommand),

    /// Show what would be generated without rendering or writing
    Plan(PlanCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "itergen", "generate", "-t", "os:*os.File", "--pkg", "files", "--filter", "--map",
            "int", "--map", "string", "--dry-run",
        ])
        .unwrap();

        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        let request = cmd.request.to_request().unwrap();
        assert_eq!(request.raw_type, "os:*os.File");
        assert_eq!(request.pkg, "files");
        assert_eq!(request.map, vec!["int", "string"]);
        assert!(request.filter);
        assert!(cmd.dry_run);
    }

    #[test]
    fn test_type_required_without_config() {
        assert!(Cli::try_parse_from(["itergen", "generate", "--pkg", "foo"]).is_err());
    }

    #[test]
    fn test_config_conflicts_with_type() {
        assert!(
            Cli::try_parse_from([
                "itergen", "plan", "--config", "req.toml", "-t", "int", "--pkg", "foo"
            ])
            .is_err()
        );
    }
}
