use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gradeplan - plan your semester grades from the terminal
#[derive(Parser, Debug)]
#[command(name = "gradeplan")]
#[command(about = "Confirm your semester, report marks and pick target grades")]
#[command(version)]
pub struct Cli {
    /// Curriculum JSON file to use instead of the built-in dataset
    #[arg(long, global = true)]
    pub curriculum: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive wizard
    Run,
    /// Print a semester's details without starting the wizard
    Show {
        /// Semester key (e.g., 2-1)
        #[arg(short, long, default_value = crate::curriculum::CURRENT_SEMESTER)]
        semester: String,
    },
    /// Validate a curriculum file
    Validate {
        /// Path to curriculum file to validate
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_runs_wizard() {
        let cli = Cli::try_parse_from(["gradeplan"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_show_defaults_to_current_semester() {
        let cli = Cli::try_parse_from(["gradeplan", "show"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                semester: "2-1".to_string()
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gradeplan",
            "show",
            "--semester",
            "2-2",
            "--curriculum",
            "data.json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.curriculum, Some(PathBuf::from("data.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_validate_requires_path() {
        assert!(Cli::try_parse_from(["gradeplan", "validate"]).is_err());
    }
}
