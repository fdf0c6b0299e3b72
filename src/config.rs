//! Runtime configuration resolved from the command line.
//!
//! There is no config file and no environment beyond `RUST_LOG`; the CLI
//! flags are the whole configuration surface.

use anyhow::Result;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::curriculum::Curriculum;

/// Where the curriculum dataset comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurriculumSource {
    /// Dataset compiled into the binary
    Builtin,
    /// JSON file given on the command line
    File(PathBuf),
}

impl CurriculumSource {
    /// Load and validate the dataset
    pub fn load(&self) -> Result<Curriculum> {
        match self {
            Self::Builtin => Ok(Curriculum::builtin()?),
            Self::File(path) => Curriculum::load_from_file(path),
        }
    }
}

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub curriculum: CurriculumSource,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            curriculum: cli
                .curriculum
                .clone()
                .map_or(CurriculumSource::Builtin, CurriculumSource::File),
            log_file: cli.log_file.clone(),
            verbose: cli.verbose,
        }
    }

    /// Default log filter when RUST_LOG is unset
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Install the global tracing subscriber.
    ///
    /// Logs go to the log file when one is configured so they do not tear
    /// through the wizard's alternate screen.
    pub fn init_logging(&self) -> Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_log_level()));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_file(true)
            .with_line_number(true);

        match &self.log_file {
            Some(path) => {
                let file = File::create(path)?;
                builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init()
                    .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
            }
            None => {
                builder
                    .with_writer(std::io::stderr)
                    .try_init()
                    .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_use_builtin() {
        let cli = Cli::try_parse_from(["gradeplan"]).unwrap();
        let config = AppConfig::from_cli(&cli);
        assert_eq!(config.curriculum, CurriculumSource::Builtin);
        assert_eq!(config.default_log_level(), "warn");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_flags_resolve() {
        let cli = Cli::try_parse_from([
            "gradeplan",
            "--curriculum",
            "custom.json",
            "--log-file",
            "gradeplan.log",
            "--verbose",
        ])
        .unwrap();
        let config = AppConfig::from_cli(&cli);
        assert_eq!(
            config.curriculum,
            CurriculumSource::File(PathBuf::from("custom.json"))
        );
        assert_eq!(config.log_file, Some(PathBuf::from("gradeplan.log")));
        assert_eq!(config.default_log_level(), "debug");
    }

    #[test]
    fn test_builtin_source_loads() {
        let curriculum = CurriculumSource::Builtin.load().unwrap();
        assert!(curriculum.current_semester().is_ok());
    }
}
