//! gradeplan - Main entry point
//!
//! Parses the command line, loads the curriculum and dispatches to the
//! wizard or one of the non-interactive commands.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, error, info};

use gradeplan::app::App;
use gradeplan::cli::{Cli, Commands};
use gradeplan::config::AppConfig;
use gradeplan::curriculum::Curriculum;
use gradeplan::error::GradePlanError;
use gradeplan::ui::screens::{semester_overview, subject_line};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let config = AppConfig::from_cli(&cli);

    if let Err(e) = config.init_logging() {
        eprintln!("✗ {}", e);
        return ExitCode::FAILURE;
    }
    info!("gradeplan starting up");
    debug!(?config, "Configuration resolved");

    let result = match cli.command {
        Some(Commands::Validate { path }) => validate_file(&path),
        Some(Commands::Show { semester }) => {
            config.curriculum.load().and_then(|c| show_semester(&c, &semester))
        }
        Some(Commands::Run) | None => config.curriculum.load().and_then(|c| run_wizard(&c)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("✗ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the interactive wizard
fn run_wizard(curriculum: &Curriculum) -> anyhow::Result<()> {
    // Fail before touching the terminal if the current semester is missing
    let mut app = App::new(curriculum)?;

    debug!("Initializing terminal for TUI mode");
    enable_raw_mode()
        .map_err(|e| GradePlanError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    if let Err(e) = crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(GradePlanError::terminal(format!("Failed to enter alternate screen: {}", e)).into());
    }

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| GradePlanError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| {
            let result = app.run(&mut terminal);
            let _ = terminal.show_cursor();
            result
        });

    // Always restore the terminal, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    Ok(result?)
}

/// Print a semester's details
fn show_semester(curriculum: &Curriculum, key: &str) -> anyhow::Result<()> {
    let semester = curriculum
        .semester(key)
        .ok_or_else(|| GradePlanError::missing_semester(key))?;

    for (label, value) in semester_overview(&curriculum.branch_info(), semester) {
        println!("{:<16}{}", label, value);
    }
    println!();
    for subject in &semester.subjects {
        println!("  {}", subject_line(subject));
    }
    Ok(())
}

/// Load and validate a curriculum file
fn validate_file(path: &Path) -> anyhow::Result<()> {
    info!("Validating curriculum file: {:?}", path);
    let curriculum = Curriculum::check_file(path)?;
    let semesters: usize = curriculum.years.len();
    println!(
        "✓ Curriculum is valid: {} {} ({} semesters)",
        curriculum.branch, curriculum.regulation, semesters
    );
    Ok(())
}
