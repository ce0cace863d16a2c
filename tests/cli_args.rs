//! Integration tests for CLI argument handling
//!
//! Tests city selection and window validation from the command line.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_cityaq"))
        .args(args)
        .output()
        .expect("Failed to execute cityaq")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cityaq"), "Help should mention cityaq");
    assert!(
        stdout.contains("history-days"),
        "Help should mention --history-days flag"
    );
    assert!(stdout.contains("fresh"), "Help should mention --fresh flag");
}

#[test]
fn test_unsupported_city_prints_error_and_exits() {
    let output = run_cli(&["Atlantis"]);
    assert!(
        !output.status.success(),
        "Expected an unsupported city to fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unsupported city") && stderr.contains("Atlantis"),
        "Should name the rejected city: {}",
        stderr
    );
}

#[test]
fn test_zero_history_days_prints_error_and_exits() {
    let output = run_cli(&["Delhi", "--history-days", "0"]);
    assert!(!output.status.success(), "Expected a zero window to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("History window"),
        "Should explain the window bounds: {}",
        stderr
    );
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use cityaq::cli::{Cli, StartupConfig};

    #[test]
    fn test_cli_no_args_selects_delhi() {
        let cli = Cli::parse_from(["cityaq"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.city.name, "Delhi");
        assert_eq!(config.history_days, 7);
    }

    #[test]
    fn test_cli_city_is_resolved_case_insensitively() {
        let cli = Cli::parse_from(["cityaq", "hyderabad"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.city.name, "Hyderabad");
    }

    #[test]
    fn test_cli_unsupported_city_is_rejected() {
        let cli = Cli::parse_from(["cityaq", "Gotham"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }

    #[test]
    fn test_cli_history_days_window_is_validated() {
        let cli = Cli::parse_from(["cityaq", "Delhi", "--history-days", "90"]);
        assert!(StartupConfig::from_cli(&cli).is_ok());

        let cli = Cli::parse_from(["cityaq", "Delhi", "--history-days", "91"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }

    #[test]
    fn test_cli_fresh_flag_round_trips() {
        let cli = Cli::parse_from(["cityaq", "Delhi", "--fresh"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(config.fresh);
    }
}
