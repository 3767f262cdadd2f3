// tests/config.rs
use clap::{CommandFactory, Parser};
use glam::IVec2;
use std::io::Write;
use tempfile::NamedTempFile;
use toy_robot::{Board, BoardError, Cli, ConfigError, SimulatorConfig, logger};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_config_builds_default_board() {
    let config = SimulatorConfig::default();
    assert_eq!(config.board(), Ok(Board::default()));
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
[table]
width = 8
height = 6
origin = [2, -3]
"#,
    );

    let config = SimulatorConfig::from_file(file.path()).unwrap();
    let board = config.board().unwrap();
    assert_eq!(board.width(), 8);
    assert_eq!(board.height(), 6);
    assert_eq!(board.origin(), IVec2::new(2, -3));
}

#[test]
fn test_missing_keys_use_defaults() {
    let config = SimulatorConfig::from_toml_str("[table]\nwidth = 10\n").unwrap();
    assert_eq!(config.table.width, 10);
    assert_eq!(config.table.height, Board::DEFAULT_HEIGHT);
    assert_eq!(config.table.origin, IVec2::ZERO);

    let empty = SimulatorConfig::from_toml_str("").unwrap();
    assert_eq!(empty, SimulatorConfig::default());
}

#[test]
fn test_invalid_dimensions_fail_at_board_construction() {
    let config = SimulatorConfig::from_toml_str("[table]\nwidth = 0\n").unwrap();
    assert!(matches!(
        config.board(),
        Err(BoardError::InvalidDimensions { width: 0, .. })
    ));
}

#[test]
fn test_malformed_toml() {
    let result = SimulatorConfig::from_toml_str("[table]\nwidth = \"wide\"\n");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_missing_file() {
    let result = SimulatorConfig::from_file("/nonexistent/toy-robot.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_cli_overrides_config_file() {
    let file = write_config("[table]\nwidth = 8\nheight = 6\n");
    let path = file.path().to_str().unwrap();

    let cli = Cli::try_parse_from([
        "toy-robot",
        "--config",
        path,
        "--height",
        "3",
        "--origin-x",
        "-2",
    ])
    .unwrap();
    let config = cli.resolve_config().unwrap();

    assert_eq!(config.table.width, 8);
    assert_eq!(config.table.height, 3);
    assert_eq!(config.table.origin, IVec2::new(-2, 0));
}

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["toy-robot"]).unwrap();
    assert!(!cli.quiet);
    assert_eq!(cli.verbose, 0);
    assert_eq!(cli.resolve_config().unwrap(), SimulatorConfig::default());
}

#[test]
fn test_verbosity_levels() {
    let cli = Cli::try_parse_from(["toy-robot", "-vv", "-q"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);

    assert_eq!(logger::default_filter(0), "toy_robot=warn");
    assert_eq!(logger::default_filter(2), "toy_robot=debug");
    assert_eq!(logger::default_filter(9), "toy_robot=trace");
}

#[test]
fn test_help_describes_rectangular_table() {
    let command = Cli::command();
    let about = command.get_about().map(|about| about.to_string()).unwrap_or_default();
    assert!(about.contains("rectangular table"), "about text: {about}");
}
