//! Tests for mapping global CLI flags onto logging configuration.

use clap::Parser;
use tracing::level_filters::LevelFilter;

use depmerge_cli::cli::{Cli, Command};
use depmerge_cli::logging::LogFormat;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("valid arguments")
}

#[test]
fn defaults_leave_timestamps_and_target_off() {
    let config = parse(&["depmerge", "--color", "never", "canonicalize", "in.xml"]).log_config();

    assert!(!config.with_timestamps);
    assert!(!config.with_target);
    assert!(!config.with_ansi);
    assert!(config.use_env_filter);
    assert_eq!(config.level_filter, LevelFilter::WARN);
    assert_eq!(config.format, LogFormat::Pretty);
}

#[test]
fn log_flags_reach_the_config() {
    let cli = parse(&[
        "depmerge",
        "--color",
        "always",
        "--log-timestamps",
        "--log-target",
        "--log-format",
        "compact",
        "--log-file",
        "run.log",
        "-v",
        "canonicalize",
        "in.xml",
    ]);
    assert!(matches!(cli.command, Command::Canonicalize(_)));
    let config = cli.log_config();

    assert!(config.with_timestamps);
    assert!(config.with_target);
    assert!(config.with_ansi);
    assert!(!config.use_env_filter);
    assert_eq!(config.level_filter, LevelFilter::INFO);
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(
        config.log_file.as_deref(),
        Some(std::path::Path::new("run.log"))
    );
}

#[test]
fn explicit_level_beats_verbosity_flags() {
    let config = parse(&[
        "depmerge",
        "-q",
        "--log-level",
        "debug",
        "reconcile",
        "a.xml",
        "b.xml",
    ])
    .log_config();

    assert_eq!(config.level_filter, LevelFilter::DEBUG);
    assert!(!config.use_env_filter);
}
