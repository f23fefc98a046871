//! depmerge CLI.

use clap::Parser;
use depmerge_cli::cli::{Cli, Command};
use depmerge_cli::commands::{run_canonicalize, run_reconcile};
use depmerge_cli::logging::init_logging;

mod summary;

use crate::summary::{print_canonicalize_summary, print_reconcile_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Canonicalize(args) => match run_canonicalize(args) {
            Ok(result) => {
                print_canonicalize_summary(&result, args.preview, args.show_rows);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Reconcile(args) => match run_reconcile(args) {
            Ok(result) => {
                print_reconcile_summary(&result, args.show_rows);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}
