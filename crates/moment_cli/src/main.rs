//! moment: copy or move files listed in a spreadsheet manifest.

mod args;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use moment_io_fs::{EnumTransferMode, EnumTransferPathMode, transfer_manifest};
use moment_io_xlsx::read_manifest;
use moment_log::{SpecLoggingConfig, append_status_log, init_tracing};

use args::Cli;
use output::{print_error, print_rows, print_success, print_summary, print_working};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&SpecLoggingConfig::from_verbose(cli.verbose)) {
        eprintln!("{e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{e:#}."));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let path_dir_base =
        std::env::current_dir().context("Failed to determine the working directory")?;

    print_working(if cli.no_header {
        "Header flag disabled."
    } else {
        "Header flag enabled."
    });
    let manifest = read_manifest(&cli.src_file, &cli.read_options())?;
    print_success(&format!("Manifest read: {} row(s).", manifest.len()));

    let spec_options = cli.transfer_options(&path_dir_base);
    print_working(match spec_options.rule_path {
        EnumTransferPathMode::Relative => "Relative paths enabled.",
        EnumTransferPathMode::Absolute => "Absolute paths enabled.",
    });
    print_working(match (spec_options.rule_transfer, spec_options.if_dry_run) {
        (EnumTransferMode::Copy, false) => "Copying..",
        (EnumTransferMode::Move, false) => "Moving..",
        (EnumTransferMode::Copy, true) => "Test run, nothing will be copied..",
        (EnumTransferMode::Move, true) => "Test run, nothing will be moved..",
    });

    let report = transfer_manifest(&manifest, &spec_options);
    print_success("Completed.");

    if cli.verbose {
        print_rows(&report);
    }
    print_summary(&report);

    if cli.logging {
        let path_file_log = cli.log_file_path(&path_dir_base);
        append_status_log(&path_file_log, &report)?;
        print_success(&format!("Status log written: {}", path_file_log.display()));
    }

    Ok(())
}
