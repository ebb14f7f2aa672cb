//! Styled console status lines.

use console::style;
use moment_io_fs::{ReportTransfer, SpecTransferRecord};

pub fn print_working(message: &str) {
    println!("{} - {message}", style("Working").green());
}

pub fn print_success(message: &str) {
    println!("{} - {message}", style("Success").green());
}

pub fn print_error(message: &str) {
    eprintln!(
        "{} - {message}{}",
        style("Error").red(),
        style(" Aborting!").red()
    );
}

fn print_record(label: console::StyledObject<&str>, record: &SpecTransferRecord) {
    let c_reason = record
        .error
        .as_ref()
        .map(|e| format!(" ({e})"))
        .unwrap_or_default();
    println!(
        "{label} - Row: {} - Source: {}{}",
        style(&record.row_id).blue(),
        style(record.path_file_src.display()).yellow(),
        style(c_reason).dim()
    );
}

/// One line per row: skipped first, then succeeded.
pub fn print_rows(report: &ReportTransfer) {
    for record in &report.skipped {
        print_record(style("Skipped").red(), record);
    }
    for record in &report.succeeded {
        print_record(style("Success").green(), record);
    }
}

pub fn print_summary(report: &ReportTransfer) {
    println!();
    println!("{}: {}", style("Skipped").yellow(), report.cnt_skipped());
    println!("{}: {}", style("Succeeded").green(), report.cnt_succeeded());
    println!("{}: {}", style("Total").blue(), report.cnt_total());
}
