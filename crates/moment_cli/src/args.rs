//! Command-line argument definitions using clap

use std::path::{Path, PathBuf};

use clap::Parser;
use moment_io_fs::{EnumTransferMode, EnumTransferPathMode, SpecTransferOptions};
use moment_io_xlsx::{C_SHEET_NAME_DEFAULT, SpecManifestReadOptions};
use moment_log::C_STATUS_LOG_FILE_DEFAULT;

/// Mass-copy or move files listed in a spreadsheet manifest.
///
/// Each row of the manifest names a file (column A), its source directory
/// (column B) and its destination directory (column C). Paths are relative to
/// the directory the tool is started in unless --abs-path is given.
/// Destination directories are created when needed.
#[derive(Parser, Debug)]
#[command(name = "moment")]
#[command(author, version)]
pub struct Cli {
    /// Manifest workbook (.xlsx, .xlsm, .xltx, .xltm)
    #[arg(short, long)]
    pub src_file: PathBuf,

    /// Sheet to read from
    #[arg(long, default_value = C_SHEET_NAME_DEFAULT)]
    pub sheet: String,

    /// Treat manifest directories as absolute paths
    #[arg(short, long)]
    pub abs_path: bool,

    /// Move the files instead of copying
    #[arg(short, long = "move")]
    pub move_files: bool,

    /// Test run: report what would happen without touching the filesystem
    #[arg(short, long, visible_alias = "dry-run")]
    pub test: bool,

    /// The sheet has no header row
    #[arg(short, long)]
    pub no_header: bool,

    /// Print every row outcome and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Append the run to the status log
    #[arg(short, long)]
    pub logging: bool,

    /// Status log location, relative to the working directory
    #[arg(long, env = "MOMENT_LOG_FILE", default_value = C_STATUS_LOG_FILE_DEFAULT)]
    pub log_file: PathBuf,
}

impl Cli {
    pub fn read_options(&self) -> SpecManifestReadOptions {
        SpecManifestReadOptions {
            sheet_name: self.sheet.clone(),
            if_has_header: !self.no_header,
        }
    }

    pub fn transfer_options(&self, path_dir_base: &Path) -> SpecTransferOptions {
        SpecTransferOptions {
            path_dir_base: path_dir_base.to_path_buf(),
            rule_path: if self.abs_path {
                EnumTransferPathMode::Absolute
            } else {
                EnumTransferPathMode::Relative
            },
            rule_transfer: if self.move_files {
                EnumTransferMode::Move
            } else {
                EnumTransferMode::Copy
            },
            if_dry_run: self.test,
        }
    }

    pub fn log_file_path(&self, path_dir_base: &Path) -> PathBuf {
        path_dir_base.join(&self.log_file)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use clap::Parser;
    use moment_io_fs::{EnumTransferMode, EnumTransferPathMode};

    use super::Cli;

    #[test]
    fn defaults_are_relative_copy_with_header() {
        let cli = Cli::try_parse_from(["moment", "-s", "files.xlsx"]).expect("parse");
        assert_eq!(cli.src_file, PathBuf::from("files.xlsx"));
        assert_eq!(cli.sheet, "Sheet1");

        let spec_read_options = cli.read_options();
        assert!(spec_read_options.if_has_header);

        let spec_options = cli.transfer_options(Path::new("/work"));
        assert_eq!(spec_options.path_dir_base, PathBuf::from("/work"));
        assert_eq!(spec_options.rule_path, EnumTransferPathMode::Relative);
        assert_eq!(spec_options.rule_transfer, EnumTransferMode::Copy);
        assert!(!spec_options.if_dry_run);
    }

    #[test]
    fn flags_switch_modes() {
        let cli = Cli::try_parse_from([
            "moment",
            "--src-file",
            "files.xlsx",
            "--sheet",
            "Batch",
            "-a",
            "-m",
            "--dry-run",
            "-n",
        ])
        .expect("parse");

        let spec_read_options = cli.read_options();
        assert_eq!(spec_read_options.sheet_name, "Batch");
        assert!(!spec_read_options.if_has_header);

        let spec_options = cli.transfer_options(Path::new("/work"));
        assert_eq!(spec_options.rule_path, EnumTransferPathMode::Absolute);
        assert_eq!(spec_options.rule_transfer, EnumTransferMode::Move);
        assert!(spec_options.if_dry_run);
    }

    #[test]
    fn src_file_is_required() {
        assert!(Cli::try_parse_from(["moment", "-v"]).is_err());
    }

    #[test]
    fn log_file_is_resolved_against_base() {
        let cli = Cli::try_parse_from(["moment", "-s", "files.xlsx", "--log-file", "runs/moment.log"])
            .expect("parse");
        assert_eq!(
            cli.log_file_path(Path::new("/work")),
            PathBuf::from("/work/runs/moment.log")
        );
    }
}
