use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::zip::HostSystem;

/// Input used when no FILE is given, relative to the install root
pub const DEFAULT_INPUT: &str = "data/lorem.txt";

#[derive(Parser, Debug)]
#[command(name = "mkzip")]
#[command(version)]
#[command(about = "Store a single file in a new ZIP archive", long_about = None)]
#[command(after_help = "Examples:\n  \
  mkzip                          archive <install dir>/data/lorem.txt to lorem.zip next to it\n  \
  mkzip notes.txt -o out.zip     archive notes.txt into out.zip\n  \
  mkzip --host ntfs notes.txt    mark the archive as created on Windows")]
pub struct Cli {
    /// File to archive
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Archive to write (default: FILE with a .zip extension)
    #[arg(short = 'o', long, value_name = "ZIP")]
    pub output: Option<PathBuf>,

    /// Host system recorded in "version made by" (default: this system)
    #[arg(long, value_enum)]
    pub host: Option<HostArg>,

    /// More logging (-vv for trace)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostArg {
    Ntfs,
    Unix,
}

impl From<HostArg> for HostSystem {
    fn from(value: HostArg) -> Self {
        match value {
            HostArg::Ntfs => HostSystem::Ntfs,
            HostArg::Unix => HostSystem::Unix,
        }
    }
}

impl Cli {
    /// FILE, or [`DEFAULT_INPUT`] under the directory above the executable's.
    pub fn input_path(&self) -> Result<PathBuf> {
        if let Some(ref file) = self.file {
            return Ok(file.clone());
        }
        let exe = std::env::current_exe().context("cannot locate the running executable")?;
        Ok(default_input(&exe))
    }

    pub fn output_path(&self, input: &Path) -> PathBuf {
        match self.output {
            Some(ref output) => output.clone(),
            None => input.with_extension("zip"),
        }
    }

    pub fn host_system(&self) -> HostSystem {
        self.host.map(HostSystem::from).unwrap_or_else(HostSystem::current)
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn default_input(exe: &Path) -> PathBuf {
    let root = exe.parent().and_then(Path::parent).unwrap_or(Path::new("."));
    root.join(DEFAULT_INPUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["mkzip", "notes.txt"]).unwrap();
        assert_eq!(cli.input_path().unwrap(), PathBuf::from("notes.txt"));
        assert_eq!(cli.output_path(Path::new("notes.txt")), PathBuf::from("notes.zip"));
        assert_eq!(cli.host_system(), HostSystem::current());
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    #[test]
    fn explicit_options() {
        let cli =
            Cli::try_parse_from(["mkzip", "a/b.txt", "-o", "out.zip", "--host", "ntfs", "-vv"])
                .unwrap();
        assert_eq!(cli.output_path(Path::new("a/b.txt")), PathBuf::from("out.zip"));
        assert_eq!(cli.host_system(), HostSystem::Ntfs);
        assert_eq!(cli.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["mkzip", "-q", "-v"]).is_err());
        let cli = Cli::try_parse_from(["mkzip", "-q"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::Error);
    }

    #[test]
    fn unknown_host_is_rejected() {
        assert!(Cli::try_parse_from(["mkzip", "--host", "amiga"]).is_err());
    }

    #[test]
    fn default_input_is_beside_bin_dir() {
        assert_eq!(
            default_input(Path::new("/opt/mkzip/bin/mkzip")),
            PathBuf::from("/opt/mkzip/data/lorem.txt")
        );
    }

    #[test]
    fn extensionless_input_gets_zip() {
        let cli = Cli::try_parse_from(["mkzip"]).unwrap();
        assert_eq!(cli.output_path(Path::new("data/README")), PathBuf::from("data/README.zip"));
        assert!(cli.input_path().unwrap().ends_with(DEFAULT_INPUT));
    }
}
