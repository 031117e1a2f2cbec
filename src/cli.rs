use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::picker::selection::SelectionMode;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ModeArg {
    Single,
    Range,
}

impl From<ModeArg> for SelectionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => SelectionMode::Single,
            ModeArg::Range => SelectionMode::Range,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Pick a date or a date range in the terminal; committed values are printed as JSON."
)]
pub struct Cli {
    /// YAML file with picker props (label, mode, value, minDate, maxDate, ...).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Overrides the mode from the config file.
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Write tracing output to this file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, action = ArgAction::SetTrue)]
    pub debug: bool,
}
