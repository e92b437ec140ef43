use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ipcount",
    about = "Count IPv4 addresses found in log lines",
    version,
    long_about = None
)]
pub struct Args {
    /// Read logs from a file instead of stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Show only the top N addresses (0 = all)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub top: i64,

    /// Sort by count (desc) or address (asc)
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = SortMode::Count)]
    pub sort: SortMode,

    /// Only count addresses whose octets are within 0-255
    #[arg(long, overrides_with = "no_strict")]
    pub strict: bool,

    /// Count every dotted-quad match, valid or not (default)
    #[arg(long = "no-strict", overrides_with = "strict")]
    pub no_strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn is_strict(&self) -> bool {
        self.strict && !self.no_strict
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Highest count first, ties by address
    #[default]
    Count,
    /// Address text ascending
    Ip,
}
