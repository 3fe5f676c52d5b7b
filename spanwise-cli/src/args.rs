//! Command-line argument parsing

use clap::Parser;
use spanwise::DEFAULT_UNIT;

/// Humanize an elapsed duration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Duration to humanize (must be a positive number)
    #[arg(allow_negative_numbers = true)]
    pub duration: String,

    /// Unit of the duration: ms, s, m, h, d, w, M, y or a long name like "days"
    #[arg(default_value = DEFAULT_UNIT)]
    pub unit: String,

    /// Print the breakdown instead of the display string
    #[arg(short, long, default_value = "false")]
    pub object: bool,

    /// Print the result as JSON
    #[arg(short, long, default_value = "false")]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub debug: bool,
}
