// chfmt-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use crate::config::{DEFAULT_DST_FORMAT, DEFAULT_SRC_FORMAT};
use chfmt_core::Format;
use clap::Parser;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "chfmt",
    about = "chfmt: Recursive image format converter",
    long_about = "Converts every image of the source format found under the current \
                  directory into the destination format, writing each result next to \
                  its original.",
    // `--version` is a plain flag below so the output matches `chfmt version vX.Y.Z`.
    disable_version_flag = true
)]
pub struct Cli {
    /// Print version information.
    #[arg(long)]
    pub version: bool,

    /// Format of the source image file(s): jpeg (or jpg), png or gif
    #[arg(long, value_name = "FORMAT", default_value = DEFAULT_SRC_FORMAT)]
    pub src: Format,

    /// Format of the destination image file(s): jpeg, png or gif
    #[arg(long, value_name = "FORMAT", default_value = DEFAULT_DST_FORMAT)]
    pub dst: Format,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Extra positional arguments are accepted but ignored, up to a limit.
    #[arg(hide = true, value_name = "ARGS")]
    pub args: Vec<String>,
}
