// chfmt-cli/src/config.rs
//
// Defines default configuration constants for the `chfmt` command.

pub const DEFAULT_SRC_FORMAT: &str = "jpeg";
pub const DEFAULT_DST_FORMAT: &str = "png";

/// More positional arguments than this is a usage error.
pub const MAX_POSITIONAL_ARGS: usize = 2;

pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
