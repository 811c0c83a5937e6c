// chfmt-cli/src/logging.rs
//
// env_logger setup for the chfmt binary.
// Log records go to stderr so stdout only carries the banner and version.
// The filter defaults to `warn` (`debug` with --verbose) and can be
// overridden with RUST_LOG:
// - RUST_LOG=info: one line per converted file plus a summary
// - RUST_LOG=debug: request details, skipped files and ignored arguments

use std::io::Write;

/// Installs the global logger. Calling it again is a no-op.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    let env = env_logger::Env::default().default_filter_or(level);
    let result = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp(),
                record.level(),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized with default level: {}", level);
    }
}
