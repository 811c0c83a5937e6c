// chfmt-cli/src/commands/convert.rs
//
// Implementation of the conversion run. Hands the working directory to
// `chfmt-core` and turns the outcome into an exit code and, on failure, a
// single `Error: ` line.

use crate::exit::Exit;

use chfmt_core::Format;

use log::info;

use std::io::Write;
use std::path::Path;

/// Converts `src` images under `root` into `dst`.
pub fn run_convert<E: Write + ?Sized>(root: &Path, src: Format, dst: Format, err: &mut E) -> Exit {
    match chfmt_core::convert(root, src, dst) {
        Ok(report) => {
            info!(
                "Done: {} converted, {} skipped (content did not match extension)",
                report.converted.len(),
                report.mismatched.len()
            );
            Exit::Ok
        }
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            Exit::FailedToExec
        }
    }
}
