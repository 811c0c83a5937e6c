// chfmt-cli/src/main.rs
//
// Entry point for the `chfmt` binary: wires the real process streams into
// the run flow and turns its status into the process exit code.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    chfmt_cli::run(std::env::args_os(), &mut io::stdout(), &mut io::stderr()).into()
}
