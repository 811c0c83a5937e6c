// chfmt-cli/src/app.rs
//
// The single linear pass behind the `chfmt` binary:
// parse flags -> check positional count -> init logging -> --version
// -> banner -> resolve working directory -> convert
//
// Output streams are injected so the whole flow can be driven from tests.

use crate::cli::Cli;
use crate::commands::convert::run_convert;
use crate::config::{MAX_POSITIONAL_ARGS, VERSION};
use crate::exit::Exit;
use crate::logging;

use clap::Parser;
use clap::error::ErrorKind;
use log::debug;

use std::env;
use std::ffi::OsString;
use std::io::Write;

/// Runs chfmt with `args` (program name first) and returns the exit status.
///
/// Write failures on `out`/`err` are ignored; there is nowhere left to report them.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> Exit
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            let _ = write!(out, "{}", e.render());
            return Exit::Ok;
        }
        Err(e) => {
            let _ = write!(err, "{}", e.render());
            return Exit::ParseFlagError;
        }
    };

    if cli.args.len() > MAX_POSITIONAL_ARGS {
        let _ = writeln!(err, "Error: Too many arguments");
        return Exit::TooManyArgs;
    }

    logging::init(cli.verbose);
    if !cli.args.is_empty() {
        debug!("Ignoring positional arguments: {:?}", cli.args);
    }

    if cli.version {
        let _ = writeln!(out, "chfmt version {VERSION}");
        return Exit::Ok;
    }

    let _ = writeln!(out, "Change formats...");

    let current_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            let _ = writeln!(err, "Error: Failed to get current directory: {e}");
            return Exit::FailedToGetCwd;
        }
    };

    run_convert(&current_dir, cli.src, cli.dst, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_captured(args: &[&str]) -> (Exit, String, String) {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let exit = run(args.iter().copied(), &mut out, &mut err);
        (
            exit,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn version_flag_prints_version() {
        let (exit, out, err) = run_captured(&["chfmt", "--version"]);
        assert_eq!(exit, Exit::Ok);
        assert_eq!(out, "chfmt version v0.0.1\n");
        assert!(err.is_empty());
    }

    #[test]
    fn too_many_arguments() {
        let (exit, out, err) = run_captured(&["chfmt", "a1", "a2", "a3"]);
        assert_eq!(exit, Exit::TooManyArgs);
        assert!(out.is_empty());
        assert_eq!(err, "Error: Too many arguments\n");
    }

    #[test]
    fn too_many_arguments_wins_over_version() {
        let (exit, out, _) = run_captured(&["chfmt", "--version", "a1", "a2", "a3"]);
        assert_eq!(exit, Exit::TooManyArgs);
        assert!(out.is_empty());
    }

    #[test]
    fn unknown_flag_is_a_parse_error() {
        let (exit, _, err) = run_captured(&["chfmt", "--bogus"]);
        assert_eq!(exit, Exit::ParseFlagError);
        assert!(err.contains("--bogus"));
    }

    #[test]
    fn missing_flag_value_is_a_parse_error() {
        let (exit, _, _) = run_captured(&["chfmt", "--src"]);
        assert_eq!(exit, Exit::ParseFlagError);
    }

    #[test]
    fn help_goes_to_stdout() {
        let (exit, out, _) = run_captured(&["chfmt", "--help"]);
        assert_eq!(exit, Exit::Ok);
        assert!(out.contains("--src"));
        assert!(out.contains("--dst"));
    }

    #[test]
    fn defaults_are_jpeg_to_png() {
        let cli = Cli::try_parse_from(["chfmt"]).unwrap();
        assert_eq!(cli.src, chfmt_core::Format::Jpeg);
        assert_eq!(cli.dst, chfmt_core::Format::Png);
        assert!(!cli.version);
        assert!(cli.args.is_empty());
    }
}
