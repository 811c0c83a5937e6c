// chfmt-cli/src/exit.rs
//
// Process exit codes returned by `chfmt`.

use std::process::ExitCode;

/// Status of one `chfmt` invocation.
///
/// `--help` is reported as [`Exit::Ok`], not [`Exit::ParseFlagError`]:
/// printing help is not a failure, unlike Go's `flag` package where
/// `-h` surfaces as a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Exit {
    Ok = 0,
    ParseFlagError = 10,
    TooManyArgs = 11,
    /// Reserved. Mismatched files are skipped rather than reported with this code.
    InvalidExtension = 12,
    FailedToGetCwd = 13,
    FailedToExec = 14,
}

impl Exit {
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code())
    }
}
