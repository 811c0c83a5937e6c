// chfmt-cli/src/lib.rs
//
// Library portion of the chfmt CLI application.
// Contains argument definitions and the run flow.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod exit;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use app::run;
pub use cli::Cli;
pub use exit::Exit;
